//! Filesystem boundary
//!
//!     RowReader streams records out of the CSV export, write_output persists the rendered text
//!     and Converter runs the whole pipeline: read, build, annotate, serialize, write.
//!
//!     Records are fed to the TableBuilder as they are read; the CSV file is never loaded as a
//!     whole. Errors of the underlying file are handed to the caller unchanged.

use crate::annotation::annotate_document;
use crate::building::{Record, TableBuilder};
use crate::error::Error;
use crate::formats::php::PhpFormat;
use crate::formats::FormatRegistry;
use crate::model::Document;
use crate::settings::{self, FeaturesConfig};
use std::fs::{self, File};
use std::path::Path;
use tracing::{debug, info};

/// Lazy sequence of CSV records, keyed by the header line
pub struct RowReader<R: std::io::Read> {
    records: csv::DeserializeRecordsIntoIter<R, Record>,
}

impl RowReader<File> {
    /// Open a CSV export. The path must exist and carry a `.csv` extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv {
            return Err(Error::InputWrongType(path.to_path_buf()));
        }

        debug!(path = %path.display(), "opening CSV input");
        let reader = csv::Reader::from_path(path)?;
        Ok(Self::from_csv(reader))
    }
}

impl<R: std::io::Read> RowReader<R> {
    /// Read CSV text from any reader, first line being the header.
    pub fn from_reader(reader: R) -> Self {
        Self::from_csv(csv::Reader::from_reader(reader))
    }

    fn from_csv(reader: csv::Reader<R>) -> Self {
        RowReader {
            records: reader.into_deserialize(),
        }
    }
}

impl<R: std::io::Read> Iterator for RowReader<R> {
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(|result| result.map_err(Error::from))
    }
}

/// Persist rendered text.
pub fn write_output(path: impl AsRef<Path>, text: &str) -> Result<(), Error> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|source| Error::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}

/// Runs a conversion with one configuration
pub struct Converter {
    config: FeaturesConfig,
    registry: FormatRegistry,
}

impl Converter {
    pub fn new(config: FeaturesConfig) -> Self {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(PhpFormat::new(config.output.php.header()));
        Converter { config, registry }
    }

    /// Converter using the embedded default configuration
    pub fn with_defaults() -> Result<Self, Error> {
        Ok(Self::new(settings::load_defaults()?))
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Fold all records into tables and annotate them.
    pub fn read_document<R: std::io::Read>(&self, rows: RowReader<R>) -> Result<Document, Error> {
        let mut builder = TableBuilder::with_columns(self.config.columns.clone());
        for record in rows {
            builder.push_record(&record?)?;
        }
        debug!(rows = builder.rows_seen(), "read all rows");

        let mut doc = builder.finish();
        annotate_document(&mut doc, &self.config.annotate.options());
        Ok(doc)
    }

    /// Render with the configured output format.
    pub fn render(&self, doc: &Document) -> Result<String, Error> {
        Ok(self.registry.serialize(doc, &self.config.output.format)?)
    }

    /// Convert CSV text from any reader.
    pub fn convert_reader<R: std::io::Read>(&self, reader: R) -> Result<String, Error> {
        let doc = self.read_document(RowReader::from_reader(reader))?;
        self.render(&doc)
    }

    /// Convert a CSV file. The text is written to `output` when given and returned either way.
    pub fn convert_file(&self, input: &Path, output: Option<&Path>) -> Result<String, Error> {
        let doc = self.read_document(RowReader::open(input)?)?;
        let text = self.render(&doc)?;

        info!(
            tables = doc.tables.len(),
            items = doc.total_items(),
            format = %self.config.output.format,
            "converted feature tables"
        );

        if let Some(path) = output {
            write_output(path, &text)?;
        }
        Ok(text)
    }
}
