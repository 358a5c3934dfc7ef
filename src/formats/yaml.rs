//! YAML format, same shape as the json format

use super::record::{DocumentRecord, DocumentRef};
use crate::error::FormatError;
use crate::formats::format::Format;
use crate::model::Document;

pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "Feature tables as YAML"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let record: DocumentRecord =
            serde_yaml::from_str(source).map_err(|e| FormatError::Parse(e.to_string()))?;
        record.into_document()
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_yaml::to_string(&DocumentRef::new(doc))
            .map_err(|e| FormatError::Serialization(e.to_string()))
    }
}
