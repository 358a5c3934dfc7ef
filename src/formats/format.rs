//! The Format trait
//!
//! A format renders an annotated [Document] as text for one consumer (the website's PHP
//! include, or a JSON / YAML dump for tooling). Formats able to read their own output back also
//! implement parsing; that is how the output contract is checked in tests.

use crate::error::FormatError;
use crate::model::Document;

/// One output format, looked up by [Format::name] in the registry
pub trait Format: Send + Sync {
    /// Registry key, also the value of `output.format` and `--format`
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    fn supports_parsing(&self) -> bool {
        false
    }

    fn supports_serialization(&self) -> bool {
        false
    }

    /// Read text produced by [Format::serialize] back into a Document.
    fn parse(&self, _source: &str) -> Result<Document, FormatError> {
        Err(unsupported(self.name(), "parsing"))
    }

    /// Render an annotated Document.
    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(unsupported(self.name(), "serialization"))
    }
}

pub(crate) fn unsupported(format: &str, capability: &str) -> FormatError {
    FormatError::NotSupported(format!("Format '{format}' does not support {capability}"))
}
