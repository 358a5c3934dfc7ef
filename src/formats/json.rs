//! JSON format
//!
//! Pretty-printed through serde_json. Tier values keep their type, class lists are written as
//! space separated CSS class names.

use super::record::{DocumentRecord, DocumentRef};
use crate::error::FormatError;
use crate::formats::format::Format;
use crate::model::Document;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Feature tables as JSON"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let record: DocumentRecord =
            serde_json::from_str(source).map_err(|e| FormatError::Parse(e.to_string()))?;
        record.into_document()
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let mut out = serde_json::to_string_pretty(&DocumentRef::new(doc))
            .map_err(|e| FormatError::Serialization(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }
}
