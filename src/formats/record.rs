//! Serde shape of a document, shared by the json and yaml formats
//!
//! Mirrors the array returned by the php format:
//! `{ "feature_tables": [...], "features_total_count": N }`.

use crate::error::FormatError;
use crate::model::{Document, Table};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct DocumentRef<'a> {
    feature_tables: &'a [Table],
    features_total_count: usize,
}

impl<'a> DocumentRef<'a> {
    pub(crate) fn new(doc: &'a Document) -> Self {
        DocumentRef {
            feature_tables: &doc.tables,
            features_total_count: doc.total_items(),
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct DocumentRecord {
    feature_tables: Vec<Table>,
    features_total_count: usize,
}

impl DocumentRecord {
    /// Check the stored count against the tables and hand out the document.
    pub(crate) fn into_document(self) -> Result<Document, FormatError> {
        let doc = Document::new(self.feature_tables);
        check_total_count(&doc, self.features_total_count)?;
        Ok(doc)
    }
}

pub(crate) fn check_total_count(doc: &Document, declared: usize) -> Result<(), FormatError> {
    let actual = doc.total_items();
    if declared != actual {
        return Err(FormatError::Parse(format!(
            "features_total_count is {declared} but the tables hold {actual} items"
        )));
    }
    Ok(())
}
