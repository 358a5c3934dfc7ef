//! Incremental table builder
//!
//! The builder is a fold over rows: it can be fed one row at a time while the input is still
//! being read, and [TableBuilder::finish] marks the end of the input.

use crate::error::BuildError;
use crate::model::{Document, Table};

use super::row::{Columns, Record, Row};

/// Groups rows into tables
///
/// Holds at most one table in progress. A heading row closes the table in progress and opens
/// a new one; data rows are appended to the table in progress.
#[derive(Debug, Default)]
pub struct TableBuilder {
    columns: Columns,
    current: Option<Table>,
    tables: Vec<Table>,
    rows_seen: usize,
}

impl TableBuilder {
    /// Builder using the default column names
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(columns: Columns) -> Self {
        TableBuilder {
            columns,
            ..Self::default()
        }
    }

    /// Number of rows accepted so far
    pub fn rows_seen(&self) -> usize {
        self.rows_seen
    }

    /// Feed one classified row.
    ///
    /// A data row before any heading row is rejected: there is no table it could belong to.
    pub fn push(&mut self, row: Row) -> Result<(), BuildError> {
        let index = self.rows_seen + 1;

        match row {
            Row::Heading(heading) => {
                if let Some(table) = self.current.take() {
                    self.tables.push(table);
                }
                let mut table = Table::new(heading.title);
                table.ki_badge = heading.ki_badge;
                table.new_badge = heading.new_badge;
                self.current = Some(table);
            }
            Row::Data(data) => {
                let table = self
                    .current
                    .as_mut()
                    .ok_or(BuildError::DataBeforeHeading { row: index })?;
                table.items.push(data.into_item());
            }
        }

        self.rows_seen = index;
        Ok(())
    }

    /// Classify a raw record with this builder's columns, then feed it.
    pub fn push_record(&mut self, record: &Record) -> Result<(), BuildError> {
        let row = Row::classify(record, &self.columns, self.rows_seen + 1)?;
        self.push(row)
    }

    /// No more rows: close the table in progress and return all tables in input order.
    pub fn finish(mut self) -> Document {
        if let Some(table) = self.current.take() {
            self.tables.push(table);
        }
        Document::new(self.tables)
    }
}

/// Fold a whole row sequence into a document.
pub fn build_document<I>(rows: I) -> Result<Document, BuildError>
where
    I: IntoIterator<Item = Row>,
{
    let mut builder = TableBuilder::new();
    for row in rows {
        builder.push(row)?;
    }
    Ok(builder.finish())
}
