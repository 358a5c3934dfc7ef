//! Input rows
//!
//! A [Record] is one line of the spreadsheet export, keyed by column name. [Row::classify]
//! turns it into either a heading row (start of a new table) or a data row (one feature).

use crate::error::BuildError;
use crate::model::{CellValue, Item};
use serde::Deserialize;
use std::collections::HashMap;

use super::nowrap::{wrap_cell, wrap_text};

/// One spreadsheet line, column name to cell text
pub type Record = HashMap<String, String>;

/// Names of the spreadsheet columns
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Columns {
    /// Column telling heading rows apart from data rows
    pub kind: String,
    /// Value of the `kind` column that marks a heading row
    pub heading_marker: String,
    pub label: String,
    pub tooltip: String,
    pub standard: String,
    pub premium: String,
    pub deluxe: String,
    pub enterprise: String,
    pub ki_badge: String,
    pub new_badge: String,
    /// Rows collapsed on mobile
    pub hidden: String,
}

impl Default for Columns {
    fn default() -> Self {
        Columns {
            kind: "type".to_string(),
            heading_marker: "heading".to_string(),
            label: "Feature".to_string(),
            tooltip: "Tooltip".to_string(),
            standard: "Standard".to_string(),
            premium: "Premium".to_string(),
            deluxe: "Deluxe".to_string(),
            enterprise: "Enterprise".to_string(),
            ki_badge: "ki_badge".to_string(),
            new_badge: "new_badge".to_string(),
            hidden: "hide_on_mobile".to_string(),
        }
    }
}

/// Row starting a new table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRow {
    pub title: String,
    pub ki_badge: bool,
    pub new_badge: bool,
}

/// Row describing one feature, cells still raw text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    pub label: String,
    pub tooltip: String,
    pub standard: String,
    pub premium: String,
    pub deluxe: String,
    pub enterprise: String,
    pub ki_badge: Option<String>,
    pub new_badge: Option<String>,
    pub hidden: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Heading(HeadingRow),
    Data(DataRow),
}

/// Map the literal tokens `TRUE` / `FALSE` to booleans; any other text stays text.
pub fn normalize_cell(text: &str) -> CellValue {
    match text {
        "TRUE" => CellValue::Bool(true),
        "FALSE" => CellValue::Bool(false),
        other => CellValue::Text(other.to_string()),
    }
}

impl Row {
    /// Classify a record. `row` is the 1-based record number, used in errors.
    pub fn classify(record: &Record, columns: &Columns, row: usize) -> Result<Row, BuildError> {
        let required = |column: &String| {
            record
                .get(column)
                .cloned()
                .ok_or_else(|| BuildError::MissingField {
                    row,
                    field: column.clone(),
                })
        };
        let optional = |column: &String| record.get(column).cloned();

        let is_heading = record
            .get(&columns.kind)
            .is_some_and(|kind| *kind == columns.heading_marker);

        if is_heading {
            return Ok(Row::Heading(HeadingRow {
                title: required(&columns.label)?,
                ki_badge: optional(&columns.ki_badge).is_some_and(|v| v == "TRUE"),
                new_badge: optional(&columns.new_badge).is_some_and(|v| v == "TRUE"),
            }));
        }

        Ok(Row::Data(DataRow {
            label: required(&columns.label)?,
            tooltip: required(&columns.tooltip)?,
            standard: required(&columns.standard)?,
            premium: required(&columns.premium)?,
            deluxe: required(&columns.deluxe)?,
            enterprise: required(&columns.enterprise)?,
            ki_badge: optional(&columns.ki_badge),
            new_badge: optional(&columns.new_badge),
            hidden: optional(&columns.hidden),
        }))
    }
}

impl DataRow {
    /// Normalize the raw cells into an [Item] with empty class lists.
    pub fn into_item(self) -> Item {
        let tier = |text: &str| wrap_cell(normalize_cell(text));
        let badge = |text: Option<String>| {
            text.as_deref()
                .map(normalize_cell)
                .unwrap_or(CellValue::Bool(false))
        };

        let mut item = Item::with_tiers(
            wrap_text(&self.label),
            [
                tier(&self.standard),
                tier(&self.premium),
                tier(&self.deluxe),
                tier(&self.enterprise),
            ],
        );
        item.tooltip = wrap_text(&self.tooltip);
        item.ki_badge = badge(self.ki_badge);
        item.new_badge = badge(self.new_badge);
        item.initially_hidden = self.hidden.as_deref().map(normalize_cell);
        item
    }
}
