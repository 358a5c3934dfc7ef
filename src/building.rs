//! Row classification and table building
//!
//!     Input rows arrive one at a time (see [crate::io::RowReader]). Each record is classified
//!     into a heading row or a data row, data rows are normalized into Items and the
//!     TableBuilder folds them into Tables:
//!
//!     record ─▶ Row::classify ─▶ TableBuilder::push ─▶ … ─▶ TableBuilder::finish ─▶ Document
//!
//!     Building never annotates; difference classes are computed afterwards by
//!     [crate::annotation].

pub mod builder;
pub mod nowrap;
pub mod row;

pub use builder::{build_document, TableBuilder};
pub use nowrap::{wrap_cell, wrap_text, NoWrapRule, NOWRAP_RULES};
pub use row::{normalize_cell, Columns, DataRow, HeadingRow, Record, Row};
