//! # csv-to-features
//!
//! Converts a feature comparison spreadsheet (exported as CSV) into feature tables annotated
//! with difference classes, rendered as a PHP array literal (or JSON / YAML).
//!
//! Architecture
//!
//!     csv ─▶ io::RowReader ─▶ building::TableBuilder ─▶ annotation ─▶ formats ─▶ io::write_output
//!
//!     - model: Document, Table, Item and the closed set of tiers, tier pairs and class tokens
//!     - building: classifies rows and folds them into tables, one row at a time
//!     - annotation: computes which tier pairs differ per item and per table
//!     - formats: the Format trait, its registry and the php / json / yaml implementations
//!     - io: the CSV reader, the output writer and the Converter gluing everything together
//!     - settings: embedded defaults layered with user configuration (config crate)
//!
//!     building, annotation and model are pure: they never touch the filesystem and never log.
//!     Everything shell related (stdout, exit codes, logging setup) lives in the binary.
//!
//! Testing
//!
//!     tests
//!     ├── building.rs         # table grouping and normalization
//!     ├── annotation.rs       # difference classes, including property tests
//!     ├── formats.rs          # php snapshot and round trips through every format
//!     ├── cli.rs              # binary contract
//!     └── fixtures
//!         └── features.csv

pub mod annotation;
pub mod building;
pub mod error;
pub mod formats;
pub mod io;
pub mod model;
pub mod settings;

pub use annotation::{annotate_document, annotate_table, AnnotateOptions, PairFlags};
pub use building::{build_document, Record, Row, TableBuilder};
pub use error::{BuildError, Error, FormatError};
pub use formats::{Format, FormatRegistry};
pub use io::{Converter, RowReader};
pub use model::{CellValue, ClassList, ClassToken, Document, Item, Table, Tier, TierPair};
pub use settings::{FeaturesConfig, Loader};
