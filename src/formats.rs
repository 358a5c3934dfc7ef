//! Output formats
//!
//!     Every output format implements the [Format] trait and is registered with the
//!     [FormatRegistry] under its name.
//!
//!     - php: the array literal consumed by the website (default). Also parses its own output.
//!     - json / yaml: the same document through serde, class lists as CSS class names.
//!
//!     The file structure :
//!     .
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── record.rs               # serde shape shared by json and yaml
//!     ├── php
//!     │   ├── serializer.rs
//!     │   ├── lexer.rs
//!     │   └── parser.rs
//!     ├── json.rs
//!     └── yaml.rs

pub mod format;
pub mod json;
pub mod php;
mod record;
pub mod registry;
pub mod yaml;

pub use format::Format;
pub use json::JsonFormat;
pub use php::PhpFormat;
pub use registry::FormatRegistry;
pub use yaml::YamlFormat;
