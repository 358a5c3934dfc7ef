//! Output formats by name
//!
//! The converter serializes through the registry using the configured `output.format`, so
//! adding a format means registering it here.

use crate::error::FormatError;
use crate::formats::format::{unsupported, Format};
use crate::formats::{JsonFormat, PhpFormat, YamlFormat};
use crate::model::Document;
use std::collections::HashMap;

/// Formats keyed by their name
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Registry without any format
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Add a format, replacing any format registered under the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Registered names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Read `source` with the named format.
    pub fn parse(&self, source: &str, format: &str) -> Result<Document, FormatError> {
        match self.get(format)? {
            fmt if fmt.supports_parsing() => fmt.parse(source),
            _ => Err(unsupported(format, "parsing")),
        }
    }

    /// Render `doc` with the named format.
    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        match self.get(format)? {
            fmt if fmt.supports_serialization() => fmt.serialize(doc),
            _ => Err(unsupported(format, "serialization")),
        }
    }

    /// php (with the default header), json and yaml
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(PhpFormat::default());
        registry.register(JsonFormat);
        registry.register(YamlFormat);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
