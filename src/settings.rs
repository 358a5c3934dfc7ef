//! Configuration loading
//!
//! `defaults/features.default.toml` is embedded into the binary so that docs and runtime
//! behavior stay in sync. User files are layered on top of those defaults via [`Loader`]
//! before deserializing into [`FeaturesConfig`].

use crate::annotation::AnnotateOptions;
use crate::building::Columns;
use crate::formats::php::PhpHeader;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/features.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FeaturesConfig {
    pub columns: Columns,
    pub annotate: AnnotateConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnnotateConfig {
    pub count_hidden_items: bool,
}

impl AnnotateConfig {
    pub fn options(&self) -> AnnotateOptions {
        AnnotateOptions {
            count_hidden_items: self.count_hidden_items,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Registry name of the output format
    pub format: String,
    pub php: PhpConfig,
}

/// Header comment of the generated PHP file
#[derive(Debug, Clone, Deserialize)]
pub struct PhpConfig {
    pub generator_url: String,
    pub source_url: String,
}

impl PhpConfig {
    pub fn header(&self) -> PhpHeader {
        PhpHeader {
            generator_url: self.generator_url.clone(),
            source_url: self.source_url.clone(),
        }
    }
}

/// Layers user files and flag overrides over the embedded defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file that must exist (`--config`).
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `output.format` from `--format`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<FeaturesConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults without any user layer
pub fn load_defaults() -> Result<FeaturesConfig, ConfigError> {
    Loader::new().build()
}
