//! Configuration loader for mdlex
//!
//! `defaults/mdlex.default.toml` is embedded into the crate so the documented
//! defaults and runtime behavior stay in sync. Callers layer a user file and
//! individual overrides on top through [`Loader`] before deserializing into
//! [`MdlexConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/mdlex.default.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MdlexConfig {
    pub inspect: InspectConfig,
    pub logging: LoggingConfig,
}

/// Controls `mdlex inspect` output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InspectConfig {
    /// A processing spec such as `ast-treeviz`
    pub format: String,
    pub label_width: usize,
    pub show_locations: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// A `tracing` level filter: error, warn, info, debug or trace
    pub level: String,
}

/// Layers user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error at build time.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file, ignored when absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. from a command-line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<MdlexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<MdlexConfig, ConfigError> {
    Loader::new().build()
}
