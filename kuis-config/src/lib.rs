//! Shared configuration loader for the kuis toolchain.
//!
//! `defaults/kuis.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`KuisConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use kuis_babel::ir::StyleSheet;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/kuis.default.toml");

/// Top-level configuration consumed by kuis applications.
#[derive(Debug, Clone, Deserialize)]
pub struct KuisConfig {
    pub convert: ConvertConfig,
    pub output: OutputConfig,
    pub docx: DocxConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub default_format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Destination for binary output when no path is given.
    pub file_name: String,
}

/// Mirrors the knobs of the document style sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct DocxConfig {
    pub font: String,
    pub font_size: u32,
    pub indent_left: u32,
    pub line_spacing: u32,
}

impl From<&DocxConfig> for StyleSheet {
    fn from(config: &DocxConfig) -> Self {
        StyleSheet {
            font: config.font.clone(),
            font_size: config.font_size,
            indent_left: config.indent_left,
            line_spacing: config.line_spacing,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
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

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<KuisConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<KuisConfig, ConfigError> {
    Loader::new().build()
}
