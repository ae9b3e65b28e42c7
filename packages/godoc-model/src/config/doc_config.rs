//! Documentation model configuration

use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use super::io::ConfigExportV1;
use crate::shared::models::SpanBase;

/// Schema versions `from_yaml` accepts
const SUPPORTED_VERSIONS: &[u32] = &[1];

const MIN_COMMENT_WIDTH: usize = 10;
const MAX_COMMENT_WIDTH: usize = 1000;

/// Settings shared by the front-end and the assembler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocModelConfig {
    /// How declaration spans map to byte offsets
    pub span_base: SpanBase,

    /// File name suffix that marks a test file
    pub test_file_suffix: String,

    /// Default column width for `comments()` rendering
    pub comment_width: usize,

    /// Front-end keeps exported declarations only
    pub exported_only: bool,

    /// Front-end lists subdirectories of the package directory
    pub include_subdirectories: bool,
}

impl Default for DocModelConfig {
    fn default() -> Self {
        Self {
            span_base: SpanBase::ZeroBased,
            test_file_suffix: "_test.go".to_string(),
            comment_width: 80,
            exported_only: true,
            include_subdirectories: true,
        }
    }
}

impl DocModelConfig {
    pub fn with_span_base(mut self, span_base: SpanBase) -> Self {
        self.span_base = span_base;
        self
    }

    pub fn with_test_file_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.test_file_suffix = suffix.into();
        self
    }

    pub fn with_comment_width(mut self, width: usize) -> Self {
        self.comment_width = width;
        self
    }

    pub fn with_exported_only(mut self, exported_only: bool) -> Self {
        self.exported_only = exported_only;
        self
    }

    pub fn with_subdirectories(mut self, include: bool) -> Self {
        self.include_subdirectories = include;
        self
    }

    /// Check value ranges
    pub fn validate(&self) -> ConfigResult<()> {
        if !(MIN_COMMENT_WIDTH..=MAX_COMMENT_WIDTH).contains(&self.comment_width) {
            return Err(ConfigError::range(
                "comment_width",
                self.comment_width,
                MIN_COMMENT_WIDTH,
                MAX_COMMENT_WIDTH,
            ));
        }
        if self.test_file_suffix.is_empty() {
            return Err(ConfigError::invalid("test_file_suffix", "must not be empty"));
        }
        Ok(())
    }

    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML configuration text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = Self::from_export(export);
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML (schema v1, every field written)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(&self.to_export())?)
    }

    fn from_export(export: ConfigExportV1) -> Self {
        let defaults = Self::default();
        Self {
            span_base: export.span_base.unwrap_or(defaults.span_base),
            test_file_suffix: export
                .test_file_suffix
                .unwrap_or(defaults.test_file_suffix),
            comment_width: export.comment_width.unwrap_or(defaults.comment_width),
            exported_only: export.exported_only.unwrap_or(defaults.exported_only),
            include_subdirectories: export
                .include_subdirectories
                .unwrap_or(defaults.include_subdirectories),
        }
    }

    fn to_export(&self) -> ConfigExportV1 {
        ConfigExportV1 {
            version: Some(1),
            span_base: Some(self.span_base),
            test_file_suffix: Some(self.test_file_suffix.clone()),
            comment_width: Some(self.comment_width),
            exported_only: Some(self.exported_only),
            include_subdirectories: Some(self.include_subdirectories),
        }
    }
}
