//! Configuration I/O (YAML schema)
//!
//! Defines the YAML schema types. Loading and validation live in
//! `doc_config.rs`.

use serde::{Deserialize, Serialize};

use crate::shared::models::SpanBase;

/// YAML Schema v1
///
/// Every setting is optional; absent settings keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub span_base: Option<SpanBase>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_file_suffix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_width: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_subdirectories: Option<bool>,
}
