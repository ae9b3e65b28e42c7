//! Configuration
//!
//! A single `DocModelConfig` drives both the front-end and the assembler.
//! It can be built in code or loaded from a versioned YAML file.
//!
//! # Examples
//!
//! ```rust,ignore
//! use godoc_model::config::DocModelConfig;
//!
//! let config = DocModelConfig::default().with_comment_width(72);
//! let config = DocModelConfig::from_yaml("godoc.yaml")?;
//! ```

pub mod doc_config;
pub mod error;
pub mod io;

// Re-exports
pub use doc_config::DocModelConfig;
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigExportV1;
