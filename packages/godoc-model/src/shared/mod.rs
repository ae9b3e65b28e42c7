//! Shared module - Common types used by every feature
//!
//! It has no dependency on the front-end (no tree-sitter).

pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
