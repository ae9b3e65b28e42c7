//! Common test utilities for godoc-model
//!
//! Shared Go fixtures and `ParsedPackage` builders for integration tests.

#![allow(dead_code)]

mod builders;
mod fixtures;

// Re-export all utilities
pub use builders::*;
pub use fixtures::*;
