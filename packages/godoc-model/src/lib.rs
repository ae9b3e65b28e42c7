/*
 * godoc-model - Go package documentation model
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (ByteSpan, SpanBase) and Go type helpers
 * - features/    : Vertical slices (parsing → doc_model)
 * - config/      : DocModelConfig (versioned YAML)
 * - errors.rs    : DocError
 *
 * Flow:
 * - PackageSource (tree-sitter Go front-end) → ParsedPackage
 * - PackageAssembler → immutable Package with verbatim declaration source
 */

#![allow(clippy::new_without_default)] // Builders take explicit inputs
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules (parsing, doc_model)
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::DocModelConfig;
pub use errors::{DocError, Result};
pub use features::doc_model::{
    Block, CommentFormatter, CommentRenderer, Commented, Constant, ConstantBlock, Documented,
    ErrorNameClassifier, Function, LoadPackageUseCase, Method, Package, PackageAssembler,
    Parameter, Type, Variable, VariableBlock, WordWrap,
};
pub use features::parsing::{PackageSource, ParsedPackage, TreeSitterGoFrontend};
pub use shared::models::{ByteSpan, SpanBase};
