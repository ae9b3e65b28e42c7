//! Documentation Model Feature
//!
//! Assembles a parsed Go package into an immutable, queryable model of its
//! exported declarations, with the verbatim source of every declaration.
//!
//! ## Structure
//! - `domain/` - Package, Block, Function, Method, Type, Parameter
//! - `ports/` - CommentFormatter trait
//! - `application/` - PackageAssembler, the LoadPackage use case, comment rendering
//! - `infrastructure/` - span extraction, parameter extraction, classification, builders

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::{CommentRenderer, Commented, LoadPackageUseCase, PackageAssembler};
pub use domain::{
    Block, Constant, ConstantBlock, Documented, Function, Method, Package, Parameter, Type,
    Variable, VariableBlock,
};
pub use infrastructure::{ErrorNameClassifier, WordWrap};
pub use ports::CommentFormatter;
