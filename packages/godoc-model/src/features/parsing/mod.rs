//! Parsing Feature
//!
//! Turns a package directory into a `ParsedPackage`: the raw input of the
//! documentation model.
//!
//! ## Structure
//! - `domain/` - ParsedPackage and raw declaration models
//! - `ports/` - PackageSource trait (the front-end contract)
//! - `infrastructure/` - tree-sitter Go front-end

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{
    DeclSpan, FieldGroup, PackageFiles, ParsedPackage, RawFuncDecl, RawTypeDecl, RawValueDecl,
    SourceSet,
};
pub use infrastructure::TreeSitterGoFrontend;
pub use ports::PackageSource;
