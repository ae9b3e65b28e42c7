//! Parsing domain models

mod parsed_package;

pub use parsed_package::{
    DeclSpan, FieldGroup, PackageFiles, ParsedPackage, RawFuncDecl, RawTypeDecl, RawValueDecl,
    SourceSet,
};
