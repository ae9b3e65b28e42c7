//! Parsed package representation
//!
//! What a front-end hands to the assembler: file lists, import sets, the raw
//! bytes of every source file and the declarations found in them, each
//! located by a byte span into its file.

use std::collections::BTreeMap;
use std::io::Cursor;

use crate::shared::models::ByteSpan;

/// One signature field group: `a, b int` has two names and one type
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldGroup {
    pub names: Vec<String>,
    pub type_expr: String,
}

impl FieldGroup {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>, type_expr: impl Into<String>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            type_expr: type_expr.into(),
        }
    }

    /// Group without names (typical for results)
    pub fn unnamed(type_expr: impl Into<String>) -> Self {
        Self {
            names: Vec::new(),
            type_expr: type_expr.into(),
        }
    }
}

/// Byte span of a declaration inside one source file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeclSpan {
    pub file: String,
    pub span: ByteSpan,
}

impl DeclSpan {
    pub fn new(file: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            file: file.into(),
            span: ByteSpan::new(start, end),
        }
    }
}

/// Grouped const or var declaration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawValueDecl {
    /// Declared names in source order
    pub names: Vec<String>,
    pub doc: String,
    pub span: DeclSpan,
}

/// Function or method declaration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawFuncDecl {
    pub name: String,
    pub doc: String,
    pub span: DeclSpan,
    /// Receiver field group; `Some` for methods
    pub receiver: Option<FieldGroup>,
    pub params: Vec<FieldGroup>,
    pub results: Vec<FieldGroup>,
}

impl RawFuncDecl {
    pub fn is_method(&self) -> bool {
        self.receiver.is_some()
    }
}

/// Type declaration with the const/var groups associated with it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTypeDecl {
    pub name: String,
    pub doc: String,
    pub span: DeclSpan,
    /// Underlying type expression, verbatim
    pub type_expr: String,
    pub consts: Vec<RawValueDecl>,
    pub vars: Vec<RawValueDecl>,
}

/// Files of a package directory, grouped the way the front-end found them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageFiles {
    /// Files included in the build
    pub go_files: Vec<String>,
    /// Files excluded from the build
    pub ignored_go_files: Vec<String>,
    /// Test files of the package itself
    pub test_go_files: Vec<String>,
    /// Test files of the external `_test` package
    pub xtest_go_files: Vec<String>,
}

impl PackageFiles {
    /// Every discovered file name, in group order
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.go_files
            .iter()
            .chain(&self.ignored_go_files)
            .chain(&self.test_go_files)
            .chain(&self.xtest_go_files)
    }
}

/// Raw bytes of the package's source files, keyed by file name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceSet {
    files: BTreeMap<String, Vec<u8>>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(file.into(), bytes.into());
    }

    pub fn with_file(mut self, file: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(file, bytes);
        self
    }

    pub fn get(&self, file: &str) -> Option<&[u8]> {
        self.files.get(file).map(Vec::as_slice)
    }

    /// Seekable reader over one file's bytes
    pub fn reader(&self, file: &str) -> Option<Cursor<&[u8]>> {
        self.get(file).map(Cursor::new)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Everything the front-end discovered about one package
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedPackage {
    pub name: String,
    pub import_path: String,
    pub doc: String,

    pub files: PackageFiles,
    pub subdirectories: Vec<String>,

    /// Imports of the source files
    pub imports: Vec<String>,
    /// Imports of same-package test files
    pub test_imports: Vec<String>,
    /// Imports of external `_test` package files
    pub xtest_imports: Vec<String>,

    pub sources: SourceSet,

    /// Package-level const groups, in declaration order
    pub consts: Vec<RawValueDecl>,
    /// Package-level var groups, in declaration order
    pub vars: Vec<RawValueDecl>,
    /// Functions and methods, in declaration order
    pub funcs: Vec<RawFuncDecl>,
    /// Types, in declaration order
    pub types: Vec<RawTypeDecl>,
}

impl ParsedPackage {
    pub fn new(name: impl Into<String>, import_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            import_path: import_path.into(),
            ..Self::default()
        }
    }
}
