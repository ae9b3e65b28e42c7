//! Package: root of the documentation model

use super::block::{ConstantBlock, VariableBlock};
use super::documented::Documented;
use super::function::Function;
use super::type_decl::Type;

/// Assembled documentation model of one package
///
/// Built once by `PackageAssembler` and never mutated. File, subdirectory and
/// import lists are sorted and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Package {
    pub(crate) name: String,
    pub(crate) import_path: String,
    pub(crate) doc: String,
    pub(crate) files: Vec<String>,
    pub(crate) test_files: Vec<String>,
    pub(crate) subdirectories: Vec<String>,
    pub(crate) imports: Vec<String>,
    pub(crate) test_imports: Vec<String>,
    pub(crate) constant_blocks: Vec<ConstantBlock>,
    pub(crate) variable_blocks: Vec<VariableBlock>,
    pub(crate) functions: Vec<Function>,
    pub(crate) types: Vec<Type>,
}

impl Package {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn import_path(&self) -> &str {
        &self.import_path
    }

    /// Non-test source files
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn test_files(&self) -> &[String] {
        &self.test_files
    }

    pub fn subdirectories(&self) -> &[String] {
        &self.subdirectories
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// Imports of both same-package and external test files
    pub fn test_imports(&self) -> &[String] {
        &self.test_imports
    }

    /// Package-level blocks first, then per-type blocks in type order
    pub fn constant_blocks(&self) -> &[ConstantBlock] {
        &self.constant_blocks
    }

    /// Package-level blocks first, then per-type blocks in type order
    pub fn variable_blocks(&self) -> &[VariableBlock] {
        &self.variable_blocks
    }

    /// Functions not listed under any type
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn type_named(&self, name: &str) -> Option<&Type> {
        self.types.iter().find(|t| t.name() == name)
    }

    /// Look up a function at package level or under any type
    pub fn function_named(&self, name: &str) -> Option<&Function> {
        self.functions
            .iter()
            .chain(self.types.iter().flat_map(|t| t.functions()))
            .find(|f| f.name() == name)
    }
}

impl Documented for Package {
    fn doc(&self) -> &str {
        &self.doc
    }
}
