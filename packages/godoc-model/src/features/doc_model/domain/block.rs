//! Const and var blocks
//!
//! A block is one grouped declaration: its doc comment, its verbatim source
//! and its members in source order. Error-like variables are flagged on the
//! variable itself, so `errors()` is a filtered view of `variables()`.

use super::documented::Documented;

/// Declared constant
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constant {
    name: String,
}

impl Constant {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Declared variable
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
    error_like: bool,
}

impl Variable {
    pub fn new(name: impl Into<String>, error_like: bool) -> Self {
        Self {
            name: name.into(),
            error_like,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the name follows the error-variable naming convention
    pub fn is_error_like(&self) -> bool {
        self.error_like
    }
}

/// Grouped declaration of constants or variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<M> {
    owner: Option<String>,
    doc: String,
    source: Option<String>,
    members: Vec<M>,
}

pub type ConstantBlock = Block<Constant>;
pub type VariableBlock = Block<Variable>;

impl<M> Block<M> {
    pub fn new(owner: Option<String>, doc: impl Into<String>, source: Option<String>, members: Vec<M>) -> Self {
        Self {
            owner,
            doc: doc.into(),
            source,
            members,
        }
    }

    /// Name of the type this block documents; `None` at package level
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Owning type name, empty for package-level blocks
    pub fn type_name(&self) -> &str {
        self.owner.as_deref().unwrap_or("")
    }

    /// Verbatim declaration text; `None` when the span could not be read
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn members(&self) -> &[M] {
        &self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Block<Constant> {
    pub fn constants(&self) -> &[Constant] {
        &self.members
    }
}

impl Block<Variable> {
    pub fn variables(&self) -> &[Variable] {
        &self.members
    }

    /// Error-like variables, in declaration order
    pub fn errors(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.members.iter().filter(|v| v.is_error_like())
    }
}

impl<M> Documented for Block<M> {
    fn doc(&self) -> &str {
        &self.doc
    }
}
