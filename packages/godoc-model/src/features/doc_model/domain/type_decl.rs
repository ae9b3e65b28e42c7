//! Declared types

use super::documented::Documented;
use super::function::{Function, Method};

/// Declared type with its constructors and methods
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    name: String,
    type_expr: String,
    doc: String,
    source: Option<String>,
    functions: Vec<Function>,
    methods: Vec<Method>,
}

impl Type {
    pub fn new(
        name: impl Into<String>,
        type_expr: impl Into<String>,
        doc: impl Into<String>,
        source: Option<String>,
        functions: Vec<Function>,
        methods: Vec<Method>,
    ) -> Self {
        Self {
            name: name.into(),
            type_expr: type_expr.into(),
            doc: doc.into(),
            source,
            functions,
            methods,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Underlying type expression, verbatim
    pub fn type_expr(&self) -> &str {
        &self.type_expr
    }

    /// Verbatim declaration text; `None` when the span could not be read
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Functions returning this type, in declaration order
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    /// Methods declared on this type (value or pointer receiver)
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn method_named(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name() == name)
    }
}

impl Documented for Type {
    fn doc(&self) -> &str {
        &self.doc
    }
}
