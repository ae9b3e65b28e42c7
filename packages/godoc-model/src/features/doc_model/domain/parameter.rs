//! Signature parameters

use crate::shared::utils::{POINTER_MARKER, VARIADIC_MARKER};

/// One input, output or receiver parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    type_name: String,
    pointer: bool,
}

impl Parameter {
    /// Build a parameter; the pointer flag is derived from `type_name`
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        let pointer = denotes_pointer(&type_name);
        Self {
            name: name.into(),
            type_name,
            pointer,
        }
    }

    /// Parameter name; empty for unnamed parameters
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Verbatim type expression
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Whether the parameter is a single pointer value
    pub fn pointer(&self) -> bool {
        self.pointer
    }

    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }

    pub fn is_variadic(&self) -> bool {
        self.type_name.starts_with(VARIADIC_MARKER)
    }
}

/// `*T` is a pointer; `...*T` is not (the parameter itself is a slice)
fn denotes_pointer(type_name: &str) -> bool {
    match type_name.strip_prefix(VARIADIC_MARKER) {
        Some(_) => false,
        None => type_name.starts_with(POINTER_MARKER),
    }
}
