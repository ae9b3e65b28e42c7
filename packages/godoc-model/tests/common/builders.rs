//! Test data builders
//!
//! Builds `ParsedPackage` values by hand, locating each declaration's span
//! by searching for its text in the current source file.

use godoc_model::features::parsing::{
    DeclSpan, FieldGroup, ParsedPackage, RawFuncDecl, RawTypeDecl, RawValueDecl,
};

/// Zero-based `[start, end)` of the first occurrence of `text` in `source`
pub fn span_of(source: &str, text: &str) -> (u64, u64) {
    let start = source
        .find(text)
        .unwrap_or_else(|| panic!("{text:?} not found in source"));
    (start as u64, (start + text.len()) as u64)
}

/// Builder for ParsedPackage
#[derive(Debug)]
pub struct ParsedPackageBuilder {
    parsed: ParsedPackage,
    file: String,
    source: String,
}

impl ParsedPackageBuilder {
    /// Create a new builder
    pub fn new(name: &str, import_path: &str) -> Self {
        Self {
            parsed: ParsedPackage::new(name, import_path),
            file: String::new(),
            source: String::new(),
        }
    }

    /// Add a source file; later declarations are located in it
    pub fn with_source(mut self, file: &str, source: &str) -> Self {
        self.parsed.files.go_files.push(file.to_string());
        self.parsed.sources.insert(file, source);
        self.file = file.to_string();
        self.source = source.to_string();
        self
    }

    pub fn with_doc(mut self, doc: &str) -> Self {
        self.parsed.doc = doc.to_string();
        self
    }

    fn span(&self, text: &str) -> DeclSpan {
        let (start, end) = span_of(&self.source, text);
        DeclSpan::new(self.file.clone(), start, end)
    }

    fn value(&self, names: &[&str], doc: &str, text: &str) -> RawValueDecl {
        RawValueDecl {
            names: names.iter().map(|n| n.to_string()).collect(),
            doc: doc.to_string(),
            span: self.span(text),
        }
    }

    /// Add a package-level const group
    pub fn with_const(mut self, names: &[&str], doc: &str, text: &str) -> Self {
        let decl = self.value(names, doc, text);
        self.parsed.consts.push(decl);
        self
    }

    /// Add a package-level var group
    pub fn with_var(mut self, names: &[&str], doc: &str, text: &str) -> Self {
        let decl = self.value(names, doc, text);
        self.parsed.vars.push(decl);
        self
    }

    /// Add a type declaration
    pub fn with_type(mut self, name: &str, type_expr: &str, doc: &str, text: &str) -> Self {
        let decl = RawTypeDecl {
            name: name.to_string(),
            doc: doc.to_string(),
            span: self.span(text),
            type_expr: type_expr.to_string(),
            consts: Vec::new(),
            vars: Vec::new(),
        };
        self.parsed.types.push(decl);
        self
    }

    /// Add a const group owned by an already added type
    pub fn with_type_const(mut self, type_name: &str, names: &[&str], text: &str) -> Self {
        let decl = self.value(names, "", text);
        self.type_mut(type_name).consts.push(decl);
        self
    }

    /// Add a var group owned by an already added type
    pub fn with_type_var(mut self, type_name: &str, names: &[&str], text: &str) -> Self {
        let decl = self.value(names, "", text);
        self.type_mut(type_name).vars.push(decl);
        self
    }

    /// Add a function
    pub fn with_func(
        mut self,
        name: &str,
        params: Vec<FieldGroup>,
        results: Vec<FieldGroup>,
        text: &str,
    ) -> Self {
        let decl = RawFuncDecl {
            name: name.to_string(),
            doc: String::new(),
            span: self.span(text),
            receiver: None,
            params,
            results,
        };
        self.parsed.funcs.push(decl);
        self
    }

    /// Add a method
    pub fn with_method(
        mut self,
        name: &str,
        receiver: FieldGroup,
        params: Vec<FieldGroup>,
        results: Vec<FieldGroup>,
        text: &str,
    ) -> Self {
        let decl = RawFuncDecl {
            name: name.to_string(),
            doc: String::new(),
            span: self.span(text),
            receiver: Some(receiver),
            params,
            results,
        };
        self.parsed.funcs.push(decl);
        self
    }

    /// Direct access for fields without a dedicated builder method
    pub fn parsed_mut(&mut self) -> &mut ParsedPackage {
        &mut self.parsed
    }

    /// Build the final ParsedPackage
    pub fn build(self) -> ParsedPackage {
        self.parsed
    }

    fn type_mut(&mut self, type_name: &str) -> &mut RawTypeDecl {
        self.parsed
            .types
            .iter_mut()
            .find(|t| t.name == type_name)
            .unwrap_or_else(|| panic!("type {type_name} must be added first"))
    }
}
