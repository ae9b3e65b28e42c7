/*
 * Type Assembler
 *
 * Binds functions and methods to the type they belong to:
 * - functions: any result whose base type name is the type (`T`, `*T`, `T[K]`)
 * - methods: receiver base type name is the type, pointer or value alike
 *
 * Both lists keep the order they were given in.
 */

use crate::shared::utils::base_type_name;
use super::span_extractor::SourceResolver;
use crate::features::doc_model::domain::{Function, Method, Type};
use crate::features::parsing::domain::RawTypeDecl;

pub struct TypeAssembler<'a> {
    resolver: SourceResolver<'a>,
}

impl<'a> TypeAssembler<'a> {
    pub fn new(resolver: SourceResolver<'a>) -> Self {
        Self { resolver }
    }

    pub fn assemble(&self, decl: &RawTypeDecl, functions: &[Function], methods: &[Method]) -> Type {
        let name = decl.name.as_str();

        let functions = functions
            .iter()
            .filter(|f| returns_type(f, name))
            .cloned()
            .collect();
        let methods = methods
            .iter()
            .filter(|m| base_type_name(m.receiver().type_name()) == Some(name))
            .cloned()
            .collect();

        Type::new(
            name,
            decl.type_expr.as_str(),
            decl.doc.as_str(),
            self.resolver.source_text(&decl.span),
            functions,
            methods,
        )
    }
}

/// Whether any result of `function` is a value of type `type_name`
pub fn returns_type(function: &Function, type_name: &str) -> bool {
    function
        .outputs()
        .iter()
        .any(|p| base_type_name(p.type_name()) == Some(type_name))
}
