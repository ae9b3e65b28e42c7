//! Functions and methods from raw declarations

use tracing::warn;

use super::parameter_extractor::{extract_parameters, extract_receiver};
use super::span_extractor::SourceResolver;
use crate::features::doc_model::domain::{Function, Method};
use crate::features::parsing::domain::RawFuncDecl;

pub struct FunctionBuilder<'a> {
    resolver: SourceResolver<'a>,
}

impl<'a> FunctionBuilder<'a> {
    pub fn new(resolver: SourceResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Function view of `decl`; any receiver is ignored
    pub fn function(&self, decl: &RawFuncDecl) -> Function {
        Function::new(
            decl.name.as_str(),
            decl.doc.as_str(),
            self.resolver.source_text(&decl.span),
            extract_parameters(&decl.params),
            extract_parameters(&decl.results),
        )
    }

    /// Method for `decl`, or `None` when it has no usable receiver
    pub fn method(&self, decl: &RawFuncDecl) -> Option<Method> {
        let group = decl.receiver.as_ref()?;
        let Some(receiver) = extract_receiver(group) else {
            warn!(method = %decl.name, "receiver without type, method dropped");
            return None;
        };
        Some(Method::new(self.function(decl), receiver))
    }
}
