/*
 * Block Builder
 *
 * Builds const and var blocks from raw declaration groups:
 * - members follow the declared name order
 * - source text comes from the group's span (absent if unreadable)
 * - var members are classified against the error naming convention
 *
 * A group without names produces no block.
 */

use tracing::debug;

use super::classifier::ErrorNameClassifier;
use super::span_extractor::SourceResolver;
use crate::features::doc_model::domain::{Block, Constant, ConstantBlock, Variable, VariableBlock};
use crate::features::parsing::domain::RawValueDecl;

pub struct BlockBuilder<'a> {
    resolver: SourceResolver<'a>,
    classifier: &'a ErrorNameClassifier,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(resolver: SourceResolver<'a>, classifier: &'a ErrorNameClassifier) -> Self {
        Self {
            resolver,
            classifier,
        }
    }

    /// Const block for `decl`, tagged with `owner` when it documents a type
    pub fn constants(&self, decl: &RawValueDecl, owner: Option<&str>) -> Option<ConstantBlock> {
        self.build(decl, owner, |name| Constant::new(name))
    }

    /// Var block for `decl`; error-like names are flagged on their variable
    pub fn variables(&self, decl: &RawValueDecl, owner: Option<&str>) -> Option<VariableBlock> {
        self.build(decl, owner, |name| {
            Variable::new(name, self.classifier.is_error_like(name))
        })
    }

    fn build<M>(
        &self,
        decl: &RawValueDecl,
        owner: Option<&str>,
        member: impl Fn(&str) -> M,
    ) -> Option<Block<M>> {
        if decl.names.is_empty() {
            debug!(file = %decl.span.file, "skipping declaration group without names");
            return None;
        }

        let members = decl.names.iter().map(|name| member(name)).collect();
        let source = self.resolver.source_text(&decl.span);

        Some(Block::new(
            owner.filter(|o| !o.is_empty()).map(str::to_string),
            decl.doc.as_str(),
            source,
            members,
        ))
    }
}
