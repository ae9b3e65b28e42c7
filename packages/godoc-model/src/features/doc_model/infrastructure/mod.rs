//! Documentation model infrastructure
//!
//! Builders that turn raw front-end declarations into model entities.

mod block_builder;
mod classifier;
mod comment_wrap;
mod function_builder;
mod parameter_extractor;
mod span_extractor;
mod type_assembler;

pub use block_builder::BlockBuilder;
pub use classifier::ErrorNameClassifier;
pub use comment_wrap::WordWrap;
pub use function_builder::FunctionBuilder;
pub use parameter_extractor::{extract_parameters, extract_receiver};
pub use span_extractor::{extract_span, try_extract_span, SourceResolver, SpanError};
pub use type_assembler::{returns_type, TypeAssembler};
