//! Shared models

mod span;

pub use span::{ByteSpan, SpanBase};
