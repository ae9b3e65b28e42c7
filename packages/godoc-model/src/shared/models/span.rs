//! Source location types
//!
//! Declarations are located by byte offsets into their file buffer. How the
//! raw offsets map onto buffer indices is decided once, by `SpanBase`, and
//! only `ByteSpan::offsets` and its inverse `ByteSpan::from_offsets` apply it.

use serde::{Deserialize, Serialize};

/// Offset convention of the positions a front-end reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanBase {
    /// `[start, end)` are buffer indices (tree-sitter byte offsets)
    #[default]
    ZeroBased,
    /// Positions count from 1; both ends are shifted down by one
    OneBased,
}

/// Byte range of a declaration as reported by the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ByteSpan {
    pub start: u64,
    pub end: u64,
}

impl ByteSpan {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Buffer indices `[start, end)` under `base`
    ///
    /// Returns `None` when a one-based position is zero.
    pub fn offsets(&self, base: SpanBase) -> Option<(u64, u64)> {
        match base {
            SpanBase::ZeroBased => Some((self.start, self.end)),
            SpanBase::OneBased => Some((self.start.checked_sub(1)?, self.end.checked_sub(1)?)),
        }
    }

    /// Span reporting buffer indices `[start, end)` as positions under `base`
    pub fn from_offsets(start: u64, end: u64, base: SpanBase) -> Self {
        match base {
            SpanBase::ZeroBased => Self::new(start, end),
            SpanBase::OneBased => Self::new(start + 1, end + 1),
        }
    }

    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<std::ops::Range<usize>> for ByteSpan {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start as u64, range.end as u64)
    }
}
