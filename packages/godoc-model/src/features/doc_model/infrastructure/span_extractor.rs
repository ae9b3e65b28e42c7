//! Source span extraction
//!
//! Reads the exact bytes of a declaration out of a seekable buffer. The
//! result is all-or-nothing: a bad range, a short read or an I/O error gives
//! no bytes at all, never a truncated slice.

use std::io::{self, Read, Seek, SeekFrom};

use thiserror::Error;
use tracing::warn;

use crate::features::parsing::domain::{DeclSpan, SourceSet};
use crate::shared::models::SpanBase;

/// Why a span could not be extracted
#[derive(Debug, Error)]
pub enum SpanError {
    #[error("empty or inverted range {start}..{end}")]
    EmptyRange { start: u64, end: u64 },

    #[error("range {start}..{end} exceeds buffer length {len}")]
    OutOfBounds { start: u64, end: u64, len: u64 },

    #[error("short read: wanted {wanted} bytes")]
    ShortRead { wanted: u64 },

    #[error("position before the first byte under one-based offsets")]
    BeforeStart,

    #[error("no source buffer for file '{0}'")]
    MissingFile(String),

    #[error("span text is not valid UTF-8")]
    InvalidUtf8,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Bytes in `[start, end)` of `reader`, or `None` if the range is unusable
///
/// Requires `start < end <= len(reader)`. Moves the reader's cursor.
pub fn extract_span<R: Read + Seek>(reader: &mut R, start: u64, end: u64) -> Option<Vec<u8>> {
    match try_extract_span(reader, start, end) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!(start, end, error = %e, "span extraction rejected");
            None
        }
    }
}

/// Like `extract_span`, reporting the reason for failure
pub fn try_extract_span<R: Read + Seek>(
    reader: &mut R,
    start: u64,
    end: u64,
) -> Result<Vec<u8>, SpanError> {
    if start >= end {
        return Err(SpanError::EmptyRange { start, end });
    }

    let len = reader.seek(SeekFrom::End(0))?;
    if end > len {
        return Err(SpanError::OutOfBounds { start, end, len });
    }

    let wanted = end - start;
    reader.seek(SeekFrom::Start(start))?;

    let mut buf = Vec::with_capacity(wanted as usize);
    let read = reader.by_ref().take(wanted).read_to_end(&mut buf)?;
    if read as u64 != wanted {
        return Err(SpanError::ShortRead { wanted });
    }
    Ok(buf)
}

/// Resolves declaration spans to source text for one package
///
/// Every span goes through `ByteSpan::offsets` with the same `SpanBase`.
#[derive(Debug, Clone, Copy)]
pub struct SourceResolver<'a> {
    sources: &'a SourceSet,
    base: SpanBase,
}

impl<'a> SourceResolver<'a> {
    pub fn new(sources: &'a SourceSet, base: SpanBase) -> Self {
        Self { sources, base }
    }

    /// Verbatim text of `span`, or `None` (logged) if it cannot be read
    pub fn source_text(&self, span: &DeclSpan) -> Option<String> {
        match self.try_source_text(span) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(
                    file = %span.file,
                    start = span.span.start,
                    end = span.span.end,
                    error = %e,
                    "declaration source unavailable"
                );
                None
            }
        }
    }

    fn try_source_text(&self, span: &DeclSpan) -> Result<String, SpanError> {
        let mut reader = self
            .sources
            .reader(&span.file)
            .ok_or_else(|| SpanError::MissingFile(span.file.clone()))?;
        let (start, end) = span.span.offsets(self.base).ok_or(SpanError::BeforeStart)?;
        let bytes = try_extract_span(&mut reader, start, end)?;
        String::from_utf8(bytes).map_err(|_| SpanError::InvalidUtf8)
    }
}
