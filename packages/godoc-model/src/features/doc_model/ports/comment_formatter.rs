//! Comment formatter port
//!
//! Rendering doc text for a column width belongs to the presentation side;
//! the model only invokes it.

/// Re-flows doc comment text to a column width
pub trait CommentFormatter {
    fn format(&self, text: &str, width: usize) -> String;
}
