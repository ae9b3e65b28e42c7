//! Doc comment access shared by every documented entity

use crate::features::doc_model::ports::CommentFormatter;

/// Entity carrying a doc comment
pub trait Documented {
    /// Raw doc comment text
    fn doc(&self) -> &str;

    /// Doc comment rendered by a caller-supplied formatter
    fn comments_with(&self, formatter: &dyn CommentFormatter, width: usize) -> String {
        formatter.format(self.doc(), width)
    }
}
