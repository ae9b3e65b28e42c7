//! Documentation model ports (interfaces)

mod comment_formatter;

pub use comment_formatter::CommentFormatter;
