//! Doc comment rendering
//!
//! Binds the `CommentFormatter` port to a formatter and a column width.
//! `Commented` gives every documented entity `comments(width)` with the
//! default word wrap; `CommentRenderer` carries the configured width.

use crate::config::DocModelConfig;
use crate::features::doc_model::domain::Documented;
use crate::features::doc_model::infrastructure::WordWrap;
use crate::features::doc_model::ports::CommentFormatter;

/// `comments(width)` for every documented entity
pub trait Commented: Documented {
    /// Doc comment wrapped to `width` columns
    fn comments(&self, width: usize) -> String {
        self.comments_with(&WordWrap, width)
    }
}

impl<T: Documented + ?Sized> Commented for T {}

/// Renders doc comments at a fixed default width
#[derive(Debug, Clone)]
pub struct CommentRenderer<F: CommentFormatter = WordWrap> {
    formatter: F,
    width: usize,
}

impl CommentRenderer {
    pub fn new(width: usize) -> Self {
        Self {
            formatter: WordWrap,
            width,
        }
    }

    /// Renderer using `comment_width` from `config`
    pub fn from_config(config: &DocModelConfig) -> Self {
        Self::new(config.comment_width)
    }
}

impl<F: CommentFormatter> CommentRenderer<F> {
    /// Same width, different formatter
    pub fn with_formatter<G: CommentFormatter>(self, formatter: G) -> CommentRenderer<G> {
        CommentRenderer {
            formatter,
            width: self.width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Doc comment of `entity` at the default width
    pub fn render<D: Documented + ?Sized>(&self, entity: &D) -> String {
        self.render_at(entity, self.width)
    }

    /// Doc comment of `entity` at an explicit width
    pub fn render_at<D: Documented + ?Sized>(&self, entity: &D, width: usize) -> String {
        entity.comments_with(&self.formatter, width)
    }
}
