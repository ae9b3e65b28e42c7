//! Parsing infrastructure (tree-sitter)

mod go_frontend;
mod tree_sitter_utils;

pub use go_frontend::TreeSitterGoFrontend;
