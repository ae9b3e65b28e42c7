//! Feature modules
//!
//! - `parsing`: Go front-end producing `ParsedPackage`
//! - `doc_model`: documentation model assembled from it

pub mod doc_model;
pub mod parsing;
