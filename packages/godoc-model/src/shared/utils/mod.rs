//! Utility modules shared across features

pub mod go_types;

pub use go_types::{base_type_name, POINTER_MARKER, VARIADIC_MARKER};
