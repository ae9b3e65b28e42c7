//! Parsing ports (interfaces)

mod package_source;

pub use package_source::PackageSource;
