//! Package source port (interface)
//!
//! Defines the contract for the front-end that locates and parses a package.

use crate::errors::Result;
use crate::features::parsing::domain::ParsedPackage;

/// Front-end abstraction: import path in, parsed package out
///
/// Failures to locate, read or parse the package are reported here, before
/// assembly starts.
pub trait PackageSource: Send + Sync {
    /// Load and parse the package at `import_path`
    fn load(&self, import_path: &str) -> Result<ParsedPackage>;

    /// Front-end name (for logs)
    fn name(&self) -> &'static str;
}
