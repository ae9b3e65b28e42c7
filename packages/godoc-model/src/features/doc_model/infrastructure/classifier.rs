//! Error-variable naming convention

use regex::Regex;

/// `Err` followed by an upper-case letter and word characters
const ERROR_NAME_PATTERN: &str = r"^Err[A-Z][A-Za-z0-9_]*$";

/// Decides whether a declared name follows the error-variable convention
///
/// Classification is by spelling only; the declared type is never consulted.
/// Each classifier owns its compiled pattern.
#[derive(Debug, Clone)]
pub struct ErrorNameClassifier {
    pattern: Regex,
}

impl ErrorNameClassifier {
    /// Classifier for the built-in `Err[A-Z]...` convention
    ///
    /// `ERROR_NAME_PATTERN` is a fixed literal and always compiles; custom
    /// patterns go through `with_pattern`, which reports regex errors.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(ERROR_NAME_PATTERN).expect("ERROR_NAME_PATTERN is a valid regex"),
        }
    }

    /// Classifier with a custom naming pattern
    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn is_error_like(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

impl Default for ErrorNameClassifier {
    fn default() -> Self {
        Self::new()
    }
}
