//! Error types for keyphrase validation.

use std::path::PathBuf;

use thiserror::Error;

/// Prefix applied to failures that are not one of the anticipated check errors.
pub const UNEXPECTED_FAILURE_PREFIX: &str = "Action failed with error: ";

/// A named parameter could not be read from the input source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    /// A required parameter is absent or blank.
    #[error("Input required and not supplied: {name}")]
    Missing {
        /// Parameter name as declared by the workflow (e.g. `keyphrase`).
        name: String,
    },

    /// A boolean parameter is not one of the accepted spellings.
    #[error(
        "Input does not meet YAML 1.2 \"Core Schema\" specification: {name}\nSupport boolean input list: `true | True | TRUE | false | False | FALSE`"
    )]
    InvalidBoolean {
        /// Parameter name.
        name: String,
    },

    /// An integer parameter is not a base-10 non-negative integer.
    #[error("Input '{name}' is not a valid non-negative integer: '{value}'")]
    InvalidInteger {
        /// Parameter name.
        name: String,
        /// The offending (trimmed) value.
        value: String,
    },
}

/// A check that stopped before thresholds could be evaluated.
///
/// The first three variants are the anticipated configuration failures and
/// carry their exact user-facing message. Everything else is reported with
/// [`UNEXPECTED_FAILURE_PREFIX`], see [`CheckError::failure_message`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CheckError {
    /// The configured maximum is below the configured minimum.
    #[error(
        "Invalid configuration: maximum-occurrences ({maximum}) must be greater than or equal to minimum-occurrences ({minimum})"
    )]
    InvalidRange {
        /// Configured `minimum-occurrences`.
        minimum: usize,
        /// Configured `maximum-occurrences`.
        maximum: usize,
    },

    /// Neither or both of `text` and `text-file` were supplied.
    #[error("Exactly one of 'text-file' or 'text' inputs must be provided")]
    AmbiguousSource,

    /// `text-file` points at a path that does not exist.
    #[error("File does not exist: {}", path.display())]
    FileNotFound {
        /// The path exactly as supplied.
        path: PathBuf,
    },

    /// A parameter was missing or malformed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The keyphrase does not compile as a regular expression.
    #[error(transparent)]
    Pattern(#[from] regex::Error),

    /// The file exists but could not be read as UTF-8 text.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// Underlying I/O error (invalid UTF-8 surfaces as `InvalidData`).
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    /// Whether the error falls outside the anticipated configuration failures.
    #[must_use]
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Self::Input(_) | Self::Pattern(_) | Self::Read { .. })
    }

    /// The message reported through the failure signal.
    #[must_use]
    pub fn failure_message(&self) -> String {
        if self.is_unexpected() {
            format!("{UNEXPECTED_FAILURE_PREFIX}{self}")
        } else {
            self.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message() {
        let err = CheckError::InvalidRange {
            minimum: 3,
            maximum: 2,
        };
        assert_eq!(
            err.failure_message(),
            "Invalid configuration: maximum-occurrences (2) must be greater than or equal to minimum-occurrences (3)"
        );
        assert!(!err.is_unexpected());
    }

    #[test]
    fn test_file_not_found_keeps_path_verbatim() {
        let err = CheckError::FileNotFound {
            path: PathBuf::from("docs/missing file.md"),
        };
        assert_eq!(
            err.failure_message(),
            "File does not exist: docs/missing file.md"
        );
    }

    #[test]
    fn test_input_errors_are_wrapped() {
        let err = CheckError::from(InputError::Missing {
            name: "keyphrase".to_owned(),
        });
        assert!(err.is_unexpected());
        assert_eq!(
            err.failure_message(),
            "Action failed with error: Input required and not supplied: keyphrase"
        );
    }

    #[test]
    fn test_boolean_error_lists_accepted_values() {
        let err = InputError::InvalidBoolean {
            name: "case-sensitive".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with(
            "Input does not meet YAML 1.2 \"Core Schema\" specification: case-sensitive"
        ));
        assert!(msg.contains("true | True | TRUE | false | False | FALSE"));
    }
}
