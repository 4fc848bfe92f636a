//! Request types for a keyphrase check.
//!
//! `CheckInputs` holds parameters as they arrive from the caller. Turning it
//! into a `ValidationRequest` reconciles the two content sources and the
//! occurrence range, so a request that exists is always well-formed.

use std::borrow::Cow;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::{CheckError, InputError};
use crate::inputs::names;
use crate::report::ThresholdViolation;

/// Label used in log lines when the content came from the `text` input.
pub const INLINE_TEXT_LABEL: &str = "provided text";

/// Where the content to scan comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Literal text, used verbatim.
    Text(String),
    /// A file whose full contents are read as UTF-8.
    File(PathBuf),
}

impl ContentSource {
    /// Human-readable origin: the file path, or `provided text`.
    #[must_use]
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Self::Text(_) => Cow::Borrowed(INLINE_TEXT_LABEL),
            Self::File(path) => path.to_string_lossy(),
        }
    }
}

/// Accepted occurrence range. `maximum`, when set, is never below `minimum`.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct OccurrenceBounds {
    minimum: usize,
    maximum: Option<usize>,
}

impl OccurrenceBounds {
    /// Build a range, rejecting `maximum < minimum`.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidRange` if `maximum` is set and below `minimum`.
    pub fn new(minimum: usize, maximum: Option<usize>) -> Result<Self, CheckError> {
        if let Some(maximum) = maximum
            && maximum < minimum
        {
            return Err(CheckError::InvalidRange { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
    }

    /// A range with only a lower bound.
    #[must_use]
    pub fn at_least(minimum: usize) -> Self {
        Self {
            minimum,
            maximum: None,
        }
    }

    #[must_use]
    pub fn minimum(&self) -> usize {
        self.minimum
    }

    #[must_use]
    pub fn maximum(&self) -> Option<usize> {
        self.maximum
    }

    /// Check `occurrences` against both bounds.
    ///
    /// Both bounds are always evaluated; the result lists every bound that failed,
    /// lower bound first.
    #[must_use]
    pub fn violations(&self, occurrences: usize) -> Vec<ThresholdViolation> {
        let mut violations = Vec::new();
        if occurrences < self.minimum {
            violations.push(ThresholdViolation::BelowMinimum {
                minimum: self.minimum,
                found: occurrences,
            });
        }
        if let Some(maximum) = self.maximum
            && occurrences > maximum
        {
            violations.push(ThresholdViolation::AboveMaximum {
                maximum,
                found: occurrences,
            });
        }
        violations
    }
}

/// Parameters of a check before reconciliation.
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct CheckInputs {
    /// Path of the file to scan (`text-file`).
    pub text_file: Option<String>,
    /// Inline text to scan (`text`).
    pub text: Option<String>,
    /// Pattern to count; compiled as a regular expression.
    pub keyphrase: String,
    /// Match casing exactly when `true`.
    pub case_sensitive: bool,
    /// Lower bound on the occurrence count.
    pub minimum_occurrences: usize,
    /// Optional upper bound on the occurrence count.
    pub maximum_occurrences: Option<usize>,
}

/// A reconciled, well-formed check request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    source: ContentSource,
    keyphrase: String,
    case_sensitive: bool,
    bounds: OccurrenceBounds,
}

impl ValidationRequest {
    #[must_use]
    pub fn new(
        source: ContentSource,
        keyphrase: impl Into<String>,
        case_sensitive: bool,
        bounds: OccurrenceBounds,
    ) -> Self {
        Self {
            source,
            keyphrase: keyphrase.into(),
            case_sensitive,
            bounds,
        }
    }

    /// Reconcile raw inputs into a request.
    ///
    /// The range is checked before the content sources, so a run configured
    /// with both an inverted range and two sources reports the range.
    ///
    /// # Errors
    ///
    /// - `CheckError::Input` if the keyphrase is empty.
    /// - `CheckError::InvalidRange` if the maximum is below the minimum.
    /// - `CheckError::AmbiguousSource` unless exactly one of `text_file` / `text` is set.
    pub fn from_inputs(inputs: CheckInputs) -> Result<Self, CheckError> {
        if inputs.keyphrase.is_empty() {
            return Err(InputError::Missing {
                name: names::KEYPHRASE.to_owned(),
            }
            .into());
        }

        let bounds =
            OccurrenceBounds::new(inputs.minimum_occurrences, inputs.maximum_occurrences)?;

        let text_file = inputs.text_file.filter(|path| !path.is_empty());
        let text = inputs.text.filter(|text| !text.is_empty());
        let source = match (text_file, text) {
            (Some(path), None) => ContentSource::File(PathBuf::from(path)),
            (None, Some(text)) => ContentSource::Text(text),
            (Some(_), Some(_)) | (None, None) => return Err(CheckError::AmbiguousSource),
        };

        Ok(Self {
            source,
            keyphrase: inputs.keyphrase,
            case_sensitive: inputs.case_sensitive,
            bounds,
        })
    }

    #[must_use]
    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    #[must_use]
    pub fn keyphrase(&self) -> &str {
        &self.keyphrase
    }

    #[must_use]
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    #[must_use]
    pub fn bounds(&self) -> OccurrenceBounds {
        self.bounds
    }
}
