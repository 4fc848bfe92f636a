//! Keyphrase matching.
//!
//! The keyphrase is compiled as a regular expression, not escaped: `.` or
//! `(a|b)` in a keyphrase keep their regex meaning. Callers that want a
//! literal match must escape it themselves (see [`regex::escape`]).

use regex::{Regex, RegexBuilder};

/// A compiled keyphrase.
#[derive(Debug, Clone)]
pub struct KeyphrasePattern {
    regex: Regex,
}

impl KeyphrasePattern {
    /// Compile `keyphrase`, folding case unless `case_sensitive` is set.
    ///
    /// # Errors
    ///
    /// Returns the `regex` parse error if the keyphrase is not a valid pattern
    /// or exceeds the compiled size limit.
    pub fn compile(keyphrase: &str, case_sensitive: bool) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(keyphrase)
            .case_insensitive(!case_sensitive)
            .build()?;
        tracing::debug!(keyphrase, case_sensitive, "compiled keyphrase pattern");
        Ok(Self { regex })
    }

    /// Number of non-overlapping matches in `content`, scanning left to right.
    #[must_use]
    pub fn count(&self, content: &str) -> usize {
        self.regex.find_iter(content).count()
    }

    /// The source pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
