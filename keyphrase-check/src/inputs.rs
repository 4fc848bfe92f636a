//! Named parameter source.
//!
//! Values are read the way workflow runners hand them over: every value is a
//! string, surrounding whitespace is trimmed, and a blank value means the
//! parameter was not supplied.

use std::collections::BTreeMap;

use crate::config::CheckInputs;
use crate::error::InputError;

/// Parameter names.
pub mod names {
    pub const TEXT_FILE: &str = "text-file";
    pub const TEXT: &str = "text";
    pub const KEYPHRASE: &str = "keyphrase";
    pub const CASE_SENSITIVE: &str = "case-sensitive";
    pub const MINIMUM_OCCURRENCES: &str = "minimum-occurrences";
    pub const MAXIMUM_OCCURRENCES: &str = "maximum-occurrences";
}

const TRUE_VALUES: &[&str] = &["true", "True", "TRUE"];
const FALSE_VALUES: &[&str] = &["false", "False", "FALSE"];

/// Read-only source of named string parameters.
pub trait InputSource {
    /// The raw value of `name`, if the platform has one.
    fn raw(&self, name: &str) -> Option<String>;
}

/// In-memory parameter source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapInputs {
    values: BTreeMap<String, String>,
}

impl MapInputs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter.
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_owned(), value.to_owned());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapInputs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl InputSource for MapInputs {
    fn raw(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Trimmed value of `name`, or `None` when absent or blank.
fn optional(source: &dyn InputSource, name: &str) -> Option<String> {
    source
        .raw(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn required(source: &dyn InputSource, name: &str) -> Result<String, InputError> {
    optional(source, name).ok_or_else(|| InputError::Missing {
        name: name.to_owned(),
    })
}

fn required_bool(source: &dyn InputSource, name: &str) -> Result<bool, InputError> {
    let value = required(source, name)?;
    if TRUE_VALUES.contains(&value.as_str()) {
        Ok(true)
    } else if FALSE_VALUES.contains(&value.as_str()) {
        Ok(false)
    } else {
        Err(InputError::InvalidBoolean {
            name: name.to_owned(),
        })
    }
}

fn parse_count(name: &str, value: &str) -> Result<usize, InputError> {
    value.parse::<usize>().map_err(|_| InputError::InvalidInteger {
        name: name.to_owned(),
        value: value.to_owned(),
    })
}

impl CheckInputs {
    /// Read every check parameter from `source`.
    ///
    /// # Errors
    ///
    /// - `InputError::Missing` if `keyphrase`, `case-sensitive` or
    ///   `minimum-occurrences` is absent or blank.
    /// - `InputError::InvalidBoolean` if `case-sensitive` is not a YAML 1.2 core boolean.
    /// - `InputError::InvalidInteger` if an occurrence bound is not a base-10
    ///   non-negative integer.
    pub fn read(source: &dyn InputSource) -> Result<Self, InputError> {
        let text_file = optional(source, names::TEXT_FILE);
        let text = optional(source, names::TEXT);
        let keyphrase = required(source, names::KEYPHRASE)?;
        let case_sensitive = required_bool(source, names::CASE_SENSITIVE)?;
        let minimum_occurrences = parse_count(
            names::MINIMUM_OCCURRENCES,
            &required(source, names::MINIMUM_OCCURRENCES)?,
        )?;
        let maximum_occurrences = optional(source, names::MAXIMUM_OCCURRENCES)
            .map(|value| parse_count(names::MAXIMUM_OCCURRENCES, &value))
            .transpose()?;

        Ok(Self {
            text_file,
            text,
            keyphrase,
            case_sensitive,
            minimum_occurrences,
            maximum_occurrences,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn base() -> MapInputs {
        MapInputs::new()
            .with(names::KEYPHRASE, "GitHub")
            .with(names::CASE_SENSITIVE, "true")
            .with(names::MINIMUM_OCCURRENCES, "1")
    }

    #[test]
    fn test_reads_all_parameters() {
        let source = base()
            .with(names::TEXT, "  Hey @professortocat  ")
            .with(names::MAXIMUM_OCCURRENCES, " 4 ");
        let inputs = CheckInputs::read(&source).unwrap();
        assert_eq!(inputs.text.as_deref(), Some("Hey @professortocat"));
        assert_eq!(inputs.text_file, None);
        assert_eq!(inputs.keyphrase, "GitHub");
        assert!(inputs.case_sensitive);
        assert_eq!(inputs.minimum_occurrences, 1);
        assert_eq!(inputs.maximum_occurrences, Some(4));
    }

    #[test]
    fn test_blank_optional_values_are_absent() {
        let source = base()
            .with(names::TEXT_FILE, "   ")
            .with(names::MAXIMUM_OCCURRENCES, "");
        let inputs = CheckInputs::read(&source).unwrap();
        assert_eq!(inputs.text_file, None);
        assert_eq!(inputs.maximum_occurrences, None);
    }

    #[test]
    fn test_missing_required_input() {
        for name in [
            names::KEYPHRASE,
            names::CASE_SENSITIVE,
            names::MINIMUM_OCCURRENCES,
        ] {
            let source = base().with(name, " ");
            let err = CheckInputs::read(&source).unwrap_err();
            assert_eq!(
                err,
                InputError::Missing {
                    name: name.to_owned()
                }
            );
        }
    }

    #[test]
    fn test_boolean_spellings() {
        for (value, expected) in [
            ("true", true),
            ("True", true),
            ("TRUE", true),
            ("false", false),
            ("False", false),
            ("FALSE", false),
        ] {
            let source = base().with(names::CASE_SENSITIVE, value);
            assert_eq!(
                CheckInputs::read(&source).unwrap().case_sensitive,
                expected,
                "{value}"
            );
        }

        for value in ["yes", "1", "tRUE"] {
            let source = base().with(names::CASE_SENSITIVE, value);
            assert!(matches!(
                CheckInputs::read(&source),
                Err(InputError::InvalidBoolean { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_counts() {
        for value in ["-1", "abc", "1.5", "0x10"] {
            let source = base().with(names::MINIMUM_OCCURRENCES, value);
            let err = CheckInputs::read(&source).unwrap_err();
            assert_eq!(
                err,
                InputError::InvalidInteger {
                    name: names::MINIMUM_OCCURRENCES.to_owned(),
                    value: value.to_owned(),
                }
            );
        }

        let source = base().with(names::MAXIMUM_OCCURRENCES, "many");
        assert!(matches!(
            CheckInputs::read(&source),
            Err(InputError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn test_map_inputs_from_iter() {
        let source: MapInputs = [("keyphrase", "a"), ("text", "b")].into_iter().collect();
        assert_eq!(source.raw("keyphrase").as_deref(), Some("a"));
        assert_eq!(source.raw("text-file"), None);
    }
}
