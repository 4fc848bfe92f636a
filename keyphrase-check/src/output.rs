//! Shared output formatting for run outcomes.
//!
//! Provides JSON and plain-text formatters for `RunOutcome`.
//! Color/terminal formatting is left to the CLI layer.

use std::io::Write;

use crate::report::RunOutcome;

/// Format a `RunOutcome` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(outcome: &RunOutcome, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(outcome)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `RunOutcome` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(outcome: &RunOutcome, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  KEYPHRASE CHECK")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;

    if let Some(result) = &outcome.result {
        writeln!(writer, "  Keyphrase:      \"{}\"", result.keyphrase)?;
        writeln!(writer, "  Source:         {}", result.source)?;
        writeln!(
            writer,
            "  Case-sensitive: {}",
            if result.case_sensitive { "yes" } else { "no" }
        )?;
        writeln!(writer, "  Occurrences:    {}", result.occurrences)?;
        writeln!(writer, "  Minimum:        {}", result.bounds.minimum())?;
        if let Some(maximum) = result.bounds.maximum() {
            writeln!(writer, "  Maximum:        {maximum}")?;
        }
        writeln!(writer)?;
    }

    if !outcome.failures.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  FAILURES")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for failure in &outcome.failures {
            writeln!(writer, "{failure}")?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    match (&outcome.result, outcome.succeeded()) {
        (Some(result), true) => writeln!(
            writer,
            "\u{2713} Found {} occurrences, within bounds",
            result.occurrences
        )?,
        (Some(_), false) => writeln!(writer, "\u{2717} Occurrence count out of bounds")?,
        (None, _) => writeln!(writer, "\u{2717} Check did not run")?,
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{MapInputs, RecordingSink, run};

    fn outcome(text: &str, min: &str) -> RunOutcome {
        let inputs = MapInputs::new()
            .with("text", text)
            .with("keyphrase", "GitHub")
            .with("case-sensitive", "true")
            .with("minimum-occurrences", min);
        run(&inputs, &mut RecordingSink::new())
    }

    #[test]
    fn test_human_success() {
        let mut buf = Vec::new();
        write_human(&outcome("GitHub GitHub", "1"), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Occurrences:    2"));
        assert!(text.contains("Found 2 occurrences, within bounds"));
        assert!(!text.contains("FAILURES"));
        assert!(!text.contains("Maximum:"));
    }

    #[test]
    fn test_human_failure_lists_messages() {
        let mut buf = Vec::new();
        write_human(&outcome("GitHub", "3"), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("FAILURES"));
        assert!(text.contains("Expected at least 3 occurrences of \"GitHub\", but found only 1"));
        assert!(text.contains("Occurrence count out of bounds"));
    }

    #[test]
    fn test_human_when_check_did_not_run() {
        let mut buf = Vec::new();
        write_human(&outcome("", "1"), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Exactly one of 'text-file' or 'text' inputs must be provided"));
        assert!(text.contains("Check did not run"));
        assert!(!text.contains("Occurrences:"));
    }

    #[test]
    fn test_json_shape() {
        let mut buf = Vec::new();
        write_json(&outcome("GitHub", "3"), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["occurrences"], 1);
        assert_eq!(value["result"]["bounds"]["minimum"], 3);
        assert!(value["result"]["bounds"]["maximum"].is_null());
        assert_eq!(value["result"]["violations"][0]["kind"], "below_minimum");
        assert_eq!(value["failures"].as_array().unwrap().len(), 1);
    }
}
