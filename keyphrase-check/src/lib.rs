//! # keyphrase-check
//!
//! Counts occurrences of a keyphrase in inline text or a file and checks the
//! count against a minimum and an optional maximum. Meant as a gate step in
//! CI pipelines.
//!
//! The crate separates the **check itself** ([`validate`]) from the
//! **platform boundary** ([`run`]), which reads named parameters through an
//! [`InputSource`] and reports outputs, log lines and failures through an
//! [`OutputSink`].
//!
//! ## Quick Start
//!
//! ```rust
//! use keyphrase_check::{run, MapInputs, RecordingSink, OCCURRENCES_OUTPUT};
//!
//! let inputs = MapInputs::new()
//!     .with("text", "Hey @professortocat, I'm finished")
//!     .with("keyphrase", "professortocat")
//!     .with("case-sensitive", "true")
//!     .with("minimum-occurrences", "1");
//!
//! let mut sink = RecordingSink::new();
//! let outcome = run(&inputs, &mut sink);
//!
//! assert!(outcome.succeeded());
//! assert_eq!(sink.output(OCCURRENCES_OUTPUT), Some("1"));
//! ```

mod config;
mod content;
mod error;
mod inputs;
pub mod output;
mod pattern;
mod report;
mod sink;

pub use config::{
    CheckInputs, ContentSource, INLINE_TEXT_LABEL, OccurrenceBounds, ValidationRequest,
};
pub use content::{read_text_file, resolve_content};
pub use error::{CheckError, InputError, UNEXPECTED_FAILURE_PREFIX};
pub use inputs::{InputSource, MapInputs, names};
pub use pattern::KeyphrasePattern;
pub use report::{RunOutcome, ThresholdViolation, ValidationResult};
pub use sink::{OCCURRENCES_OUTPUT, OutputSink, RecordingSink};

/// Acquire the content of `request`, count the keyphrase and evaluate the bounds.
///
/// A threshold violation is not an error: it is recorded in
/// [`ValidationResult::violations`] alongside the occurrence count.
///
/// # Errors
///
/// - `CheckError::FileNotFound` if the file source does not exist.
/// - `CheckError::Read` if the file cannot be read as UTF-8.
/// - `CheckError::Pattern` if the keyphrase is not a valid regular expression.
pub fn validate(request: &ValidationRequest) -> Result<ValidationResult, CheckError> {
    let content = resolve_content(request.source())?;
    let pattern = KeyphrasePattern::compile(request.keyphrase(), request.case_sensitive())?;
    let occurrences = pattern.count(&content);
    tracing::debug!(
        keyphrase = request.keyphrase(),
        source = %request.source().label(),
        occurrences,
        "counted keyphrase occurrences"
    );
    Ok(ValidationResult::evaluate(request, occurrences))
}

/// Run a check end to end: read parameters, validate, report.
///
/// This is the single error boundary. Nothing is returned as an error; every
/// failure is signalled through `sink.set_failed` and mirrored in the returned
/// [`RunOutcome`]. The `occurrences` output is set iff counting ran.
pub fn run(inputs: &dyn InputSource, sink: &mut dyn OutputSink) -> RunOutcome {
    match CheckInputs::read(inputs) {
        Ok(inputs) => run_inputs(inputs, sink),
        Err(err) => {
            let mut outcome = RunOutcome::default();
            fail(&mut outcome, sink, &CheckError::from(err).failure_message());
            outcome
        }
    }
}

/// Like [`run`], for callers that already hold typed parameters.
pub fn run_inputs(inputs: CheckInputs, sink: &mut dyn OutputSink) -> RunOutcome {
    let mut outcome = RunOutcome::default();

    let result = match ValidationRequest::from_inputs(inputs).and_then(|r| validate(&r)) {
        Ok(result) => result,
        Err(err) => {
            tracing::debug!(error = %err, "check stopped before counting");
            fail(&mut outcome, sink, &err.failure_message());
            return outcome;
        }
    };

    sink.set_output(OCCURRENCES_OUTPUT, &result.occurrences.to_string());
    sink.info(&result.summary());

    if result.is_success() {
        sink.info(&result.success_message());
    } else {
        for message in result.failure_messages() {
            fail(&mut outcome, sink, &message);
        }
    }

    outcome.occurrences = Some(result.occurrences);
    outcome.result = Some(result);
    outcome
}

fn fail(outcome: &mut RunOutcome, sink: &mut dyn OutputSink, message: &str) {
    sink.set_failed(message);
    outcome.failures.push(message.to_owned());
}
