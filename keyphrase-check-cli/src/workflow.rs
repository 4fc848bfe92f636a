//! Workflow-runner glue.
//!
//! Inputs arrive as `INPUT_<NAME>` environment variables. Outputs go to the
//! file named by `GITHUB_OUTPUT` when the runner provides one, and to a
//! `::set-output` command on stdout otherwise. Log lines and `::error::`
//! commands are written to stdout.

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use keyphrase_check::{InputSource, OutputSink};

/// Environment variable naming the output file.
pub const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";

const DELIMITER_PREFIX: &str = "ghadelimiter_";

/// Environment variable that carries input `name`.
///
/// Spaces become underscores and the name is upper-cased; hyphens are kept,
/// so `text-file` is read from `INPUT_TEXT-FILE`.
#[must_use]
pub fn input_variable(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Inputs read from a snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvInputs {
    vars: BTreeMap<String, String>,
}

impl EnvInputs {
    /// Snapshot the current process environment. Variables that are not
    /// valid Unicode are skipped.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    #[must_use]
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Path from `GITHUB_OUTPUT`, if set and non-empty.
    #[must_use]
    pub fn output_file(&self) -> Option<PathBuf> {
        self.vars
            .get(OUTPUT_FILE_VAR)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    }
}

impl InputSource for EnvInputs {
    fn raw(&self, name: &str) -> Option<String> {
        self.vars.get(&input_variable(name)).cloned()
    }
}

/// Escape a workflow command message.
#[must_use]
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value.
#[must_use]
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Format a workflow command line (without trailing newline).
#[must_use]
pub fn command(name: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{name}");
    if !properties.is_empty() {
        let props: Vec<String> = properties
            .iter()
            .map(|(key, value)| format!("{key}={}", escape_property(value)))
            .collect();
        line.push(' ');
        line.push_str(&props.join(","));
    }
    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

/// Format a `name<<delimiter` block for the output file.
///
/// # Errors
///
/// Returns an error if the name or value contains the delimiter.
pub fn output_file_entry(name: &str, value: &str, delimiter: &str) -> Result<String> {
    if name.contains(delimiter) {
        bail!("Unexpected input: name should not contain the delimiter \"{delimiter}\"");
    }
    if value.contains(delimiter) {
        bail!("Unexpected input: value should not contain the delimiter \"{delimiter}\"");
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

/// `OutputSink` speaking the workflow-runner protocol.
pub struct WorkflowSink<W: Write> {
    stdout: W,
    output_file: Option<PathBuf>,
    failed: bool,
    write_errors: Vec<anyhow::Error>,
}

impl<W: Write> WorkflowSink<W> {
    #[must_use]
    pub fn new(stdout: W, output_file: Option<PathBuf>) -> Self {
        Self {
            stdout,
            output_file,
            failed: false,
            write_errors: Vec::new(),
        }
    }

    /// Whether `set_failed` was called.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Flush stdout and surface the first write failure, if any.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while writing an output or log line.
    pub fn finish(mut self) -> Result<()> {
        self.stdout.flush().context("Failed to flush stdout")?;
        match self.write_errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn line(&mut self, line: &str) {
        if let Err(err) = writeln!(self.stdout, "{line}") {
            self.record(anyhow::Error::new(err).context("Failed to write to stdout"));
        }
    }

    fn record(&mut self, err: anyhow::Error) {
        tracing::error!(error = %err, "workflow output failed");
        self.write_errors.push(err);
    }

    fn append_output(path: &Path, name: &str, value: &str) -> Result<()> {
        if !path.exists() {
            bail!("Missing file at path: {}", path.display());
        }
        let delimiter = format!("{DELIMITER_PREFIX}{}", uuid::Uuid::new_v4());
        let entry = output_file_entry(name, value, &delimiter)?;
        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open output file {}", path.display()))?;
        file.write_all(entry.as_bytes())
            .with_context(|| format!("Failed to write output file {}", path.display()))?;
        Ok(())
    }
}

impl<W: Write> OutputSink for WorkflowSink<W> {
    fn set_output(&mut self, name: &str, value: &str) {
        if let Some(path) = self.output_file.clone() {
            if let Err(err) = Self::append_output(&path, name, value) {
                self.record(err);
            }
            return;
        }
        self.line("");
        self.line(&command("set-output", &[("name", name)], value));
    }

    fn info(&mut self, message: &str) {
        self.line(message);
    }

    fn set_failed(&mut self, message: &str) {
        self.failed = true;
        self.line(&command("error", &[], message));
    }
}
