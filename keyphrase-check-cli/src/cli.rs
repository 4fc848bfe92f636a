use std::io::{self, Write};

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use keyphrase_check::output::{write_human, write_json};
use keyphrase_check::{CheckInputs, RecordingSink, RunOutcome};

use crate::logging;
use crate::workflow::{EnvInputs, WorkflowSink};

#[derive(Parser, Debug)]
#[command(name = "keyphrase-check")]
#[command(about = "Count keyphrase occurrences and enforce min/max thresholds")]
#[command(version)]
pub struct Cli {
    /// Increase diagnostic verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read `INPUT_*` variables and report with workflow commands (default)
    Action,
    /// Check text or a file given on the command line
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File whose contents are scanned
    #[arg(long, value_name = "PATH")]
    pub text_file: Option<String>,

    /// Inline text to scan
    #[arg(long)]
    pub text: Option<String>,

    /// Pattern to count (regular expression syntax)
    #[arg(long)]
    pub keyphrase: String,

    /// Match casing exactly
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set)]
    pub case_sensitive: bool,

    /// Fewest acceptable occurrences
    #[arg(long, value_name = "N")]
    pub minimum_occurrences: usize,

    /// Most acceptable occurrences
    #[arg(long, value_name = "N")]
    pub maximum_occurrences: Option<usize>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Human)]
    pub format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Human,
    Json,
}

impl CheckArgs {
    #[must_use]
    pub fn into_inputs(self) -> CheckInputs {
        let mut inputs = CheckInputs::default();
        inputs.text_file = self.text_file;
        inputs.text = self.text;
        inputs.keyphrase = self.keyphrase;
        inputs.case_sensitive = self.case_sensitive;
        inputs.minimum_occurrences = self.minimum_occurrences;
        inputs.maximum_occurrences = self.maximum_occurrences;
        inputs
    }
}

/// Parse arguments and run. `Ok(false)` means the check failed.
///
/// # Errors
///
/// Returns an error if reporting itself fails (stdout or the output file).
pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command.unwrap_or(Command::Action) {
        Command::Action => run_action(&EnvInputs::from_env()),
        Command::Check(args) => run_check(args, &mut io::stdout().lock()),
    }
}

/// Run against workflow-runner inputs, reporting on stdout and `GITHUB_OUTPUT`.
///
/// # Errors
///
/// Returns an error if an output or log line could not be written.
pub fn run_action(env: &EnvInputs) -> Result<bool> {
    let mut sink = WorkflowSink::new(io::stdout().lock(), env.output_file());
    let outcome = keyphrase_check::run(env, &mut sink);
    tracing::info!(
        occurrences = ?outcome.occurrences,
        failures = outcome.failures.len(),
        "check finished"
    );
    sink.finish()?;
    Ok(outcome.succeeded())
}

/// Run with command-line parameters and print a report to `writer`.
///
/// # Errors
///
/// Returns an error if the report could not be written.
pub fn run_check(args: CheckArgs, writer: &mut dyn Write) -> Result<bool> {
    let format = args.format;
    let mut sink = RecordingSink::new();
    let outcome = keyphrase_check::run_inputs(args.into_inputs(), &mut sink);
    for line in &sink.info {
        tracing::info!("{line}");
    }

    match format {
        Format::Json => write_json(&outcome, writer)?,
        Format::Human => write_colored(&outcome, writer)?,
    }
    Ok(outcome.succeeded())
}

/// Human report with failures and verdict lines coloured.
fn write_colored(outcome: &RunOutcome, writer: &mut dyn Write) -> Result<()> {
    let mut plain = Vec::new();
    write_human(outcome, &mut plain)?;
    let plain = String::from_utf8(plain)?;

    for line in plain.lines() {
        if line.starts_with('\u{2713}') {
            writeln!(writer, "{}", line.green().bold())?;
        } else if line.starts_with('\u{2717}') || outcome.failures.iter().any(|f| f == line) {
            writeln!(writer, "{}", line.red())?;
        } else {
            writeln!(writer, "{line}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_args_parse() {
        let cli = Cli::try_parse_from([
            "keyphrase-check",
            "check",
            "--text",
            "GitHub",
            "--keyphrase",
            "GitHub",
            "--case-sensitive",
            "false",
            "--minimum-occurrences",
            "1",
            "--maximum-occurrences",
            "2",
            "--format",
            "json",
        ]);
        let args = match cli {
            Ok(Cli {
                command: Some(Command::Check(args)),
                ..
            }) => args,
            other => panic!("expected check subcommand, got {other:?}"),
        };
        assert_eq!(args.format, Format::Json);
        let inputs = args.into_inputs();
        assert_eq!(inputs.text.as_deref(), Some("GitHub"));
        assert!(!inputs.case_sensitive);
        assert_eq!(inputs.maximum_occurrences, Some(2));
    }

    #[test]
    fn test_case_sensitive_is_required() {
        let cli = Cli::try_parse_from([
            "keyphrase-check",
            "check",
            "--text",
            "x",
            "--keyphrase",
            "x",
            "--minimum-occurrences",
            "1",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_no_subcommand_defaults_to_action() {
        let cli = Cli::try_parse_from(["keyphrase-check", "-vv"]);
        assert!(matches!(
            cli,
            Ok(Cli {
                verbose: 2,
                command: None
            })
        ));
    }
}
