//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr so stdout stays free for workflow commands and
//! reports. `RUST_LOG` overrides the verbosity flag.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Log directive for a `-v` count.
#[must_use]
pub fn directive(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("keyphrase_check={level},keyphrase_check_cli={level}")
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose >= 2)
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
