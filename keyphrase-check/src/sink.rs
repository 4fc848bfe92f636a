//! Output channel for check results.

/// Name of the output that carries the occurrence count.
pub const OCCURRENCES_OUTPUT: &str = "occurrences";

/// Write-only channel the check reports through.
///
/// `set_failed` may be called more than once per run; any call marks the run
/// as failed.
pub trait OutputSink {
    /// Publish a named output value.
    fn set_output(&mut self, name: &str, value: &str);
    /// Emit an informational log line.
    fn info(&mut self, message: &str);
    /// Signal a failure with a human-readable message.
    fn set_failed(&mut self, message: &str);
}

/// Sink that keeps everything in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    /// Outputs in the order they were set.
    pub outputs: Vec<(String, String)>,
    /// Informational lines.
    pub info: Vec<String>,
    /// Failure messages.
    pub failures: Vec<String>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value set for `name`.
    #[must_use]
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl OutputSink for RecordingSink {
    fn set_output(&mut self, name: &str, value: &str) {
        self.outputs.push((name.to_owned(), value.to_owned()));
    }

    fn info(&mut self, message: &str) {
        self.info.push(message.to_owned());
    }

    fn set_failed(&mut self, message: &str) {
        self.failures.push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_last_output() {
        let mut sink = RecordingSink::new();
        sink.set_output(OCCURRENCES_OUTPUT, "1");
        sink.set_output(OCCURRENCES_OUTPUT, "2");
        assert_eq!(sink.output(OCCURRENCES_OUTPUT), Some("2"));
        assert_eq!(sink.output("other"), None);
        assert!(!sink.failed());

        sink.set_failed("boom");
        assert!(sink.failed());
    }
}
