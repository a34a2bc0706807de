//! Line-oriented output sinks for notices and summaries.
//!
//! Lookups never print directly. The caller hands in a sink: `StdoutSink` for
//! a console, `LogSink` to route lines through `log`, or a `Vec<String>` to
//! capture them.

use std::io::Write;

pub trait OutputSink {
    fn write_line(&mut self, line: &str);
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }
}

impl OutputSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        // A closed stdout is not worth failing a lookup over.
        let _ = writeln!(std::io::stdout().lock(), "{line}");
    }
}

/// Forwards every line to `log::info!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl OutputSink for LogSink {
    fn write_line(&mut self, line: &str) {
        log::info!("{line}");
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn write_line(&mut self, _line: &str) {}
}
