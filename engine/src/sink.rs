//! Output sink collaborator.
//!
//! All user-facing output from the dispatcher — help listings and
//! diagnostic lines — flows through the [`OutputSink`] trait, so embedders
//! can redirect or capture it.

use std::sync::Mutex;

use console::style;

/// Receives the dispatcher's output, one line at a time.
pub trait OutputSink: Send + Sync {
    /// Writes a normal output line.
    fn write_line(&self, text: &str);
    /// Writes a diagnostic line; implementations may apply styling.
    fn write_error(&self, text: &str);
}

/// Sink backed by the process's stdout/stderr. Errors are styled red when
/// stderr is a terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn write_line(&self, text: &str) {
        println!("{text}");
    }

    fn write_error(&self, text: &str) {
        eprintln!("{}", style(text).red().for_stderr());
    }
}

/// Sink that captures output in memory.
///
/// Used by the test suites; also useful for embedders that want to render
/// dispatcher output themselves.
///
/// # Examples
///
/// ```
/// use command_dispatch_engine::sink::{MemorySink, OutputSink};
///
/// let sink = MemorySink::default();
/// sink.write_line("hello");
/// sink.write_error("oops");
/// assert_eq!(sink.lines(), vec!["hello"]);
/// assert_eq!(sink.errors(), vec!["oops"]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured normal lines, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("sink lock poisoned").clone()
    }

    /// Captured diagnostic lines, in write order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().expect("sink lock poisoned").clone()
    }
}

impl OutputSink for MemorySink {
    fn write_line(&self, text: &str) {
        self.lines
            .lock()
            .expect("sink lock poisoned")
            .push(text.to_string());
    }

    fn write_error(&self, text: &str) {
        self.errors
            .lock()
            .expect("sink lock poisoned")
            .push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_write_order() {
        let sink = MemorySink::new();
        sink.write_line("one");
        sink.write_line("two");
        sink.write_error("bad");
        assert_eq!(sink.lines(), vec!["one", "two"]);
        assert_eq!(sink.errors(), vec!["bad"]);
    }
}
