//! Styling and output boundary traits
//!
//! The renderer only talks to these traits, so tests can swap in
//! plain styling and in-memory sinks.

use std::io::{self, Write};

use colored::Colorize;

/// Style tag handed to a [`Styler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Box-drawing prefixes
    Structure,
    Info,
    Debug,
    Warn,
    Error,
}

/// Terminal styling backend.
pub trait Styler: Send + Sync {
    /// Wrap `text` in the escape codes for `style`.
    /// Implementations may return the text unchanged when color is off.
    fn paint(&self, text: &str, style: Style) -> String;
}

/// Receiver of fully formatted output lines.
pub trait LineSink {
    /// Write one line followed by a line terminator.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Bold bright colors via `colored`.
///
/// Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE and any override set
/// through [`crate::config::ColorMode::apply`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ColoredStyler;

impl Styler for ColoredStyler {
    fn paint(&self, text: &str, style: Style) -> String {
        let styled = match style {
            Style::Structure => text.bright_white(),
            Style::Info => text.bright_cyan(),
            Style::Debug => text.bright_magenta(),
            Style::Warn => text.bright_yellow(),
            Style::Error => text.bright_red(),
        };
        styled.bold().to_string()
    }
}

/// No styling at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint(&self, text: &str, _style: Style) -> String {
        text.to_string()
    }
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Adapts any `io::Write` into a line sink.
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriteSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineSink for WriteSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_styler_returns_input() {
        assert_eq!(PlainStyler.paint(" ├─", Style::Structure), " ├─");
        assert_eq!(PlainStyler.paint("warn:", Style::Warn), "warn:");
    }

    #[test]
    fn test_colored_styler_keeps_text() {
        // escape codes depend on the environment, the text itself must survive
        let painted = ColoredStyler.paint("error:", Style::Error);
        assert!(painted.contains("error:"));
    }

    #[test]
    fn test_write_sink_terminates_lines() {
        let mut sink = WriteSink::new(Vec::new());
        sink.write_line("  T").unwrap();
        sink.write_line("    ├─ a").unwrap();
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "  T\n    ├─ a\n");
    }

    #[test]
    fn test_vec_sink_collects_lines() {
        let mut sink: Vec<String> = Vec::new();
        sink.write_line("one").unwrap();
        sink.write_line("").unwrap();
        assert_eq!(sink, vec!["one".to_string(), String::new()]);
    }
}
