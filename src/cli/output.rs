//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Format a `label: value` settings row (green label)
pub fn setting(label: &str, value: &(impl std::fmt::Display + ?Sized)) -> String {
    format!("{}: {}", label.green(), value)
}
