//! Styled terminal output.
//!
//! [`Output`] also acts as the toast and navigation front-end for the
//! sign-up controller: notifications become status lines and navigation
//! prints the next page to visit.

use std::fmt::Display;

use classroom_business::{Navigator, Notification, Notifier, Route};
use console::{Term, style};

/// Styled writer for terminal output.
#[derive(Debug, Clone)]
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output handle writing to stdout.
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn line(&self, text: &str) {
        drop(self.term.write_line(text));
    }

    /// Print a success message with a green checkmark.
    pub fn success(&self, message: impl Display) {
        self.line(&format!("{} {message}", style("✓").green().bold()));
    }

    /// Print an error message with a red cross.
    pub fn error(&self, message: impl Display) {
        self.line(&format!("{} {message}", style("✗").red().bold()));
    }

    /// Print a warning message with a yellow symbol.
    pub fn warning(&self, message: impl Display) {
        self.line(&format!("{} {message}", style("⚠").yellow().bold()));
    }

    /// Print an info message with a blue symbol.
    pub fn info(&self, message: impl Display) {
        self.line(&format!("{} {message}", style("ℹ").blue().bold()));
    }

    /// Print an empty line.
    pub fn newline(&self) {
        self.line("");
    }

    /// Print a bold cyan header.
    pub fn header(&self, message: impl Display) {
        self.line(&style(message).bold().cyan().to_string());
    }

    /// Print a labeled value with indentation.
    pub fn labeled_indent(&self, label: impl Display, value: impl Display, indent: usize) {
        let spaces = " ".repeat(indent);
        self.line(&format!("{spaces}{}: {value}", style(label).dim()));
    }

    /// Print a dimmed message.
    pub fn dim(&self, message: impl Display) {
        self.line(&style(message).dim().to_string());
    }
}

impl Notifier for Output {
    fn notify(&self, notification: Notification) {
        match notification {
            Notification::Success(message) => self.success(message),
            Notification::Error(message) => self.error(message),
        }
    }
}

impl Navigator for Output {
    fn navigate(&self, route: Route) {
        self.line(&format!(
            "{} Next: {}",
            style("→").cyan().bold(),
            style(route.path()).cyan()
        ));
    }
}
