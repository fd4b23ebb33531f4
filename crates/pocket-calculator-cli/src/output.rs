//! Terminal output
//!
//! Calculator output goes to stdout and is never suppressed. Status
//! messages go to stderr and are hidden in quiet mode.

use console::{style, Term};

/// Output format for calculator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The visible display line
    #[default]
    Text,
    /// The engine snapshot as JSON
    Json,
}

/// Styles a display line: errors in red, results in bold
#[must_use]
pub fn style_display(text: &str, is_error: bool, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    if is_error {
        style(text).red().bold().force_styling(true).to_string()
    } else {
        style(text).bold().force_styling(true).to_string()
    }
}

/// Writes calculator output and status messages
#[derive(Debug)]
pub struct Reporter {
    out: Term,
    err: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print the display line
    pub fn display(&self, text: &str, is_error: bool) -> std::io::Result<()> {
        self.out
            .write_line(&style_display(text, is_error, self.use_color))
    }

    /// Print raw JSON
    pub fn json(&self, json: &str) -> std::io::Result<()> {
        self.out.write_line(json)
    }

    /// Print the interactive prompt
    pub fn prompt(&self) -> std::io::Result<()> {
        let prompt = if self.use_color {
            style("> ").dim().force_styling(true).to_string()
        } else {
            "> ".to_string()
        };
        self.err.write_str(&prompt)
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("ℹ").blue().bold().force_styling(true).to_string()
        } else {
            "INFO".to_string()
        };

        let _ = self.err.write_line(&format!("{prefix} {message}"));
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        // Always printed, even in quiet mode
        let prefix = if self.use_color {
            style("⚠").yellow().bold().force_styling(true).to_string()
        } else {
            "WARN".to_string()
        };

        let _ = self.err.write_line(&format!("{prefix} {message}"));
    }
}
