//! CLI configuration

use std::path::PathBuf;

use pocket_calculator::prelude::DEFAULT_DISPLAY_WIDTH;
use serde::{Deserialize, Serialize};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - calculator output only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - engine events
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Check if debug mode
    #[must_use]
    pub const fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }

    /// Log filter directive used when `RUST_LOG` is unset
    #[must_use]
    pub const fn log_filter(self) -> &'static str {
        match self {
            Self::Quiet => "off",
            Self::Normal => "error",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Display width in characters (0 = no truncation)
    pub width: usize,
    /// Snapshot file restored before and saved after each session
    pub state_path: Option<PathBuf>,
    /// File receiving one line per published result
    pub results_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            width: DEFAULT_DISPLAY_WIDTH,
            state_path: None,
            results_path: None,
        }
    }
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set display width
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set state file
    #[must_use]
    pub fn with_state_path(mut self, path: Option<impl Into<PathBuf>>) -> Self {
        self.state_path = path.map(Into::into);
        self
    }

    /// Set results file
    #[must_use]
    pub fn with_results_path(mut self, path: Option<impl Into<PathBuf>>) -> Self {
        self.results_path = path.map(Into::into);
        self
    }

    /// Width handed to the engine driver, `None` when truncation is off
    #[must_use]
    pub const fn display_width(&self) -> Option<usize> {
        if self.width == 0 {
            None
        } else {
            Some(self.width)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod verbosity_tests {
        use super::*;

        #[test]
        fn test_default_verbosity() {
            assert_eq!(Verbosity::default(), Verbosity::Normal);
        }

        #[test]
        fn test_is_quiet() {
            assert!(Verbosity::Quiet.is_quiet());
            assert!(!Verbosity::Normal.is_quiet());
            assert!(!Verbosity::Verbose.is_quiet());
            assert!(!Verbosity::Debug.is_quiet());
        }

        #[test]
        fn test_is_verbose() {
            assert!(!Verbosity::Quiet.is_verbose());
            assert!(!Verbosity::Normal.is_verbose());
            assert!(Verbosity::Verbose.is_verbose());
            assert!(Verbosity::Debug.is_verbose());
        }

        #[test]
        fn test_is_debug() {
            assert!(!Verbosity::Verbose.is_debug());
            assert!(Verbosity::Debug.is_debug());
        }

        #[test]
        fn test_log_filter() {
            assert_eq!(Verbosity::Quiet.log_filter(), "off");
            assert_eq!(Verbosity::Normal.log_filter(), "error");
            assert_eq!(Verbosity::Verbose.log_filter(), "debug");
            assert_eq!(Verbosity::Debug.log_filter(), "trace");
        }
    }

    mod color_tests {
        use super::*;

        #[test]
        fn test_default_color() {
            assert_eq!(ColorChoice::default(), ColorChoice::Auto);
        }

        #[test]
        fn test_forced_choices() {
            assert!(ColorChoice::Always.should_color());
            assert!(!ColorChoice::Never.should_color());
        }
    }

    mod config_tests {
        use super::*;

        #[test]
        fn test_default_config() {
            let config = CliConfig::default();
            assert_eq!(config.verbosity, Verbosity::Normal);
            assert_eq!(config.color, ColorChoice::Auto);
            assert_eq!(config.width, 20);
            assert!(config.state_path.is_none());
            assert!(config.results_path.is_none());
        }

        #[test]
        fn test_builder_chain() {
            let config = CliConfig::new()
                .with_verbosity(Verbosity::Debug)
                .with_color(ColorChoice::Never)
                .with_width(12)
                .with_state_path(Some("calc.json"))
                .with_results_path(Some("results.txt"));

            assert!(config.verbosity.is_debug());
            assert_eq!(config.color, ColorChoice::Never);
            assert_eq!(config.width, 12);
            assert_eq!(config.state_path, Some(PathBuf::from("calc.json")));
            assert_eq!(config.results_path, Some(PathBuf::from("results.txt")));
        }

        #[test]
        fn test_clear_paths() {
            let config = CliConfig::new()
                .with_state_path(Some("calc.json"))
                .with_state_path(None::<PathBuf>);
            assert!(config.state_path.is_none());
        }

        #[test]
        fn test_display_width() {
            assert_eq!(CliConfig::new().display_width(), Some(20));
            assert_eq!(CliConfig::new().with_width(0).display_width(), None);
            assert_eq!(CliConfig::new().with_width(5).display_width(), Some(5));
        }

        #[test]
        fn test_config_serializes() {
            let json = serde_json::to_string(&CliConfig::new().with_width(16)).unwrap();
            assert!(json.contains("\"width\":16"));
            let back: CliConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(back, CliConfig::new().with_width(16));
        }
    }
}
