//! CLI command definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pocket_calculator::prelude::DEFAULT_DISPLAY_WIDTH;

use crate::output::OutputFormat;

/// pocketcalc: sequential four-function integer calculator
#[derive(Parser, Debug)]
#[command(name = "pocketcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress status messages)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Display width in characters (0 = unlimited)
    #[arg(
        long,
        env = "POCKETCALC_WIDTH",
        default_value_t = DEFAULT_DISPLAY_WIDTH,
        global = true
    )]
    pub width: usize,

    /// Snapshot file restored before and saved after each run
    #[arg(long, env = "POCKETCALC_STATE", global = true)]
    pub state: Option<PathBuf>,

    /// Append every result shown on `=` to this file
    #[arg(long, global = true)]
    pub results: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a key sequence and print the display
    ///
    /// Keys: digits, + - * / %, = (or Enter), n (sign), C (erase), AC (clear).
    /// Example: pocketcalc eval "12 + 30 ="
    Eval(EvalArgs),

    /// Read key sequences line by line from stdin
    Repl,

    /// Inspect or reset the saved snapshot
    State(StateArgs),

    /// Show configuration
    Config,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Key sequence, e.g. "5 + 3 =" or 5+3=; options go before the keys
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print the engine snapshot as JSON instead of the display
    #[arg(long)]
    pub json: bool,
}

impl EvalArgs {
    /// Joined key sequence
    #[must_use]
    pub fn key_sequence(&self) -> String {
        self.keys.join(" ")
    }

    /// Requested output format
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Arguments for the state command
#[derive(Parser, Debug)]
pub struct StateArgs {
    /// State subcommand
    #[command(subcommand)]
    pub action: StateAction,
}

/// State subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateAction {
    /// Print the saved snapshot
    Show,
    /// Delete the saved snapshot
    Reset,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
