//! pocketcalc: terminal host for the pocket-calculator engine
//!
//! Feeds key sequences to the engine from the command line or stdin, prints
//! the visible display, and optionally persists the engine between runs as
//! a JSON snapshot.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod repl;
mod session;

pub use commands::{Cli, ColorArg, Commands, EvalArgs, StateAction, StateArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{style_display, OutputFormat, Reporter};
pub use session::{Session, StateStore};
