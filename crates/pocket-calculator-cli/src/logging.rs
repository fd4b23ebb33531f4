//! Diagnostic logging to stderr.
//!
//! stdout carries only calculator output, so every log line goes to stderr.
//! `RUST_LOG` takes precedence over the verbosity flags:
//!
//! ```bash
//! RUST_LOG=pocket_calculator=debug pocketcalc eval "5 + 3 ="
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::CliConfig;

static INIT: Once = Once::new();

/// Builds the event filter for `config`
#[must_use]
pub fn build_filter(config: &CliConfig) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(config.verbosity.log_filter())
    }
}

/// Installs the global subscriber.
///
/// Only the first call takes effect.
pub fn init(config: &CliConfig) {
    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.verbosity.is_debug())
            .with_ansi(config.color.should_color())
            .without_time()
            .with_filter(build_filter(config));

        // A subscriber installed by an embedding host wins.
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
