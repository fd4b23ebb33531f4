//! Calculator core: the input state machine and its building blocks
//!
//! - [`Calculator`]: the engine consuming digit/operator/control events
//! - [`Operation`]: pending operator and its integer arithmetic
//! - [`DisplayText`]: display text edited token by token
//! - [`Snapshot`]: flat five-field state snapshot for host persistence

mod calculator;
pub mod display;
mod operations;
pub mod snapshot;

pub use calculator::Calculator;
pub use display::DisplayText;
pub use operations::Operation;
pub use snapshot::{Snapshot, SnapshotError};

use thiserror::Error;

/// Maximum number of digits in an operand, and of characters in a display segment
pub const MAX_DIGITS: usize = 8;

/// Text shown instead of the display while an error is latched
pub const ERROR_DISPLAY: &str = "Erreur";

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Conditions that latch the calculator into its error state.
///
/// These never escape the engine's public operations: the engine latches the
/// kind, shows [`ERROR_DISPLAY`] and waits for a reset. Callers read the kind
/// back through [`Calculator::error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CalcError {
    /// Divisor was zero on a `/` apply
    #[error("division by zero")]
    DivideByZero,
    /// Divisor was zero on a `%` apply
    #[error("modulo by zero")]
    ModuloByZero,
    /// Operand being typed is not a valid integer
    #[error("operand is not a valid integer")]
    InvalidFormat,
    /// An operand segment of the display grew past eight characters
    #[error("operand exceeds 8 characters")]
    SegmentLengthExceeded,
}

impl CalcError {
    /// Every error kind
    pub const ALL: [Self; 4] = [
        Self::DivideByZero,
        Self::ModuloByZero,
        Self::InvalidFormat,
        Self::SegmentLengthExceeded,
    ];

    /// Message held as the display text while the error is latched
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::DivideByZero => "Erreur: div/0",
            Self::ModuloByZero => "Erreur: mod/0",
            Self::InvalidFormat => "Erreur: format invalide",
            Self::SegmentLengthExceeded => "Erreur: limite 8 chiffres",
        }
    }

    /// Recovers the error kind from a latched display message
    #[must_use]
    pub fn from_message(message: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|err| err.message() == message)
    }
}
