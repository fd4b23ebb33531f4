//! Pocket Calculator - sequential four-function integer calculator engine
//!
//! The engine consumes keypad events one at a time (digits, operators, `=`,
//! sign toggle, backspace, clear) and keeps a running result. Operators apply
//! immediately, left to right, the way a pocket calculator does; there is no
//! precedence parsing.
//!
//! # Behavior at a glance
//!
//! - Operands are capped at eight digits; further digits are dropped.
//! - Pressing a second operator before typing an operand swaps the operator.
//! - Division and modulo truncate toward zero. Dividing by zero latches an
//!   error; the display reads `Erreur` until a reset or the next digit,
//!   operator or sign toggle.
//! - The full state is five plain fields and can be snapshotted to JSON and
//!   restored.
//!
//! # Example
//!
//! ```rust
//! use pocket_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.press_keys("5 + 3 + 2 =").unwrap();
//! assert_eq!(calc.display_text(), "10");
//! assert_eq!(calc.accumulator(), 10);
//!
//! calc.press_keys("/ 0 =").unwrap();
//! assert_eq!(calc.error(), Some(CalcError::DivideByZero));
//! assert_eq!(calc.display_text(), "Erreur");
//!
//! // Snapshot and restore
//! let json = calc.snapshot().to_json().unwrap();
//! let restored = Calculator::restore(&Snapshot::from_json(&json).unwrap()).unwrap();
//! assert_eq!(restored, calc);
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod input;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        CalcError, CalcResult, Calculator, DisplayText, Operation, Snapshot, SnapshotError,
        ERROR_DISPLAY, MAX_DIGITS,
    };
    pub use crate::driver::{
        CalculatorDriver, EngineDriver, MemorySink, ResultSink, DEFAULT_DISPLAY_WIDTH,
    };
    pub use crate::input::{parse_keys, Digit, InputError, KeyAction};
}
