//! The calculator engine: a sequential, left-to-right input state machine
//!
//! Operators apply immediately as soon as the next operator or `=` arrives,
//! so `5 + 3 * 2 =` yields 16. The engine has two meta-states:
//!
//! ```text
//!            apply error / segment overflow
//!   Normal ──────────────────────────────────▶ Error
//!     ▲                                          │
//!     └──── reset(), or digit/operator/negate ◀──┘
//!           (implicit reset before the input)
//! ```
//!
//! While an error is latched, `=` and backspace do nothing.

use tracing::{debug, warn};

use crate::core::display::DisplayText;
use crate::core::snapshot::{Snapshot, SnapshotError};
use crate::core::{CalcError, CalcResult, Operation, ERROR_DISPLAY, MAX_DIGITS};
use crate::input::{Digit, KeyAction};

/// Calculator engine state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    /// Incrementally edited display text
    display: DisplayText,
    /// Operator waiting for its right-hand operand
    pending: Option<Operation>,
    /// Operand being typed, optionally prefixed with `-`
    entry: String,
    /// Running result
    accumulator: i64,
    /// Latched error, if any
    error: Option<CalcError>,
}

impl Calculator {
    /// Creates a calculator in its initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text to show: [`ERROR_DISPLAY`] while an error is latched,
    /// otherwise the display text verbatim.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.error.is_some() {
            ERROR_DISPLAY
        } else {
            self.display.as_str()
        }
    }

    /// Returns the underlying display text, including a latched error message
    #[must_use]
    pub fn raw_display(&self) -> &str {
        self.display.as_str()
    }

    /// Returns the running result
    #[must_use]
    pub fn accumulator(&self) -> i64 {
        self.accumulator
    }

    /// Returns the pending operator
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending
    }

    /// Returns the operand being typed
    #[must_use]
    pub fn current_entry(&self) -> &str {
        &self.entry
    }

    /// Returns true while an error is latched
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Returns the latched error kind
    #[must_use]
    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    /// Dispatches a key action to the matching operation
    pub fn handle(&mut self, action: KeyAction) {
        match action {
            KeyAction::Digit(d) => self.add_digit(d),
            KeyAction::Operator(op) => self.add_operator(op),
            KeyAction::Equals => self.calculate_result(),
            KeyAction::Negate => self.negate(),
            KeyAction::Backspace => self.backspace(),
            KeyAction::Clear => self.reset(),
        }
    }

    /// Types a digit. Digits beyond the eighth are dropped.
    pub fn add_digit(&mut self, digit: Digit) {
        self.recover();
        if digit_count(&self.entry) >= MAX_DIGITS {
            debug!(%digit, entry = %self.entry, "operand full, digit dropped");
            return;
        }
        let ch = digit.to_char();
        self.entry.push(ch);
        self.display.push(ch);
    }

    /// Selects an operator, applying the pending one first when an operand
    /// has been typed. With no operand, a pending operator is swapped for
    /// `op`, and a bare result on screen gets `op` appended.
    pub fn add_operator(&mut self, op: Operation) {
        self.recover();

        if !self.entry.is_empty() {
            if let Some(pending) = self.pending {
                if self.apply(pending).is_err() {
                    return;
                }
                self.display.set(format!("{} {op} ", self.accumulator));
            } else {
                match parse_operand(&self.entry) {
                    Ok(value) => self.accumulator = value,
                    Err(err) => {
                        self.latch(err);
                        return;
                    }
                }
                self.display.set(format!("{} {op} ", self.entry));
            }
            self.entry.clear();
        } else if self.pending.is_some() {
            self.display.replace_operator(op);
        } else if !self.display.is_empty() {
            self.display.push_operator(op);
        } else {
            return;
        }

        debug!(%op, accumulator = self.accumulator, "operator pending");
        self.pending = Some(op);

        if self.display.segments_exceed(MAX_DIGITS) {
            self.latch(CalcError::SegmentLengthExceeded);
        }
    }

    /// Applies the pending operator (`=`) and shows the result.
    ///
    /// Does nothing while an error is latched or when either the operator
    /// or the operand is missing. The result becomes the new operand, so
    /// further digits extend it.
    pub fn calculate_result(&mut self) {
        if self.error.is_some() || self.entry.is_empty() {
            return;
        }
        let Some(pending) = self.pending else {
            return;
        };
        if self.apply(pending).is_ok() {
            self.entry = self.accumulator.to_string();
            self.display.set(self.entry.clone());
            debug!(result = self.accumulator, "result computed");
        }
    }

    /// Toggles the sign of the operand being typed
    pub fn negate(&mut self) {
        self.recover();
        if self.entry.is_empty() {
            return;
        }
        if self.entry.starts_with('-') {
            self.entry.remove(0);
        } else {
            self.entry.insert(0, '-');
        }
        self.display.replace_operand(&self.entry);
    }

    /// Erases the last character of the operand, or the pending operator.
    /// A lone negative digit (`-5`) is erased in one step.
    pub fn backspace(&mut self) {
        if self.error.is_some() {
            return;
        }
        if is_lone_negative_digit(&self.entry) {
            self.entry.clear();
            self.display.drop_last(2);
        } else if !self.entry.is_empty() {
            self.entry.pop();
            self.display.pop();
        } else if self.pending.take().is_some() {
            self.display.drop_operator();
        } else {
            self.display.pop();
        }
    }

    /// Restores the initial state and clears any latched error
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Captures the five engine fields
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display_text: self.display.to_string(),
            current_number: self.entry.clone(),
            last_operation: self.pending.map(|op| op.symbol()),
            result: self.accumulator,
            is_error: self.error.is_some(),
        }
    }

    /// Rebuilds an engine from a snapshot, field for field.
    ///
    /// The latched error kind is recovered from the stored message; an
    /// unrecognized message restores as [`CalcError::InvalidFormat`].
    pub fn restore(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        let pending = snapshot.pending_operation()?;
        let error = snapshot.is_error.then(|| {
            CalcError::from_message(&snapshot.display_text).unwrap_or_else(|| {
                warn!(
                    message = %snapshot.display_text,
                    "unrecognized latched error message in snapshot"
                );
                CalcError::InvalidFormat
            })
        });
        Ok(Self {
            display: DisplayText::from(snapshot.display_text.as_str()),
            pending,
            entry: snapshot.current_number.clone(),
            accumulator: snapshot.result,
            error,
        })
    }

    /// Implicit reset before new input while an error is latched
    fn recover(&mut self) {
        if let Some(err) = self.error {
            debug!(error = %err, "resetting latched error before new input");
            self.reset();
        }
    }

    /// Folds the typed operand into the accumulator with `op`
    fn apply(&mut self, op: Operation) -> CalcResult<()> {
        let outcome =
            parse_operand(&self.entry).and_then(|operand| op.apply(self.accumulator, operand));
        match outcome {
            Ok(value) => {
                self.accumulator = value;
                self.pending = None;
                self.entry.clear();
                Ok(())
            }
            Err(err) => {
                self.latch(err);
                Err(err)
            }
        }
    }

    /// Clears all fields and latches `err`
    fn latch(&mut self, err: CalcError) {
        warn!(error = %err, entry = %self.entry, "calculator error latched");
        self.reset();
        self.display.set(err.message());
        self.error = Some(err);
    }
}

/// Number of digits in an operand.
///
/// The sign is excluded, so `-12345678` is a full operand; its nine-character
/// display segment then latches on the next operator.
fn digit_count(entry: &str) -> usize {
    entry.strip_prefix('-').unwrap_or(entry).chars().count()
}

fn is_lone_negative_digit(entry: &str) -> bool {
    entry.starts_with('-') && entry.chars().count() == 2
}

fn parse_operand(entry: &str) -> CalcResult<i64> {
    entry.parse().map_err(|_| CalcError::InvalidFormat)
}
