//! Host-facing calculator driver
//!
//! A host (keypad UI, terminal, test harness) talks to the engine through
//! [`CalculatorDriver`]: it presses keys and reads the display back. The
//! verification functions at the bottom of this module are written against
//! the trait, so the same behavioral checks run on the bare engine, on
//! [`EngineDriver`], and on any host that implements the trait.
//!
//! ```rust
//! use pocket_calculator::prelude::*;
//!
//! let mut driver = EngineDriver::new();
//! driver.press_keys("5 + 3 + 2 =").unwrap();
//! assert_eq!(driver.display(), "10");
//! assert_eq!(driver.sink().entries(), ["10"]);
//! ```

use crate::core::display::truncate_chars;
use crate::core::Calculator;
use crate::input::{parse_keys, InputError, KeyAction};

/// Default number of display characters a host shows
pub const DEFAULT_DISPLAY_WIDTH: usize = 20;

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses a single key
    fn press(&mut self, action: KeyAction);

    /// Presses every key of a key sequence (see [`parse_keys`]).
    ///
    /// Nothing is pressed if any key fails to parse.
    fn press_keys(&mut self, keys: &str) -> Result<(), InputError> {
        for action in parse_keys(keys)? {
            self.press(action);
        }
        Ok(())
    }

    /// Gets the text currently shown
    fn display(&self) -> String;

    /// Returns true while the calculator has an error latched
    fn is_error(&self) -> bool;

    /// Resets the calculator
    fn clear(&mut self) {
        self.press(KeyAction::Clear);
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, action: KeyAction) {
        self.handle(action);
    }

    fn display(&self) -> String {
        self.display_text().to_string()
    }

    fn is_error(&self) -> bool {
        self.error().is_some()
    }
}

/// Receives the visible display each time `=` is pressed
pub trait ResultSink {
    /// Publishes one result line
    fn publish(&mut self, text: &str);
}

/// Sink keeping published results in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    entries: Vec<String>,
}

impl MemorySink {
    /// Creates an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the published results, oldest first
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns the most recent result
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Removes and returns all published results
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.entries)
    }
}

impl ResultSink for MemorySink {
    fn publish(&mut self, text: &str) {
        self.entries.push(text.to_string());
    }
}

/// Reference host driver: an engine, a display width, and a result sink
#[derive(Debug, Clone)]
pub struct EngineDriver<S = MemorySink> {
    calculator: Calculator,
    width: Option<usize>,
    sink: S,
}

impl Default for EngineDriver<MemorySink> {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineDriver<MemorySink> {
    /// Creates a driver with a fresh engine and an in-memory sink
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(MemorySink::new())
    }
}

impl<S: ResultSink> EngineDriver<S> {
    /// Creates a driver publishing results to `sink`
    #[must_use]
    pub fn with_sink(sink: S) -> Self {
        Self {
            calculator: Calculator::new(),
            width: Some(DEFAULT_DISPLAY_WIDTH),
            sink,
        }
    }

    /// Replaces the engine (e.g. one restored from a snapshot)
    #[must_use]
    pub fn with_calculator(mut self, calculator: Calculator) -> Self {
        self.calculator = calculator;
        self
    }

    /// Sets the display width; `None` shows the full text
    #[must_use]
    pub fn with_width(mut self, width: Option<usize>) -> Self {
        self.width = width;
        self
    }

    /// Returns the engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the display width
    #[must_use]
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Returns the sink
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the sink mutably
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Splits the driver into its engine and sink
    pub fn into_parts(self) -> (Calculator, S) {
        (self.calculator, self.sink)
    }

    /// Returns the display text cut to the configured width
    #[must_use]
    pub fn visible_display(&self) -> &str {
        let text = self.calculator.display_text();
        match self.width {
            Some(width) => truncate_chars(text, width),
            None => text,
        }
    }
}

impl<S: ResultSink> CalculatorDriver for EngineDriver<S> {
    fn press(&mut self, action: KeyAction) {
        self.calculator.handle(action);
        if action == KeyAction::Equals {
            let shown = self.visible_display().to_string();
            self.sink.publish(&shown);
        }
    }

    fn display(&self) -> String {
        self.visible_display().to_string()
    }

    fn is_error(&self) -> bool {
        self.calculator.is_error()
    }
}

// ===== Unified behavioral checks =====
// These work with ANY CalculatorDriver implementation showing at least
// 16 characters.

fn press_all<D: CalculatorDriver>(driver: &mut D, keys: &str) {
    driver
        .press_keys(keys)
        .unwrap_or_else(|e| panic!("invalid verification keys {keys:?}: {e}"));
}

/// Verifies left-to-right chained arithmetic for every operator
pub fn verify_chained_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases = [
        ("5 + 3 + 2 =", "10"),
        ("5 + 3 * 2 =", "16"),
        ("9 - 12 =", "-3"),
        ("6 * 7 =", "42"),
        ("7 / 2 =", "3"),
        ("7 n / 2 =", "-3"),
        ("17 % 5 =", "2"),
        ("7 n % 3 =", "-1"),
    ];
    for (keys, expected) in cases {
        driver.clear();
        press_all(driver, keys);
        assert_eq!(driver.display(), expected, "after {keys:?}");
        assert!(!driver.is_error(), "unexpected error after {keys:?}");
    }
    driver.clear();
}

/// Verifies that a second operator replaces the pending one
pub fn verify_operator_substitution<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    press_all(driver, "5 + -");
    assert_eq!(driver.display(), "5 - ");
    press_all(driver, "3 =");
    assert_eq!(driver.display(), "2");
    driver.clear();
}

/// Verifies error latching and both ways out of it
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    press_all(driver, "7 / 0 =");
    assert!(driver.is_error());
    assert_eq!(driver.display(), "Erreur");

    // Backspace and equals leave the latch alone
    press_all(driver, "C =");
    assert!(driver.is_error());

    // A digit resets implicitly
    press_all(driver, "1");
    assert!(!driver.is_error());
    assert_eq!(driver.display(), "1");

    press_all(driver, "% 0 +");
    assert!(driver.is_error());
    press_all(driver, "AC");
    assert!(!driver.is_error());
    assert_eq!(driver.display(), "");
}

/// Verifies sign toggling of the operand being typed
pub fn verify_negation<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    press_all(driver, "5 n");
    assert_eq!(driver.display(), "-5");
    press_all(driver, "n");
    assert_eq!(driver.display(), "5");
    press_all(driver, "+ n");
    assert_eq!(driver.display(), "5 + ");
    driver.clear();
}

/// Verifies backspace priorities
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    press_all(driver, "5 n C");
    assert_eq!(driver.display(), "");
    press_all(driver, "123 C");
    assert_eq!(driver.display(), "12");
    press_all(driver, "+ C");
    assert_eq!(driver.display(), "12");
    driver.clear();
}

/// Verifies the eight-digit operand limit and the segment-length error
pub fn verify_length_limits<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    press_all(driver, "123456789");
    assert_eq!(driver.display(), "12345678");
    driver.clear();

    press_all(driver, "99999999 * 99999999 =");
    assert_eq!(driver.display(), "9999999800000001");
    press_all(driver, "+");
    assert!(driver.is_error());
    driver.clear();
}

/// Complete verification suite
pub fn run_full_verification<D: CalculatorDriver>(driver: &mut D) {
    verify_chained_arithmetic(driver);
    verify_operator_substitution(driver);
    verify_error_recovery(driver);
    verify_negation(driver);
    verify_backspace(driver);
    verify_length_limits(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== MemorySink tests =====

    #[test]
    fn test_memory_sink_publish_and_take() {
        let mut sink = MemorySink::new();
        assert!(sink.entries().is_empty());
        assert_eq!(sink.last(), None);
        sink.publish("10");
        sink.publish("42");
        assert_eq!(sink.entries(), ["10", "42"]);
        assert_eq!(sink.last(), Some("42"));
        assert_eq!(sink.take(), vec!["10".to_string(), "42".to_string()]);
        assert!(sink.entries().is_empty());
    }

    // ===== EngineDriver tests =====

    #[test]
    fn test_engine_driver_defaults() {
        let driver = EngineDriver::new();
        assert_eq!(driver.width(), Some(DEFAULT_DISPLAY_WIDTH));
        assert_eq!(driver.display(), "");
        assert!(!driver.is_error());
        assert_eq!(driver.calculator(), &Calculator::new());
    }

    #[test]
    fn test_engine_driver_publishes_on_equals() {
        let mut driver = EngineDriver::new();
        driver.press_keys("6 * 7 =").unwrap();
        assert_eq!(driver.sink().entries(), ["42"]);
        driver.press_keys("+ 1").unwrap();
        assert_eq!(driver.sink().entries().len(), 1);
    }

    #[test]
    fn test_engine_driver_publishes_even_when_nothing_changes() {
        let mut driver = EngineDriver::new();
        driver.press_keys("12 =").unwrap();
        assert_eq!(driver.sink().last(), Some("12"));
        driver.press_keys("7 / 0 =").unwrap();
        assert_eq!(driver.sink().last(), Some("Erreur"));
    }

    #[test]
    fn test_engine_driver_truncates_display() {
        let mut driver = EngineDriver::new().with_width(Some(4));
        driver.press_keys("12 + 34").unwrap();
        assert_eq!(driver.display(), "12 +");
        assert_eq!(driver.calculator().display_text(), "12 + 34");
    }

    #[test]
    fn test_engine_driver_unbounded_width() {
        let mut driver = EngineDriver::new().with_width(None);
        driver.press_keys("12345678 * 12345678 =").unwrap();
        assert_eq!(driver.display(), "152415765279684");
    }

    #[test]
    fn test_engine_driver_with_calculator() {
        let mut calc = Calculator::new();
        calc.press_keys("9 +").unwrap();
        let mut driver = EngineDriver::new().with_calculator(calc);
        driver.press_keys("1 =").unwrap();
        assert_eq!(driver.display(), "10");
    }

    #[test]
    fn test_engine_driver_into_parts() {
        let mut driver = EngineDriver::new();
        driver.press_keys("2 + 2 =").unwrap();
        driver.sink_mut().publish("manual");
        let (calc, sink) = driver.into_parts();
        assert_eq!(calc.accumulator(), 4);
        assert_eq!(sink.entries(), ["4", "manual"]);
    }

    #[test]
    fn test_press_keys_rejects_unknown_key_before_pressing() {
        let mut driver = EngineDriver::new();
        let result = driver.press_keys("1 2 x");
        assert!(matches!(result, Err(InputError::UnknownKey { .. })));
        assert_eq!(driver.display(), "");
    }

    // ===== Unified verification tests =====

    #[test]
    fn test_unified_chained_arithmetic() {
        verify_chained_arithmetic(&mut EngineDriver::new());
        verify_chained_arithmetic(&mut Calculator::new());
    }

    #[test]
    fn test_unified_operator_substitution() {
        verify_operator_substitution(&mut EngineDriver::new());
    }

    #[test]
    fn test_unified_error_recovery() {
        verify_error_recovery(&mut EngineDriver::new());
    }

    #[test]
    fn test_unified_negation() {
        verify_negation(&mut EngineDriver::new());
    }

    #[test]
    fn test_unified_backspace() {
        verify_backspace(&mut EngineDriver::new());
    }

    #[test]
    fn test_unified_length_limits() {
        verify_length_limits(&mut EngineDriver::new());
    }

    #[test]
    fn test_full_verification() {
        run_full_verification(&mut EngineDriver::new());
        run_full_verification(&mut Calculator::new());
    }
}
