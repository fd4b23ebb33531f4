//! Keypad input: typed key actions and key-sequence parsing
//!
//! Hosts map their buttons or keyboard keys onto [`KeyAction`]s. Named keys
//! follow the physical keypad labels: `C` erases one character, `AC` clears
//! everything.
//!
//! | key | action |
//! |-----|--------|
//! | `0`..`9` | digit |
//! | `+ - * / %` | operator |
//! | `=`, `Enter` | equals |
//! | `±`, `n`, `neg` | negate |
//! | `C`, `c`, `<`, `Backspace` | backspace |
//! | `AC`, `ac`, `Escape` | clear |

use thiserror::Error;

use crate::core::Operation;

/// Errors raised while mapping host input to key actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A key inside `token` has no action
    #[error("unknown key '{key}' in '{token}'")]
    UnknownKey {
        /// The unrecognized key
        key: String,
        /// The whitespace-separated token it appeared in
        token: String,
    },

    /// A digit value above 9
    #[error("digit out of range: {0}")]
    DigitOutOfRange(u8),
}

/// A decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, `None` above 9
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parses an ASCII digit character
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Self(d as u8))
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InputError::DigitOutOfRange(value))
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One calculator input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Type a digit
    Digit(Digit),
    /// Select an operator
    Operator(Operation),
    /// Apply the pending operator (`=`)
    Equals,
    /// Toggle the sign of the operand being typed
    Negate,
    /// Erase the last character or pending operator
    Backspace,
    /// Reset everything
    Clear,
}

impl KeyAction {
    /// Returns the keypad label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operator(op) => op.to_string(),
            Self::Equals => "=".to_string(),
            Self::Negate => "±".to_string(),
            Self::Backspace => "C".to_string(),
            Self::Clear => "AC".to_string(),
        }
    }

    /// Maps a single named key to its action
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "=" | "Enter" => Some(Self::Equals),
            "±" | "n" | "neg" => Some(Self::Negate),
            "C" | "c" | "<" | "Backspace" => Some(Self::Backspace),
            "AC" | "ac" | "Escape" => Some(Self::Clear),
            _ => {
                let mut chars = key.chars();
                let (Some(ch), None) = (chars.next(), chars.next()) else {
                    return None;
                };
                Digit::from_char(ch)
                    .map(Self::Digit)
                    .or_else(|| Operation::from_symbol(ch).map(Self::Operator))
            }
        }
    }
}

/// Parses a key sequence.
///
/// The input is split on whitespace; each token is either a named key
/// (`AC`, `Enter`, `neg`, ...) or a run of single-character keys, so
/// `"12+3="` and `"1 2 + 3 Enter"` parse to the same actions.
pub fn parse_keys(input: &str) -> Result<Vec<KeyAction>, InputError> {
    let mut actions = Vec::new();
    for token in input.split_whitespace() {
        if let Some(action) = KeyAction::from_key(token) {
            actions.push(action);
            continue;
        }
        for ch in token.chars() {
            let mut buf = [0u8; 4];
            let key: &str = ch.encode_utf8(&mut buf);
            let action = KeyAction::from_key(key).ok_or_else(|| InputError::UnknownKey {
                key: key.to_string(),
                token: token.to_string(),
            })?;
            actions.push(action);
        }
    }
    Ok(actions)
}
