//! Pending operators and the integer arithmetic they apply
//!
//! Division and remainder truncate toward zero, so the remainder's sign
//! follows the dividend.

use crate::core::{CalcError, CalcResult};

/// Operator awaiting its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Truncating division (/)
    Divide,
    /// Truncated remainder (%)
    Modulo,
}

impl Operation {
    /// Every operator, in keypad order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
    ];

    /// Returns the single-character code used on the display and in snapshots
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
        }
    }

    /// Parses a single-character operator code
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            _ => None,
        }
    }

    /// Folds `rhs` into `lhs`, wrapping on `i64` overflow.
    ///
    /// Returns [`CalcError::DivideByZero`] or [`CalcError::ModuloByZero`]
    /// when `rhs` is zero for `/` or `%`.
    pub fn apply(self, lhs: i64, rhs: i64) -> CalcResult<i64> {
        match self {
            Self::Add => Ok(lhs.wrapping_add(rhs)),
            Self::Subtract => Ok(lhs.wrapping_sub(rhs)),
            Self::Multiply => Ok(lhs.wrapping_mul(rhs)),
            Self::Divide => {
                if rhs == 0 {
                    return Err(CalcError::DivideByZero);
                }
                Ok(lhs.wrapping_div(rhs))
            }
            Self::Modulo => {
                if rhs == 0 {
                    return Err(CalcError::ModuloByZero);
                }
                Ok(lhs.wrapping_rem(rhs))
            }
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
