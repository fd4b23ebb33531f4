//! Flat state snapshot for host save/restore
//!
//! The snapshot carries exactly the five engine fields. Its JSON form uses
//! camelCase keys:
//!
//! ```json
//! {"displayText":"5 + ","currentNumber":"","lastOperation":"+","result":5,"isError":false}
//! ```
//!
//! Missing keys fall back to their defaults, so a partial snapshot restores
//! a partially reset engine rather than failing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Operation;

/// Errors raised while encoding, decoding or restoring a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// JSON encoding or decoding failed
    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The stored operator code is not one of `+ - * / %`
    #[error("unknown operator code '{0}' in snapshot")]
    UnknownOperator(char),
}

/// The five engine fields, verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    /// Display text (the latched message while an error is set)
    pub display_text: String,
    /// Operand being typed
    pub current_number: String,
    /// Pending operator code, `None` when nothing is pending
    pub last_operation: Option<char>,
    /// Accumulator
    pub result: i64,
    /// Whether an error is latched
    pub is_error: bool,
}

impl Snapshot {
    /// Decodes the pending operator.
    ///
    /// A blank code reads as "no operator" for hosts that store a space
    /// instead of omitting the field.
    pub fn pending_operation(&self) -> Result<Option<Operation>, SnapshotError> {
        match self.last_operation {
            None | Some(' ') => Ok(None),
            Some(code) => Operation::from_symbol(code)
                .map(Some)
                .ok_or(SnapshotError::UnknownOperator(code)),
        }
    }

    /// Serializes to compact JSON
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes to indented JSON
    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes from JSON
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}
