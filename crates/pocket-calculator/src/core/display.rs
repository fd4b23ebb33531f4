//! Display text maintained by trailing-token edits
//!
//! The calculator never re-renders its display from structured state. Every
//! event edits the tail of the existing text, so quirks of earlier edits
//! (an operand left behind after deleting an operator, say) stay visible
//! exactly as the keypad produced them.
//!
//! All lengths are counted in characters, never bytes.

use crate::core::operations::Operation;

/// The calculator's display text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayText(String);

impl DisplayText {
    /// Creates an empty display
    #[must_use]
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Returns the text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if nothing is displayed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the length in characters
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Replaces the whole text
    pub fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }

    /// Appends a single character (a typed digit)
    pub fn push(&mut self, ch: char) {
        self.0.push(ch);
    }

    /// Appends `" {op} "`
    pub fn push_operator(&mut self, op: Operation) {
        self.0.push(' ');
        self.0.push(op.symbol());
        self.0.push(' ');
    }

    /// Swaps the trailing `" {old} "` for `" {op} "`
    pub fn replace_operator(&mut self, op: Operation) {
        self.drop_operator();
        self.push_operator(op);
    }

    /// Removes the trailing `" {op} "`
    pub fn drop_operator(&mut self) {
        self.drop_last(3);
    }

    /// Replaces the trailing run of non-space characters with `operand`
    pub fn replace_operand(&mut self, operand: &str) {
        let keep = self.0.trim_end_matches(|c: char| c != ' ').len();
        self.0.truncate(keep);
        self.0.push_str(operand);
    }

    /// Removes the last character, if any
    pub fn pop(&mut self) {
        self.0.pop();
    }

    /// Removes the last `n` characters (everything if `n` exceeds the length)
    pub fn drop_last(&mut self, n: usize) {
        let keep = self.char_len().saturating_sub(n);
        let end = self
            .0
            .char_indices()
            .nth(keep)
            .map_or(self.0.len(), |(idx, _)| idx);
        self.0.truncate(end);
    }

    /// Returns true if, split on single spaces into at least three segments,
    /// the first or third segment is longer than `limit` characters.
    #[must_use]
    pub fn segments_exceed(&self, limit: usize) -> bool {
        let segments: Vec<&str> = self.0.split(' ').collect();
        segments.len() >= 3
            && (segments[0].chars().count() > limit || segments[2].chars().count() > limit)
    }
}

impl std::fmt::Display for DisplayText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DisplayText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for DisplayText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Returns at most the first `width` characters of `text`
#[must_use]
pub fn truncate_chars(text: &str, width: usize) -> &str {
    text.char_indices()
        .nth(width)
        .map_or(text, |(idx, _)| &text[..idx])
}
