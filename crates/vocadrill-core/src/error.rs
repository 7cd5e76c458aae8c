//! Drill engine error types.
//!
//! A wrong answer is not an error — it is the `Incorrect` state of the
//! tracker. These variants cover the two genuine failure conditions:
//! programmer misuse (bad slot index) and words that cannot be drilled.

use thiserror::Error;

/// Errors that can occur in the blank-generation and scoring engine.
#[derive(Debug, Error)]
pub enum DrillError {
    /// The caller addressed a slot that does not exist.
    #[error("invalid slot index {index} (word has {slots} blanks)")]
    InvalidSlotIndex { index: usize, slots: usize },

    /// The word has no ASCII-alphabetic characters, so nothing can be
    /// blanked. Callers should skip the word rather than present it.
    #[error("word '{0}' has no alphabetic characters to blank")]
    DegenerateWord(String),
}

impl DrillError {
    /// Returns `true` if the word should simply be skipped rather than
    /// treated as a bug.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, DrillError::DegenerateWord(_))
    }
}
