//! Per-word answer tracking state machine.
//!
//! One [`AnswerTracker`] lives per presented word. The hosting layer feeds
//! it keystroke-level events and performs focus/rendering side effects
//! itself based on the returned [`InputEffect`]. The machine never raises
//! on state-rule violations — events that arrive in the wrong state are
//! ignored. The one hard error is an out-of-range slot index, which is a
//! caller bug and surfaces immediately as [`DrillError::InvalidSlotIndex`].

use std::time::Duration;

use crate::blanks::BlankSpec;
use crate::error::DrillError;

/// How long a `Correct` verdict is held before the caller advances to the
/// next word. Owed to the UI, not to correctness.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// Tracker lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillState {
    /// Accepting input; no verdict shown.
    Editing,
    /// All slots matched. Terminal; the caller advances after
    /// [`ADVANCE_DELAY`].
    Correct,
    /// At least one slot mismatched. Any input returns to `Editing`.
    Incorrect,
    /// The answer was shown. Terminal until the next word is set up.
    Revealed,
}

/// Focus guidance returned from input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEffect {
    /// The slot was updated; keep focus where it is.
    Stay,
    /// The slot was updated; move focus to this slot.
    AdvanceTo(usize),
    /// An erase hit an already-empty slot; move focus back to this slot.
    RetreatTo(usize),
    /// The tracker is in a terminal state and the event was dropped.
    Ignored,
}

/// Verdict of a check event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Correct,
    /// The lowest-index wrong slot, so the caller can focus it.
    Incorrect { first_mismatch: usize },
}

/// The answer-validation state machine for one word.
#[derive(Debug, Clone)]
pub struct AnswerTracker {
    spec: BlankSpec,
    slots: Vec<Option<char>>,
    state: DrillState,
}

impl AnswerTracker {
    /// Setup event: a fresh tracker with all slots empty.
    pub fn new(spec: BlankSpec) -> Self {
        let slots = vec![None; spec.blank_count()];
        Self {
            spec,
            slots,
            state: DrillState::Editing,
        }
    }

    pub fn state(&self) -> DrillState {
        self.state
    }

    pub fn spec(&self) -> &BlankSpec {
        &self.spec
    }

    /// Current slot contents in slot order.
    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// Returns `true` once every slot holds a character.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }

    fn ensure_slot(&self, slot: usize) -> Result<(), DrillError> {
        if slot >= self.slots.len() {
            return Err(DrillError::InvalidSlotIndex {
                index: slot,
                slots: self.slots.len(),
            });
        }
        Ok(())
    }

    /// Input event: store one character in a slot.
    ///
    /// Multi-character input is truncated to its final character (last
    /// keystroke wins) and normalized to lowercase. Any pending verdict is
    /// cleared back to `Editing`. Ignored in `Correct`/`Revealed`.
    pub fn input(&mut self, slot: usize, text: &str) -> Result<InputEffect, DrillError> {
        self.ensure_slot(slot)?;

        if matches!(self.state, DrillState::Correct | DrillState::Revealed) {
            return Ok(InputEffect::Ignored);
        }

        let ch = text.chars().last().map(|c| c.to_ascii_lowercase());
        self.slots[slot] = ch;
        self.state = DrillState::Editing;

        if ch.is_some() && slot + 1 < self.slots.len() {
            Ok(InputEffect::AdvanceTo(slot + 1))
        } else {
            Ok(InputEffect::Stay)
        }
    }

    /// Erase event (backspace): clear a slot, or move focus back when the
    /// slot is already empty. Ignored in `Correct`/`Revealed`.
    pub fn erase(&mut self, slot: usize) -> Result<InputEffect, DrillError> {
        self.ensure_slot(slot)?;

        if matches!(self.state, DrillState::Correct | DrillState::Revealed) {
            return Ok(InputEffect::Ignored);
        }

        if self.slots[slot].is_none() {
            self.state = DrillState::Editing;
            return Ok(if slot > 0 {
                InputEffect::RetreatTo(slot - 1)
            } else {
                InputEffect::Stay
            });
        }

        self.slots[slot] = None;
        self.state = DrillState::Editing;
        Ok(InputEffect::Stay)
    }

    /// Check event: compare every slot against the true letters.
    ///
    /// Returns `None` (no-op) unless all slots are filled and the tracker
    /// is in `Editing` or `Incorrect`. Comparison is position-for-position
    /// against the lowercased source letters; all must match. On failure
    /// the slots are left in place so the user can edit.
    pub fn check(&mut self) -> Option<CheckOutcome> {
        if matches!(self.state, DrillState::Correct | DrillState::Revealed) {
            return None;
        }
        if !self.is_complete() {
            return None;
        }

        let first_mismatch = (0..self.slots.len())
            .find(|&i| self.slots[i] != Some(self.spec.answer_at(i)));

        match first_mismatch {
            None => {
                self.state = DrillState::Correct;
                Some(CheckOutcome::Correct)
            }
            Some(i) => {
                self.state = DrillState::Incorrect;
                Some(CheckOutcome::Incorrect { first_mismatch: i })
            }
        }
    }

    /// Reveal event: fill every slot with its true letter and freeze.
    ///
    /// Allowed from `Editing` and `Incorrect`; a no-op once `Correct`
    /// (there is nothing left to reveal) and idempotent in `Revealed`.
    pub fn reveal(&mut self) -> &[Option<char>] {
        match self.state {
            DrillState::Correct => {}
            DrillState::Editing | DrillState::Incorrect | DrillState::Revealed => {
                for slot in 0..self.slots.len() {
                    self.slots[slot] = Some(self.spec.answer_at(slot));
                }
                self.state = DrillState::Revealed;
            }
        }
        &self.slots
    }
}
