//! Drill session orchestration.
//!
//! A [`DrillSession`] owns the word list and navigation index and hands the
//! answer tracker one word at a time. Everything here is single-threaded
//! and event-driven: each call runs to completion, and exactly one word is
//! active at any moment. Blank selection re-runs on every setup, so a word
//! presented twice gets two different patterns.

use std::time::Duration;

use rand::rngs::SmallRng;

use crate::blanks::{select_blanks, DEFAULT_BLANK_RATIO};
use crate::drill::{AnswerTracker, CheckOutcome, InputEffect, ADVANCE_DELAY};
use crate::error::DrillError;
use crate::model::Word;
use crate::statistics::WordOutcome;

/// Session-level configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Fraction of characters to blank per word.
    pub ratio: f64,
    /// Shuffle the word list once at session start.
    pub shuffle: bool,
    /// How long a correct verdict is held before advancing.
    pub advance_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_BLANK_RATIO,
            shuffle: true,
            advance_delay: ADVANCE_DELAY,
        }
    }
}

/// Orchestrates one missing-letters practice run over a word list.
pub struct DrillSession {
    words: Vec<Word>,
    index: usize,
    tracker: Option<AnswerTracker>,
    outcome: Option<WordOutcome>,
    outcomes: Vec<WordOutcome>,
    config: SessionConfig,
    rng: SmallRng,
}

impl DrillSession {
    /// Create a session and set up the first drillable word.
    ///
    /// Degenerate words (no ASCII letters) are skipped with a warning. If
    /// every word is degenerate the session starts with no active word.
    pub fn new(mut words: Vec<Word>, config: SessionConfig, mut rng: SmallRng) -> Self {
        if config.shuffle {
            use rand::seq::SliceRandom;
            words.shuffle(&mut rng);
        }

        let mut session = Self {
            words,
            index: 0,
            tracker: None,
            outcome: None,
            outcomes: Vec::new(),
            config,
            rng,
        };
        session.setup_from(0);
        session
    }

    /// The word currently being drilled.
    pub fn current_word(&self) -> Option<&Word> {
        self.tracker.as_ref().map(|_| &self.words[self.index])
    }

    /// The active answer tracker.
    pub fn tracker(&self) -> Option<&AnswerTracker> {
        self.tracker.as_ref()
    }

    /// Total words in the (possibly shuffled) list.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Zero-based position of the current word in the list.
    pub fn position(&self) -> usize {
        self.index
    }

    /// The configured hold time after a correct answer.
    pub fn advance_delay(&self) -> Duration {
        self.config.advance_delay
    }

    /// Forward an input event to the active tracker.
    pub fn input(&mut self, slot: usize, text: &str) -> Result<InputEffect, DrillError> {
        match self.tracker.as_mut() {
            Some(t) => t.input(slot, text),
            None => Ok(InputEffect::Ignored),
        }
    }

    /// Forward an erase event to the active tracker.
    pub fn erase(&mut self, slot: usize) -> Result<InputEffect, DrillError> {
        match self.tracker.as_mut() {
            Some(t) => t.erase(slot),
            None => Ok(InputEffect::Ignored),
        }
    }

    /// Run a check event and record the outcome in the session statistics.
    pub fn check(&mut self) -> Option<CheckOutcome> {
        let verdict = self.tracker.as_mut()?.check()?;
        if let Some(outcome) = self.outcome.as_mut() {
            outcome.checks += 1;
            match verdict {
                CheckOutcome::Correct => outcome.solved = true,
                CheckOutcome::Incorrect { .. } => outcome.incorrect_checks += 1,
            }
        }
        Some(verdict)
    }

    /// Reveal the current answer and record it.
    pub fn reveal(&mut self) -> Option<Vec<Option<char>>> {
        let tracker = self.tracker.as_mut()?;
        let before = tracker.state();
        let slots = tracker.reveal().to_vec();
        if tracker.state() == crate::drill::DrillState::Revealed
            && before != crate::drill::DrillState::Revealed
        {
            if let Some(outcome) = self.outcome.as_mut() {
                outcome.revealed = true;
            }
        }
        Some(slots)
    }

    /// Close out the current word and set up the next one, wrapping around
    /// at the end of the list (the session never runs out of words on its
    /// own; the host decides when to stop).
    pub fn advance(&mut self) {
        if let Some(outcome) = self.outcome.take() {
            self.outcomes.push(outcome);
        }
        self.tracker = None;
        if self.words.is_empty() {
            return;
        }
        let next = (self.index + 1) % self.words.len();
        self.setup_from(next);
    }

    /// Return every recorded outcome. A pending word the user never
    /// interacted with is dropped rather than counted as presented.
    pub fn finish(mut self) -> Vec<WordOutcome> {
        if let Some(outcome) = self.outcome.take() {
            if outcome.checks > 0 || outcome.solved || outcome.revealed {
                self.outcomes.push(outcome);
            }
        }
        self.outcomes
    }

    /// Set up the first drillable word at or after `start`, trying each
    /// word at most once.
    fn setup_from(&mut self, start: usize) {
        if self.words.is_empty() {
            return;
        }
        for offset in 0..self.words.len() {
            let idx = (start + offset) % self.words.len();
            let word = &self.words[idx];
            match select_blanks(&word.english, self.config.ratio, &mut self.rng) {
                Ok(spec) => {
                    self.index = idx;
                    self.outcome = Some(WordOutcome::new(&word.english));
                    self.tracker = Some(AnswerTracker::new(spec));
                    return;
                }
                Err(e) => {
                    tracing::warn!("skipping undrillable word '{}': {e}", word.english);
                }
            }
        }
        self.tracker = None;
        self.outcome = None;
    }
}
