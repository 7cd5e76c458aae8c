//! Per-word outcomes and aggregate session statistics.

use serde::{Deserialize, Serialize};

/// What happened with one presented word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordOutcome {
    /// The drilled english word.
    pub english: String,
    /// Number of completed check events.
    pub checks: usize,
    /// Checks that came back incorrect.
    pub incorrect_checks: usize,
    /// The word was solved (a check succeeded).
    pub solved: bool,
    /// The answer was revealed instead.
    pub revealed: bool,
}

impl WordOutcome {
    pub fn new(english: &str) -> Self {
        Self {
            english: english.to_string(),
            checks: 0,
            incorrect_checks: 0,
            solved: false,
            revealed: false,
        }
    }

    /// Solved on the very first check, with no reveal.
    pub fn first_try(&self) -> bool {
        self.solved && !self.revealed && self.incorrect_checks == 0
    }
}

/// Aggregate statistics over a drill session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Words presented to the user.
    pub presented: usize,
    /// Words solved by a successful check.
    pub solved: usize,
    /// Words where the answer was revealed.
    pub revealed: usize,
    /// Words skipped (including degenerate words).
    pub skipped: usize,
    /// Words solved on the first check.
    pub first_try: usize,
    /// Fraction of check events that succeeded, in [0, 1].
    pub check_accuracy: f64,
}

/// Compute aggregate statistics from per-word outcomes.
pub fn compute_session_stats(outcomes: &[WordOutcome]) -> SessionStats {
    let presented = outcomes.len();
    let solved = outcomes.iter().filter(|o| o.solved).count();
    let revealed = outcomes.iter().filter(|o| o.revealed).count();
    let skipped = outcomes
        .iter()
        .filter(|o| !o.solved && !o.revealed)
        .count();
    let first_try = outcomes.iter().filter(|o| o.first_try()).count();

    let total_checks: usize = outcomes.iter().map(|o| o.checks).sum();
    let incorrect_checks: usize = outcomes.iter().map(|o| o.incorrect_checks).sum();
    let check_accuracy = if total_checks == 0 {
        0.0
    } else {
        (total_checks - incorrect_checks) as f64 / total_checks as f64
    };

    SessionStats {
        presented,
        solved,
        revealed,
        skipped,
        first_try,
        check_accuracy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(english: &str, checks: usize, incorrect: usize, solved: bool, revealed: bool) -> WordOutcome {
        WordOutcome {
            english: english.into(),
            checks,
            incorrect_checks: incorrect,
            solved,
            revealed,
        }
    }

    #[test]
    fn empty_session() {
        let stats = compute_session_stats(&[]);
        assert_eq!(stats.presented, 0);
        assert_eq!(stats.check_accuracy, 0.0);
    }

    #[test]
    fn mixed_session() {
        let outcomes = vec![
            outcome("hello", 1, 0, true, false),
            outcome("world", 3, 2, true, false),
            outcome("cat", 1, 1, false, true),
            outcome("dog", 0, 0, false, false),
        ];
        let stats = compute_session_stats(&outcomes);
        assert_eq!(stats.presented, 4);
        assert_eq!(stats.solved, 2);
        assert_eq!(stats.revealed, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.first_try, 1);
        // 5 checks, 3 incorrect.
        assert!((stats.check_accuracy - 0.4).abs() < 1e-9);
    }

    #[test]
    fn first_try_requires_clean_solve() {
        assert!(outcome("a", 1, 0, true, false).first_try());
        assert!(!outcome("a", 2, 1, true, false).first_try());
        assert!(!outcome("a", 0, 0, false, true).first_try());
    }
}
