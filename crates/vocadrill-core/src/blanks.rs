//! Blank selection for the missing-letters drill.
//!
//! Given a target word, picks a ratio-sized subset of its alphabetic
//! character positions to hide. The shuffle runs on every call, so the
//! same word gets a different blank pattern each time it is presented —
//! that variety is intentional for repeated practice. The random source
//! is injected so tests can pin down exact patterns.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::DrillError;

/// Default fraction of a word's characters to blank out.
pub const DEFAULT_BLANK_RATIO: f64 = 0.4;

/// The derived blanking plan for one word.
///
/// Positions are char indices into the word, not byte offsets, so words
/// containing multi-byte characters index cleanly. Only ASCII letters are
/// ever blanked; punctuation, digits, and accented characters stay visible.
#[derive(Debug, Clone)]
pub struct BlankSpec {
    word: String,
    chars: Vec<char>,
    display: Vec<Option<char>>,
    blank_positions: Vec<usize>,
}

impl BlankSpec {
    /// The source word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The display sequence: `Some(c)` for static characters, `None` for
    /// blanks, in word order.
    pub fn display(&self) -> &[Option<char>] {
        &self.display
    }

    /// Char indices of the blanked positions, strictly increasing.
    pub fn blank_positions(&self) -> &[usize] {
        &self.blank_positions
    }

    /// Number of answer slots.
    pub fn blank_count(&self) -> usize {
        self.blank_positions.len()
    }

    /// The correct (lowercased) letter for a slot.
    ///
    /// # Panics
    /// Panics if `slot` is out of range; callers go through
    /// [`crate::drill::AnswerTracker`] which validates slot indices first.
    pub fn answer_at(&self, slot: usize) -> char {
        let pos = self.blank_positions[slot];
        self.chars[pos].to_ascii_lowercase()
    }

    /// All correct letters in slot order.
    pub fn answers(&self) -> Vec<char> {
        (0..self.blank_count()).map(|s| self.answer_at(s)).collect()
    }

    /// Rebuild the original word by filling the blanks back in with their
    /// true characters. Used to verify the display round-trips.
    pub fn reconstruct(&self) -> String {
        self.display
            .iter()
            .enumerate()
            .map(|(i, c)| c.unwrap_or(self.chars[i]))
            .collect()
    }
}

/// Choose which characters of `word` to hide.
///
/// The target blank count is `max(1, floor(char_count * ratio))`, clamped
/// to the number of eligible (ASCII-alphabetic) positions. Returns
/// [`DrillError::DegenerateWord`] when nothing is eligible; callers skip
/// such words.
pub fn select_blanks<R: Rng>(
    word: &str,
    ratio: f64,
    rng: &mut R,
) -> Result<BlankSpec, DrillError> {
    let chars: Vec<char> = word.chars().collect();

    let mut eligible: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .collect();

    if eligible.is_empty() {
        return Err(DrillError::DegenerateWord(word.to_string()));
    }

    eligible.shuffle(rng);

    let target = ((chars.len() as f64 * ratio).floor() as usize).max(1);
    let count = target.min(eligible.len());

    let mut blank_positions: Vec<usize> = eligible[..count].to_vec();
    blank_positions.sort_unstable();

    let display: Vec<Option<char>> = chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if blank_positions.binary_search(&i).is_ok() {
                None
            } else {
                Some(c)
            }
        })
        .collect();

    Ok(BlankSpec {
        word: word.to_string(),
        chars,
        display,
        blank_positions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn hello_gets_two_blanks_at_default_ratio() {
        // 5 chars * 0.4 = 2.0 -> exactly 2 blanks
        let spec = select_blanks("Hello", DEFAULT_BLANK_RATIO, &mut rng()).unwrap();
        assert_eq!(spec.blank_count(), 2);
    }

    #[test]
    fn at_least_one_blank_for_short_words() {
        let spec = select_blanks("a", 0.1, &mut rng()).unwrap();
        assert_eq!(spec.blank_count(), 1);
        assert_eq!(spec.blank_positions(), &[0]);
    }

    #[test]
    fn only_letters_are_blanked() {
        let word = "well-known word!";
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let spec = select_blanks(word, 0.8, &mut rng).unwrap();
            let chars: Vec<char> = word.chars().collect();
            for &pos in spec.blank_positions() {
                assert!(
                    chars[pos].is_ascii_alphabetic(),
                    "blanked non-letter at {pos} with seed {seed}"
                );
            }
        }
    }

    #[test]
    fn positions_strictly_increasing() {
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let spec = select_blanks("vocabulary", 0.6, &mut rng).unwrap();
            let positions = spec.blank_positions();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "seed {seed}");
        }
    }

    #[test]
    fn display_round_trips() {
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let spec = select_blanks("Extraordinary!", 0.5, &mut rng).unwrap();
            assert_eq!(spec.reconstruct(), "Extraordinary!");
        }
    }

    #[test]
    fn blank_count_bounded_by_eligible_letters() {
        // 10 chars but only 4 letters: floor(10 * 0.9) = 9 clamps to 4.
        let spec = select_blanks("a b c d   ", 0.9, &mut rng()).unwrap();
        assert_eq!(spec.blank_count(), 4);
    }

    #[test]
    fn degenerate_words_are_rejected() {
        assert!(matches!(
            select_blanks("", 0.4, &mut rng()),
            Err(DrillError::DegenerateWord(_))
        ));
        assert!(matches!(
            select_blanks("123 !?", 0.4, &mut rng()),
            Err(DrillError::DegenerateWord(_))
        ));
    }

    #[test]
    fn answers_are_lowercased() {
        let spec = select_blanks("ABC", 1.0, &mut rng()).unwrap();
        assert_eq!(spec.answers(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn non_ascii_letters_stay_static() {
        // Accented characters are not in [a-zA-Z] and never blank.
        let word = "café";
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let spec = select_blanks(word, 1.0, &mut rng).unwrap();
            assert!(!spec.blank_positions().contains(&3), "seed {seed}");
            assert_eq!(spec.display()[3], Some('é'));
        }
    }

    #[test]
    fn same_seed_same_pattern() {
        let a = select_blanks("deterministic", 0.4, &mut SmallRng::seed_from_u64(7)).unwrap();
        let b = select_blanks("deterministic", 0.4, &mut SmallRng::seed_from_u64(7)).unwrap();
        assert_eq!(a.blank_positions(), b.blank_positions());
    }

    #[test]
    fn patterns_vary_across_calls() {
        // Not a fixed prefix: over many re-shuffles every letter position
        // of the word should get blanked at least once.
        let word = "variety";
        let mut rng = rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let spec = select_blanks(word, 0.4, &mut rng).unwrap();
            seen.extend(spec.blank_positions().iter().copied());
        }
        assert_eq!(seen.len(), word.len());
    }
}
