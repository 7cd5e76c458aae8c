//! Core data model types for vocadrill.
//!
//! These are the fundamental types the whole system uses to represent
//! vocabulary entries and word sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single English/Vietnamese vocabulary pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// The English word — the drill target.
    pub english: String,
    /// The Vietnamese meaning shown as the hint.
    pub vietnamese: String,
    /// IPA transcription, when available.
    #[serde(default)]
    pub ipa: Option<String>,
    /// Part of speech (e.g. "noun", "verb").
    #[serde(default, rename = "type")]
    pub word_type: Option<String>,
}

impl Word {
    pub fn new(english: &str, vietnamese: &str) -> Self {
        Self {
            english: english.to_string(),
            vietnamese: vietnamese.to_string(),
            ipa: None,
            word_type: None,
        }
    }

    /// Returns `true` if the english field has at least one ASCII letter,
    /// i.e. the word can be presented as a missing-letters drill.
    pub fn is_drillable(&self) -> bool {
        self.english.chars().any(|c| c.is_ascii_alphabetic())
    }
}

/// A named collection of words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSet {
    /// Unique identifier for this word set.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of this word set.
    #[serde(default)]
    pub description: String,
    /// The words in this set.
    #[serde(default)]
    pub words: Vec<Word>,
    /// Default fraction of characters to blank out.
    #[serde(default = "default_ratio")]
    pub default_ratio: f64,
}

fn default_ratio() -> f64 {
    crate::blanks::DEFAULT_BLANK_RATIO
}

/// The practice modes the application offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrillMode {
    Flashcards,
    FillBlank,
    MissingLetters,
}

impl fmt::Display for DrillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrillMode::Flashcards => write!(f, "flashcards"),
            DrillMode::FillBlank => write!(f, "fill-blank"),
            DrillMode::MissingLetters => write!(f, "missing-letters"),
        }
    }
}

impl FromStr for DrillMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flashcards" | "cards" => Ok(DrillMode::Flashcards),
            "fill-blank" | "fill" => Ok(DrillMode::FillBlank),
            "missing-letters" | "letters" => Ok(DrillMode::MissingLetters),
            other => Err(format!("unknown drill mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drill_mode_display_and_parse() {
        assert_eq!(DrillMode::MissingLetters.to_string(), "missing-letters");
        assert_eq!(DrillMode::Flashcards.to_string(), "flashcards");
        assert_eq!(
            "missing-letters".parse::<DrillMode>().unwrap(),
            DrillMode::MissingLetters
        );
        assert_eq!("letters".parse::<DrillMode>().unwrap(), DrillMode::MissingLetters);
        assert_eq!("Fill-Blank".parse::<DrillMode>().unwrap(), DrillMode::FillBlank);
        assert!("karaoke".parse::<DrillMode>().is_err());
    }

    #[test]
    fn drillable_words() {
        assert!(Word::new("hello", "xin chào").is_drillable());
        assert!(Word::new("a1!", "?").is_drillable());
        assert!(!Word::new("123", "?").is_drillable());
        assert!(!Word::new("", "?").is_drillable());
    }

    #[test]
    fn word_serde_roundtrip() {
        let word = Word {
            english: "hello".into(),
            vietnamese: "xin chào".into(),
            ipa: Some("/həˈloʊ/".into()),
            word_type: Some("interjection".into()),
        };
        let json = serde_json::to_string(&word).unwrap();
        // The part-of-speech field keeps the original API's name on the wire.
        assert!(json.contains("\"type\""));
        let deserialized: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.english, "hello");
        assert_eq!(deserialized.word_type.as_deref(), Some("interjection"));
    }

    #[test]
    fn word_set_default_ratio() {
        let json = r#"{"id": "s", "name": "S", "words": []}"#;
        let set: WordSet = serde_json::from_str(json).unwrap();
        assert!((set.default_ratio - 0.4).abs() < f64::EPSILON);
    }
}
