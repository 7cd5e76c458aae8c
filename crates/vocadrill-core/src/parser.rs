//! TOML word-set parser.
//!
//! Loads word sets from TOML files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::blanks::DEFAULT_BLANK_RATIO;
use crate::model::{Word, WordSet};

/// Intermediate TOML structure for parsing word-set files.
#[derive(Debug, Deserialize)]
struct TomlWordFile {
    word_set: TomlWordSetHeader,
    #[serde(default)]
    words: Vec<TomlWord>,
}

#[derive(Debug, Deserialize)]
struct TomlWordSetHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_ratio")]
    default_ratio: f64,
}

fn default_ratio() -> f64 {
    DEFAULT_BLANK_RATIO
}

#[derive(Debug, Deserialize)]
struct TomlWord {
    english: String,
    vietnamese: String,
    #[serde(default)]
    ipa: Option<String>,
    #[serde(default, rename = "type")]
    word_type: Option<String>,
}

/// Parse a single TOML file into a `WordSet`.
pub fn parse_word_set(path: &Path) -> Result<WordSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word set file: {}", path.display()))?;

    parse_word_set_str(&content, path)
}

/// Parse a TOML string into a `WordSet` (useful for testing).
pub fn parse_word_set_str(content: &str, source_path: &Path) -> Result<WordSet> {
    let parsed: TomlWordFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let words = parsed
        .words
        .into_iter()
        .map(|w| Word {
            english: w.english,
            vietnamese: w.vietnamese,
            ipa: w.ipa,
            word_type: w.word_type,
        })
        .collect();

    Ok(WordSet {
        id: parsed.word_set.id,
        name: parsed.word_set.name,
        description: parsed.word_set.description,
        words,
        default_ratio: parsed.word_set.default_ratio,
    })
}

/// Recursively load all `.toml` word-set files from a directory.
pub fn load_word_directory(dir: &Path) -> Result<Vec<WordSet>> {
    let mut sets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            sets.extend(load_word_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_word_set(&path) {
                Ok(set) => sets.push(set),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(sets)
}

/// A warning from word-set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The offending english entry, if applicable.
    pub english: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a word set for common issues.
pub fn validate_word_set(set: &WordSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if !(0.0..=1.0).contains(&set.default_ratio) || set.default_ratio == 0.0 {
        warnings.push(ValidationWarning {
            english: None,
            message: format!(
                "default_ratio {} is outside (0, 1]",
                set.default_ratio
            ),
        });
    }

    // Check for duplicate english entries (case-insensitive)
    let mut seen = std::collections::HashSet::new();
    for word in &set.words {
        if !seen.insert(word.english.to_lowercase()) {
            warnings.push(ValidationWarning {
                english: Some(word.english.clone()),
                message: format!("duplicate entry: {}", word.english),
            });
        }
    }

    for word in &set.words {
        if word.english.trim().is_empty() {
            warnings.push(ValidationWarning {
                english: Some(word.english.clone()),
                message: "english is empty".into(),
            });
        } else if !word.is_drillable() {
            warnings.push(ValidationWarning {
                english: Some(word.english.clone()),
                message: format!(
                    "'{}' has no alphabetic characters and will be skipped in drills",
                    word.english
                ),
            });
        }

        if word.vietnamese.trim().is_empty() {
            warnings.push(ValidationWarning {
                english: Some(word.english.clone()),
                message: format!("'{}' has no vietnamese meaning", word.english),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[word_set]
id = "animals"
name = "Animals"
description = "Common animal names"
default_ratio = 0.4

[[words]]
english = "cat"
vietnamese = "mèo"
ipa = "/kæt/"
type = "noun"

[[words]]
english = "dog"
vietnamese = "chó"
"#;

    #[test]
    fn parse_valid_toml() {
        let set = parse_word_set_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(set.id, "animals");
        assert_eq!(set.name, "Animals");
        assert_eq!(set.words.len(), 2);
        assert_eq!(set.words[0].english, "cat");
        assert_eq!(set.words[0].ipa.as_deref(), Some("/kæt/"));
        assert_eq!(set.words[0].word_type.as_deref(), Some("noun"));
        assert!(set.words[1].ipa.is_none());
    }

    #[test]
    fn parse_missing_optional_fields() {
        let toml = r#"
[word_set]
id = "minimal"
name = "Minimal"

[[words]]
english = "hello"
vietnamese = "xin chào"
"#;
        let set = parse_word_set_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert!((set.default_ratio - 0.4).abs() < f64::EPSILON);
        assert!(set.description.is_empty());
    }

    #[test]
    fn validate_duplicates() {
        let toml = r#"
[word_set]
id = "dupes"
name = "Dupes"

[[words]]
english = "Cat"
vietnamese = "mèo"

[[words]]
english = "cat"
vietnamese = "mèo"
"#;
        let set = parse_word_set_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_word_set(&set);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_undrillable_word() {
        let toml = r#"
[word_set]
id = "nums"
name = "Nums"

[[words]]
english = "123"
vietnamese = "một hai ba"
"#;
        let set = parse_word_set_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_word_set(&set);
        assert!(warnings.iter().any(|w| w.message.contains("skipped")));
    }

    #[test]
    fn validate_bad_ratio() {
        let toml = r#"
[word_set]
id = "r"
name = "R"
default_ratio = 1.5
"#;
        let set = parse_word_set_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_word_set(&set);
        assert!(warnings.iter().any(|w| w.message.contains("outside")));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_word_set_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("animals.toml");
        std::fs::write(&file_path, VALID_TOML).unwrap();

        let sets = load_word_directory(dir.path()).unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].id, "animals");
    }
}
