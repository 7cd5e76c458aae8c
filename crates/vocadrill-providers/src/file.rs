//! Word source backed by local TOML word-set files.

use std::path::PathBuf;

use async_trait::async_trait;

use vocadrill_core::model::Word;
use vocadrill_core::parser::{load_word_directory, parse_word_set};
use vocadrill_core::traits::WordSource;

/// Word source reading one `.toml` word-set file, or every word set in a
/// directory tree.
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WordSource for FileWordSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch_words(&self) -> anyhow::Result<Vec<Word>> {
        if self.path.is_dir() {
            let sets = load_word_directory(&self.path)?;
            Ok(sets.into_iter().flat_map(|s| s.words).collect())
        } else {
            Ok(parse_word_set(&self.path)?.words)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SET_A: &str = r#"
[word_set]
id = "a"
name = "A"

[[words]]
english = "cat"
vietnamese = "mèo"
"#;

    const SET_B: &str = r#"
[word_set]
id = "b"
name = "B"

[[words]]
english = "dog"
vietnamese = "chó"

[[words]]
english = "bird"
vietnamese = "chim"
"#;

    #[tokio::test]
    async fn reads_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.toml");
        std::fs::write(&path, SET_A).unwrap();

        let words = FileWordSource::new(path).fetch_words().await.unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].english, "cat");
    }

    #[tokio::test]
    async fn flattens_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.toml"), SET_A).unwrap();
        std::fs::write(dir.path().join("b.toml"), SET_B).unwrap();

        let words = FileWordSource::new(dir.path())
            .fetch_words()
            .await
            .unwrap();
        assert_eq!(words.len(), 3);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let result = FileWordSource::new("no-such-file.toml").fetch_words().await;
        assert!(result.is_err());
    }
}
