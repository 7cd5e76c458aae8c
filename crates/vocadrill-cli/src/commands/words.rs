//! The `vocadrill words` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use vocadrill_providers::config::{create_word_source, load_config_from, SourceConfig};

pub async fn execute(words_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let source = match words_path {
        Some(path) => create_word_source(&SourceConfig::File { path }),
        None => create_word_source(&config.source),
    };

    let words = source.fetch_words().await?;

    let mut table = Table::new();
    table.set_header(vec!["English", "Vietnamese", "IPA", "Type"]);
    for word in &words {
        table.add_row(vec![
            Cell::new(&word.english),
            Cell::new(&word.vietnamese),
            Cell::new(word.ipa.as_deref().unwrap_or("-")),
            Cell::new(word.word_type.as_deref().unwrap_or("-")),
        ]);
    }

    println!("{table}");
    println!("{} word(s) from source '{}'.", words.len(), source.name());

    Ok(())
}
