//! The `vocadrill validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(words_path: PathBuf) -> Result<()> {
    let sets = if words_path.is_dir() {
        vocadrill_core::parser::load_word_directory(&words_path)?
    } else {
        vec![vocadrill_core::parser::parse_word_set(&words_path)?]
    };

    let mut total_warnings = 0;

    for set in &sets {
        println!("Word set: {} ({} words)", set.name, set.words.len());

        let warnings = vocadrill_core::parser::validate_word_set(set);
        for w in &warnings {
            let prefix = w
                .english
                .as_ref()
                .map(|e| format!("  [{e}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All word sets valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
