//! The `vocadrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create vocadrill.toml
    if std::path::Path::new("vocadrill.toml").exists() {
        println!("vocadrill.toml already exists, skipping.");
    } else {
        std::fs::write("vocadrill.toml", SAMPLE_CONFIG)?;
        println!("Created vocadrill.toml");
    }

    // Create example word set
    std::fs::create_dir_all("word-sets")?;
    let example_path = std::path::Path::new("word-sets/starter.toml");
    if example_path.exists() {
        println!("word-sets/starter.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, STARTER_WORD_SET)?;
        println!("Created word-sets/starter.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: vocadrill validate --words word-sets/starter.toml");
    println!("  2. Run: vocadrill drill --words word-sets/starter.toml");
    println!("  3. For translation feedback, set VOCADRILL_GEMINI_KEY or edit vocadrill.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# vocadrill configuration

[source]
type = "file"
path = "word-sets"

# Uncomment to fetch words from the backend API instead:
# [source]
# type = "http"
# base_url = "http://localhost:3001"

# Uncomment for paragraph-translation feedback:
# [feedback]
# type = "gemini"
# api_key = "${GOOGLE_API_KEY}"
# model = "gemini-2.5-pro"

blank_ratio = 0.4
advance_delay_ms = 1500
shuffle = true
"#;

const STARTER_WORD_SET: &str = r#"[word_set]
id = "starter"
name = "Starter Words"
description = "A small set of everyday words to get going"
default_ratio = 0.4

[[words]]
english = "hello"
vietnamese = "xin chào"
ipa = "/həˈloʊ/"
type = "interjection"

[[words]]
english = "cat"
vietnamese = "mèo"
ipa = "/kæt/"
type = "noun"

[[words]]
english = "dog"
vietnamese = "chó"
ipa = "/dɔːɡ/"
type = "noun"

[[words]]
english = "beautiful"
vietnamese = "đẹp"
ipa = "/ˈbjuːtɪfl/"
type = "adjective"

[[words]]
english = "well-known"
vietnamese = "nổi tiếng"
type = "adjective"
"#;
