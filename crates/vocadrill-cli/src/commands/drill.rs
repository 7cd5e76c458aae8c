//! The `vocadrill drill` command.
//!
//! Line-based host around the core tracker: each prompt accepts the
//! missing letters for the current word (or a `!` command), feeds them to
//! the engine as per-slot input events, and checks the result.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use vocadrill_core::drill::{AnswerTracker, CheckOutcome};
use vocadrill_core::model::DrillMode;
use vocadrill_core::report::{SessionReport, WordSetSummary};
use vocadrill_core::session::{DrillSession, SessionConfig};
use vocadrill_core::statistics::compute_session_stats;
use vocadrill_providers::config::{create_word_source, load_config_from, SourceConfig};

pub async fn execute(
    words_path: Option<PathBuf>,
    ratio: Option<f64>,
    limit: Option<usize>,
    seed: Option<u64>,
    no_shuffle: bool,
    report_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let source = match words_path {
        Some(path) => create_word_source(&SourceConfig::File { path }),
        None => create_word_source(&config.source),
    };

    let word_list = source.fetch_words().await?;
    anyhow::ensure!(!word_list.is_empty(), "the word source returned no words");

    let ratio = ratio.unwrap_or(config.blank_ratio);
    anyhow::ensure!(
        ratio > 0.0 && ratio <= 1.0,
        "ratio must be in (0, 1], got {ratio}"
    );

    let limit = limit.unwrap_or(word_list.len());
    let word_count = word_list.len();
    let source_name = source.name().to_string();

    let rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_entropy(),
    };

    let session_config = SessionConfig {
        ratio,
        shuffle: config.shuffle && !no_shuffle,
        advance_delay: Duration::from_millis(config.advance_delay_ms),
    };

    let start = Instant::now();
    let mut session = DrillSession::new(word_list, session_config, rng);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut presented = 0usize;

    'words: while presented < limit {
        let Some(word) = session.current_word() else {
            println!("No drillable words left.");
            break;
        };
        let english = word.english.clone();
        let vietnamese = word.vietnamese.clone();
        let blanks = session
            .tracker()
            .map(|t| t.spec().blank_count())
            .unwrap_or(0);

        println!();
        println!("[{}/{}] Meaning: {}", presented + 1, limit, vietnamese);
        if let Some(tracker) = session.tracker() {
            println!("  {}", render_display(tracker));
        }
        println!("  Type the {blanks} missing letters, or !reveal / !skip / !quit.");

        loop {
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                break 'words;
            };
            let input = line?;
            let input = input.trim();

            match input {
                "!quit" | "!q" => break 'words,
                "!skip" | "!s" => {
                    session.advance();
                    presented += 1;
                    continue 'words;
                }
                "!reveal" | "!r" => {
                    session.reveal();
                    println!("  Answer: {english}");
                    session.advance();
                    presented += 1;
                    continue 'words;
                }
                _ => {}
            }

            let letters: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
            if letters.len() != blanks {
                println!("  Expected {blanks} letters, got {}.", letters.len());
                continue;
            }

            for (slot, ch) in letters.iter().enumerate() {
                session.input(slot, &ch.to_string())?;
            }

            match session.check() {
                Some(CheckOutcome::Correct) => {
                    println!("  Correct! {english}");
                    // Hold the verdict briefly before moving on.
                    tokio::time::sleep(session.advance_delay()).await;
                    session.advance();
                    presented += 1;
                    continue 'words;
                }
                Some(CheckOutcome::Incorrect { first_mismatch }) => {
                    println!(
                        "  Not quite. Check letter {} and try again.",
                        first_mismatch + 1
                    );
                    if let Some(tracker) = session.tracker() {
                        println!("  {}", render_display(tracker));
                    }
                }
                None => {}
            }
        }
    }

    let outcomes = session.finish();
    let stats = compute_session_stats(&outcomes);

    print_summary(&stats);

    if let Some(path) = report_path {
        let report = SessionReport {
            id: uuid::Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            word_set: WordSetSummary {
                id: source_name.clone(),
                name: source_name,
                word_count,
            },
            mode: DrillMode::MissingLetters,
            outcomes,
            stats,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        report.save_json(&path)?;
        println!("Session report saved to: {}", path.display());
    }

    Ok(())
}

/// Render the word with `_` for unanswered blanks and the user's current
/// letters where present.
fn render_display(tracker: &AnswerTracker) -> String {
    let spec = tracker.spec();
    let mut out = String::new();
    for (i, ch) in spec.display().iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match ch {
            Some(c) => out.push(*c),
            None => {
                let slot = spec
                    .blank_positions()
                    .iter()
                    .position(|&p| p == i)
                    .unwrap_or_default();
                match tracker.slots().get(slot).copied().flatten() {
                    Some(entered) => out.push(entered),
                    None => out.push('_'),
                }
            }
        }
    }
    out
}

fn print_summary(stats: &vocadrill_core::statistics::SessionStats) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "Presented",
        "Solved",
        "First try",
        "Revealed",
        "Skipped",
        "Accuracy",
    ]);
    table.add_row(vec![
        Cell::new(stats.presented),
        Cell::new(stats.solved),
        Cell::new(stats.first_try),
        Cell::new(stats.revealed),
        Cell::new(stats.skipped),
        Cell::new(format!("{:.0}%", stats.check_accuracy * 100.0)),
    ]);

    println!("\n{table}");
}
