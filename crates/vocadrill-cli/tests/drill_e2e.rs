//! End-to-end drill runs over piped stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tempfile::TempDir;

use vocadrill_core::blanks::select_blanks;

fn vocadrill() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("vocadrill").unwrap()
}

const SINGLE_WORD_SET: &str = r#"
[word_set]
id = "one"
name = "One Word"

[[words]]
english = "hello"
vietnamese = "xin chào"
"#;

fn word_set_file(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("one.toml");
    std::fs::write(&path, SINGLE_WORD_SET).unwrap();
    path
}

#[test]
fn solving_a_word_reports_it_solved() {
    let dir = TempDir::new().unwrap();
    let path = word_set_file(&dir);
    let report_path = dir.path().join("session.json");

    // With --no-shuffle the seeded rng drives only blank selection, so the
    // pattern is reproducible here.
    let seed = 42u64;
    let mut rng = SmallRng::seed_from_u64(seed);
    let spec = select_blanks("hello", 0.4, &mut rng).unwrap();
    let answer: String = spec.answers().into_iter().collect();

    vocadrill()
        .arg("drill")
        .arg("--words")
        .arg(&path)
        .arg("--no-shuffle")
        .arg("--seed")
        .arg(seed.to_string())
        .arg("--limit")
        .arg("1")
        .arg("--report")
        .arg(&report_path)
        .write_stdin(format!("{answer}\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct! hello"))
        .stdout(predicate::str::contains("Session report saved"));

    let report = vocadrill_core::report::SessionReport::load_json(&report_path).unwrap();
    assert_eq!(report.stats.presented, 1);
    assert_eq!(report.stats.solved, 1);
    assert_eq!(report.stats.first_try, 1);
    assert_eq!(report.outcomes[0].english, "hello");
}

#[test]
fn wrong_letters_then_reveal() {
    let dir = TempDir::new().unwrap();
    let path = word_set_file(&dir);
    let report_path = dir.path().join("session.json");

    let seed = 7u64;
    let mut rng = SmallRng::seed_from_u64(seed);
    let spec = select_blanks("hello", 0.4, &mut rng).unwrap();
    // Deliberately wrong: 'z' in every slot.
    let wrong: String = "z".repeat(spec.blank_count());

    vocadrill()
        .arg("drill")
        .arg("--words")
        .arg(&path)
        .arg("--no-shuffle")
        .arg("--seed")
        .arg(seed.to_string())
        .arg("--limit")
        .arg("1")
        .arg("--report")
        .arg(&report_path)
        .write_stdin(format!("{wrong}\n!reveal\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Not quite"))
        .stdout(predicate::str::contains("Answer: hello"));

    let report = vocadrill_core::report::SessionReport::load_json(&report_path).unwrap();
    assert_eq!(report.stats.presented, 1);
    assert_eq!(report.stats.solved, 0);
    assert_eq!(report.stats.revealed, 1);
    assert_eq!(report.outcomes[0].incorrect_checks, 1);
}
