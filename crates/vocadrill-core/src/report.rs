//! Session report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::DrillMode;
use crate::statistics::{SessionStats, WordOutcome};

/// A complete record of one practice session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the session finished.
    pub created_at: DateTime<Utc>,
    /// Summary of the word set that was drilled.
    pub word_set: WordSetSummary,
    /// Which practice mode was used.
    pub mode: DrillMode,
    /// Per-word outcomes in presentation order.
    pub outcomes: Vec<WordOutcome>,
    /// Aggregate statistics.
    pub stats: SessionStats,
    /// Total wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

/// Summary of a word set (without the full word list).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSetSummary {
    pub id: String,
    pub name: String,
    pub word_count: usize,
}

impl SessionReport {
    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format a human-readable markdown summary.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "## {} — {}\n\n",
            self.word_set.name, self.mode
        ));
        md.push_str(&format!(
            "**Summary:** {} presented, {} solved ({} first try), {} revealed, {} skipped — accuracy {:.0}%\n\n",
            self.stats.presented,
            self.stats.solved,
            self.stats.first_try,
            self.stats.revealed,
            self.stats.skipped,
            self.stats.check_accuracy * 100.0
        ));

        let troublesome: Vec<&WordOutcome> = self
            .outcomes
            .iter()
            .filter(|o| o.revealed || o.incorrect_checks > 0)
            .collect();
        if !troublesome.is_empty() {
            md.push_str("### Words to review\n\n");
            md.push_str("| Word | Checks | Wrong | Revealed |\n");
            md.push_str("|------|--------|-------|----------|\n");
            for o in troublesome {
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    o.english,
                    o.checks,
                    o.incorrect_checks,
                    if o.revealed { "yes" } else { "no" }
                ));
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::compute_session_stats;

    fn make_report() -> SessionReport {
        let outcomes = vec![
            WordOutcome {
                english: "cat".into(),
                checks: 1,
                incorrect_checks: 0,
                solved: true,
                revealed: false,
            },
            WordOutcome {
                english: "dog".into(),
                checks: 2,
                incorrect_checks: 1,
                solved: true,
                revealed: false,
            },
        ];
        let stats = compute_session_stats(&outcomes);
        SessionReport {
            id: Uuid::nil(),
            created_at: Utc::now(),
            word_set: WordSetSummary {
                id: "animals".into(),
                name: "Animals".into(),
                word_count: 2,
            },
            mode: DrillMode::MissingLetters,
            outcomes,
            stats,
            duration_ms: 42_000,
        }
    }

    #[test]
    fn json_roundtrip() {
        let report = make_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        report.save_json(&path).unwrap();
        let loaded = SessionReport::load_json(&path).unwrap();

        assert_eq!(loaded.word_set.id, "animals");
        assert_eq!(loaded.outcomes.len(), 2);
        assert_eq!(loaded.mode, DrillMode::MissingLetters);
    }

    #[test]
    fn markdown_lists_troublesome_words() {
        let md = make_report().to_markdown();
        assert!(md.contains("Words to review"));
        assert!(md.contains("| dog |"));
        assert!(!md.contains("| cat |"));
    }
}
