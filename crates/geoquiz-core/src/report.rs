//! Session report with JSON persistence and text rendering.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Coordinates, Country, ScoreResult, Verdict};

/// Summary of a finished quiz session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique session identifier.
    pub id: Uuid,
    /// Country the questions were drawn for.
    pub country: Country,
    /// Position captured at the start of the session.
    pub coordinates: Coordinates,
    /// Score computed at submission.
    pub score: ScoreResult,
    pub verdict: Verdict,
    pub started_at: DateTime<Utc>,
    pub scored_at: DateTime<Utc>,
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

    /// Plain-text rendering: tally, verdict message, and the missed prompts.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "You got {} of {} questions right.\n",
            self.score.correct_count, self.score.total_count
        ));
        out.push_str(match self.verdict {
            Verdict::Pass => "Congratulations! You did well!\n",
            Verdict::Fail => "Try again!\n",
        });

        if !self.score.missed.is_empty() {
            out.push_str("\nMissed questions:\n");
            for (i, question) in self.score.missed.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, question.prompt));
            }
        }

        out
    }
}
