//! Per-record outcomes and the ingestion summary they fold into

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of source record, used to label outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    TrainingEntry,
    BlogPost,
    ExpeditionUpdate,
    PersonalStory,
    BlogFile,
    Baseline,
}

impl RecordKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TrainingEntry => "Training entry",
            Self::BlogPost => "Blog post",
            Self::ExpeditionUpdate => "Expedition update",
            Self::PersonalStory => "Personal story",
            Self::BlogFile => "Blog file",
            Self::Baseline => "Baseline document",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A record that made it into the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestedRecord {
    pub kind: RecordKind,
    pub record_id: String,
    pub document_id: String,
    pub category: String,
}

/// A record that could not be mapped or stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionFailure {
    pub kind: RecordKind,
    pub record_id: String,
    pub message: String,
}

impl IngestionFailure {
    pub fn new(kind: RecordKind, record_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            record_id: record_id.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for IngestionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.kind, self.record_id, self.message)
    }
}

pub type RecordOutcome = Result<IngestedRecord, IngestionFailure>;

/// Result of one ingestion run.
///
/// Never an error as a whole: failures are listed in `errors` and clear
/// `success`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionSummary {
    pub success: bool,
    pub documents_processed: usize,
    pub documents_added: usize,
    /// Added documents per category
    pub categories: BTreeMap<String, usize>,
    pub errors: Vec<String>,
}

impl Default for IngestionSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl IngestionSummary {
    pub fn new() -> Self {
        Self {
            success: true,
            documents_processed: 0,
            documents_added: 0,
            categories: BTreeMap::new(),
            errors: Vec::new(),
        }
    }

    /// Fold one record outcome into the summary
    pub fn record(&mut self, outcome: RecordOutcome) {
        self.documents_processed += 1;

        match outcome {
            Ok(record) => {
                self.documents_added += 1;
                *self.categories.entry(record.category).or_default() += 1;
            }
            Err(failure) => {
                self.success = false;
                self.errors.push(failure.to_string());
            }
        }
    }

    /// Note a source that could not be loaded at all
    pub fn record_source_failure(&mut self, source: &str, message: impl fmt::Display) {
        self.success = false;
        self.errors.push(format!("{} source failed: {}", source, message));
    }

    pub fn failed(&self) -> usize {
        self.documents_processed - self.documents_added
    }

    /// Combine two summaries, e.g. baseline seeding and content ingestion
    pub fn merge(&mut self, other: IngestionSummary) {
        self.success &= other.success;
        self.documents_processed += other.documents_processed;
        self.documents_added += other.documents_added;
        for (category, count) in other.categories {
            *self.categories.entry(category).or_default() += count;
        }
        self.errors.extend(other.errors);
    }
}

impl FromIterator<RecordOutcome> for IngestionSummary {
    fn from_iter<I: IntoIterator<Item = RecordOutcome>>(outcomes: I) -> Self {
        let mut summary = Self::new();
        for outcome in outcomes {
            summary.record(outcome);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn added(category: &str) -> RecordOutcome {
        Ok(IngestedRecord {
            kind: RecordKind::TrainingEntry,
            record_id: "t1".to_string(),
            document_id: "doc".to_string(),
            category: category.to_string(),
        })
    }

    #[test]
    fn test_failure_display() {
        let failure = IngestionFailure::new(RecordKind::BlogPost, "b7", "missing title");
        assert_eq!(failure.to_string(), "Blog post b7: missing title");
    }

    #[test]
    fn test_summary_folds_outcomes() {
        let summary: IngestionSummary = vec![
            added("Training Log"),
            added("Training Log"),
            Err(IngestionFailure::new(RecordKind::PersonalStory, "p1", "bad difficulty")),
            added("Blog"),
        ]
        .into_iter()
        .collect();

        assert!(!summary.success);
        assert_eq!(summary.documents_processed, 4);
        assert_eq!(summary.documents_added, 3);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.categories["Training Log"], 2);
        assert_eq!(summary.errors, vec!["Personal story p1: bad difficulty"]);
    }

    #[test]
    fn test_empty_summary_is_success() {
        let summary = IngestionSummary::new();
        assert!(summary.success);
        assert_eq!(summary.documents_processed, 0);
    }

    #[test]
    fn test_source_failure_and_merge() {
        let mut first: IngestionSummary = vec![added("Blog")].into_iter().collect();
        let mut second = IngestionSummary::new();
        second.record_source_failure("blog files", "permission denied");

        first.merge(second);

        assert!(!first.success);
        assert_eq!(first.documents_added, 1);
        assert_eq!(first.errors, vec!["blog files source failed: permission denied"]);
    }
}
