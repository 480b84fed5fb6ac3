use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document::KnowledgeDocument;
use super::metadata::DifficultyLevel;

/// Aggregate counts over the stored documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeStats {
    pub total_documents: usize,
    pub categories: BTreeMap<String, usize>,
    /// Documents without a difficulty level are not counted here
    pub difficulty_levels: BTreeMap<DifficultyLevel, usize>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl KnowledgeStats {
    pub fn from_documents<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a KnowledgeDocument>,
    {
        let mut stats = Self::default();

        for document in documents {
            stats.total_documents += 1;
            *stats.categories.entry(document.category.clone()).or_default() += 1;

            if let Some(level) = document.metadata.difficulty_level {
                *stats.difficulty_levels.entry(level).or_default() += 1;
            }

            stats.last_updated = stats.last_updated.max(Some(document.updated_at));
        }

        stats
    }
}
