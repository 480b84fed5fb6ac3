//! Source traits feeding the ingestion pipeline

use async_trait::async_trait;
use std::fmt::Debug;

use super::records::{BlogPost, ExpeditionUpdate, PersonalStory, TrainingEntry};
use super::summary::RecordKind;
use crate::domain::knowledge_base::DocumentDraft;
use crate::domain::DomainError;

/// One loaded record, already mapped (or failed to map) to a draft
#[derive(Debug)]
pub struct SourceRecord {
    pub kind: RecordKind,
    pub record_id: String,
    pub draft: Result<DocumentDraft, DomainError>,
}

impl SourceRecord {
    pub fn new(
        kind: RecordKind,
        record_id: impl Into<String>,
        draft: Result<DocumentDraft, DomainError>,
    ) -> Self {
        Self {
            kind,
            record_id: record_id.into(),
            draft,
        }
    }
}

/// Anything that yields documents for the store.
///
/// `load` failing means the whole source was unavailable; individual bad
/// records are reported through `SourceRecord::draft` instead.
#[async_trait]
pub trait DocumentSource: Send + Sync + Debug {
    /// Human readable name used in logs and summary errors
    fn name(&self) -> &str;

    async fn load(&self) -> Result<Vec<SourceRecord>, DomainError>;
}

/// Typed queries against the content backend
#[async_trait]
pub trait ContentRepository: Send + Sync + Debug {
    async fn training_entries(&self) -> Result<Vec<TrainingEntry>, DomainError>;

    async fn blog_posts(&self) -> Result<Vec<BlogPost>, DomainError>;

    async fn expedition_updates(&self) -> Result<Vec<ExpeditionUpdate>, DomainError>;

    async fn personal_stories(&self) -> Result<Vec<PersonalStory>, DomainError>;
}
