//! Adapts a content repository into per-record-type document sources

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingestion::transform::{
    blog_post_draft, expedition_update_draft, personal_story_draft, training_entry_draft,
};
use crate::domain::ingestion::{ContentRepository, DocumentSource, RecordKind, SourceRecord};
use crate::domain::DomainError;

/// One record type of a content repository, mapped to drafts
#[derive(Debug)]
pub struct ContentRepositorySource {
    repository: Arc<dyn ContentRepository>,
    kind: RecordKind,
    name: String,
}

impl ContentRepositorySource {
    pub fn new(repository: Arc<dyn ContentRepository>, kind: RecordKind) -> Self {
        Self {
            repository,
            kind,
            name: source_name(kind).to_string(),
        }
    }

    /// Sources for the four record types a repository serves
    pub fn all(repository: Arc<dyn ContentRepository>) -> Vec<Arc<dyn DocumentSource>> {
        [
            RecordKind::TrainingEntry,
            RecordKind::BlogPost,
            RecordKind::ExpeditionUpdate,
            RecordKind::PersonalStory,
        ]
        .into_iter()
        .map(|kind| {
            Arc::new(Self::new(Arc::clone(&repository), kind)) as Arc<dyn DocumentSource>
        })
        .collect()
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }
}

fn source_name(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::TrainingEntry => "training entries",
        RecordKind::BlogPost => "blog posts",
        RecordKind::ExpeditionUpdate => "expedition updates",
        RecordKind::PersonalStory => "personal stories",
        RecordKind::BlogFile => "blog files",
        RecordKind::Baseline => "baseline",
    }
}

#[async_trait]
impl DocumentSource for ContentRepositorySource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<Vec<SourceRecord>, DomainError> {
        let kind = self.kind;

        let records = match kind {
            RecordKind::TrainingEntry => self
                .repository
                .training_entries()
                .await?
                .iter()
                .map(|entry| SourceRecord::new(kind, &entry.id, training_entry_draft(entry)))
                .collect(),
            RecordKind::BlogPost => self
                .repository
                .blog_posts()
                .await?
                .iter()
                .map(|post| SourceRecord::new(kind, &post.id, blog_post_draft(post)))
                .collect(),
            RecordKind::ExpeditionUpdate => self
                .repository
                .expedition_updates()
                .await?
                .iter()
                .map(|update| SourceRecord::new(kind, &update.id, expedition_update_draft(update)))
                .collect(),
            RecordKind::PersonalStory => self
                .repository
                .personal_stories()
                .await?
                .iter()
                .map(|story| SourceRecord::new(kind, &story.id, personal_story_draft(story)))
                .collect(),
            RecordKind::BlogFile | RecordKind::Baseline => {
                return Err(DomainError::internal(format!(
                    "{} records are not served by a content repository",
                    kind
                )));
            }
        };

        Ok(records)
    }
}
