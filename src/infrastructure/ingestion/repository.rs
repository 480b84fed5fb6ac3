//! Content repositories backed by a JSON export or by in-memory records

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::domain::ingestion::{
    BlogPost, ContentExport, ContentRepository, ExpeditionUpdate, PersonalStory, TrainingEntry,
};
use crate::domain::DomainError;

/// Reads a content export (`{trainingEntries, blogPosts, ...}`) from disk.
///
/// The file is read and parsed once; a failed read is retried on the next query.
#[derive(Debug)]
pub struct JsonContentRepository {
    path: PathBuf,
    export: OnceCell<ContentExport>,
}

impl JsonContentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            export: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn export(&self) -> Result<&ContentExport, DomainError> {
        self.export
            .get_or_try_init(|| async {
                let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
                    DomainError::io(format!("Failed to read {}: {}", self.path.display(), e))
                })?;

                let export: ContentExport = serde_json::from_str(&raw).map_err(|e| {
                    DomainError::validation(format!(
                        "Invalid content export {}: {}",
                        self.path.display(),
                        e
                    ))
                })?;

                debug!(
                    path = %self.path.display(),
                    training_entries = export.training_entries.len(),
                    blog_posts = export.blog_posts.len(),
                    expedition_updates = export.expedition_updates.len(),
                    personal_stories = export.personal_stories.len(),
                    "Loaded content export"
                );

                Ok(export)
            })
            .await
    }
}

#[async_trait]
impl ContentRepository for JsonContentRepository {
    async fn training_entries(&self) -> Result<Vec<TrainingEntry>, DomainError> {
        Ok(self.export().await?.training_entries.clone())
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPost>, DomainError> {
        Ok(self.export().await?.blog_posts.clone())
    }

    async fn expedition_updates(&self) -> Result<Vec<ExpeditionUpdate>, DomainError> {
        Ok(self.export().await?.expedition_updates.clone())
    }

    async fn personal_stories(&self) -> Result<Vec<PersonalStory>, DomainError> {
        Ok(self.export().await?.personal_stories.clone())
    }
}

/// Repository over records held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticContentRepository {
    export: ContentExport,
}

impl StaticContentRepository {
    pub fn new(export: ContentExport) -> Self {
        Self { export }
    }

    pub fn with_training_entry(mut self, entry: TrainingEntry) -> Self {
        self.export.training_entries.push(entry);
        self
    }

    pub fn with_blog_post(mut self, post: BlogPost) -> Self {
        self.export.blog_posts.push(post);
        self
    }

    pub fn with_expedition_update(mut self, update: ExpeditionUpdate) -> Self {
        self.export.expedition_updates.push(update);
        self
    }

    pub fn with_personal_story(mut self, story: PersonalStory) -> Self {
        self.export.personal_stories.push(story);
        self
    }
}

#[async_trait]
impl ContentRepository for StaticContentRepository {
    async fn training_entries(&self) -> Result<Vec<TrainingEntry>, DomainError> {
        Ok(self.export.training_entries.clone())
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPost>, DomainError> {
        Ok(self.export.blog_posts.clone())
    }

    async fn expedition_updates(&self) -> Result<Vec<ExpeditionUpdate>, DomainError> {
        Ok(self.export.expedition_updates.clone())
    }

    async fn personal_stories(&self) -> Result<Vec<PersonalStory>, DomainError> {
        Ok(self.export.personal_stories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EXPORT: &str = r#"{
        "trainingEntries": [
            {"_id": "t1", "title": "Hill repeats", "type": "cardio", "intensity": "high",
             "duration": 90, "metrics": {"distance": "12km", "elevationGain": 800}}
        ],
        "blogPosts": [
            {"_id": "b1", "title": "Gear list", "excerpt": "What goes in the pack"}
        ]
    }"#;

    #[tokio::test]
    async fn test_json_repository_reads_export() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXPORT.as_bytes()).unwrap();

        let repository = JsonContentRepository::new(file.path());

        let entries = repository.training_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].training_type.as_deref(), Some("cardio"));
        assert_eq!(repository.blog_posts().await.unwrap()[0].id, "b1");
        assert!(repository.expedition_updates().await.unwrap().is_empty());
        assert!(repository.personal_stories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_json_repository_missing_file() {
        let repository = JsonContentRepository::new("/nonexistent/content.json");

        let result = repository.training_entries().await;

        assert!(matches!(result, Err(DomainError::Io { .. })));
    }

    #[tokio::test]
    async fn test_json_repository_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let repository = JsonContentRepository::new(file.path());

        assert!(repository.blog_posts().await.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn test_static_repository() {
        let repository = StaticContentRepository::default()
            .with_personal_story(PersonalStory {
                id: "p1".to_string(),
                title: "First summit".to_string(),
                ..Default::default()
            })
            .with_expedition_update(ExpeditionUpdate {
                id: "e1".to_string(),
                ..Default::default()
            });

        assert_eq!(repository.personal_stories().await.unwrap().len(), 1);
        assert_eq!(repository.expedition_updates().await.unwrap()[0].id, "e1");
        assert!(repository.training_entries().await.unwrap().is_empty());
    }
}
