//! Knowledge documents and the drafts they are built from

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::metadata::DocumentMetadata;
use crate::domain::DomainError;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9-]").unwrap());

/// Derive a document id from its title.
///
/// Lowercases, turns whitespace runs into `-` and drops everything outside
/// `[a-z0-9-]`. Two documents with the same title get the same id.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let dashed = WHITESPACE_RUN.replace_all(&lowered, "-");
    NON_SLUG_CHARS.replace_all(&dashed, "").into_owned()
}

/// A document that has not been embedded or stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentDraft {
    title: String,
    content: String,
    category: String,
    source: String,
    metadata: DocumentMetadata,
    created_at: Option<DateTime<Utc>>,
}

impl DocumentDraft {
    /// Create a draft, rejecting empty or whitespace-only content
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        let content = content.into();

        if content.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "Document '{}' has no content",
                title
            )));
        }

        Ok(Self {
            title,
            content,
            category: category.into(),
            source: source.into(),
            metadata: DocumentMetadata::default(),
            created_at: None,
        })
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Keep the original publication time instead of the ingestion time
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// The id this draft will be stored under
    pub fn document_id(&self) -> String {
        slugify(&self.title)
    }

    /// Turn the draft into a stored document
    pub fn into_document(self, embedding: Vec<f32>, now: DateTime<Utc>) -> KnowledgeDocument {
        KnowledgeDocument {
            id: self.document_id(),
            title: self.title,
            content: self.content,
            category: self.category,
            source: self.source,
            metadata: self.metadata,
            embedding,
            created_at: self.created_at.unwrap_or(now),
            updated_at: now,
        }
    }
}

/// A knowledge document held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub source: String,
    pub metadata: DocumentMetadata,
    #[serde(skip_serializing, default)]
    pub embedding: Vec<f32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl KnowledgeDocument {
    pub fn has_embedding(&self) -> bool {
        !self.embedding.is_empty()
    }

    pub fn embedding_dimensions(&self) -> usize {
        self.embedding.len()
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            category: self.category.clone(),
            source: self.source.clone(),
            metadata: self.metadata.clone(),
            content_chars: self.content.chars().count(),
            embedding_dimensions: self.embedding.len(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Inspection view of a stored document, without content body or vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    pub title: String,
    pub category: String,
    pub source: String,
    pub metadata: DocumentMetadata,
    pub content_chars: usize,
    pub embedding_dimensions: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
