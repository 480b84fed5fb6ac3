//! Hybrid ranking: cosine similarity plus keyword boosts

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::document::KnowledgeDocument;
use super::vocabulary::{is_stop_word, MIN_KEYWORD_CHARS};
use crate::domain::embedding::cosine_similarity;

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

pub const TITLE_BOOST: f32 = 0.15;
pub const TAG_BOOST: f32 = 0.10;
pub const CONTENT_BOOST: f32 = 0.05;
pub const MULTI_KEYWORD_BONUS: f32 = 0.10;

/// Parameters for a knowledge search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Query text to search for
    pub query: String,
    /// Maximum number of results to return
    pub limit: usize,
    /// Minimum cosine similarity a document needs to be considered
    pub similarity_threshold: f32,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: 5,
            similarity_threshold: 0.7,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: f32) -> Self {
        self.similarity_threshold = threshold;
        self
    }
}

/// A ranked document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub document: KnowledgeDocument,
    /// Raw cosine similarity between query and document
    pub similarity: f32,
    /// Similarity plus keyword boosts, capped at 1.0
    pub relevance_score: f32,
}

/// Split a query into lowercase keywords.
///
/// Punctuation is removed, tokens of `MIN_KEYWORD_CHARS` characters or fewer
/// and stop words are dropped, and repeats are collapsed keeping first
/// occurrence order.
pub fn extract_keywords(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let cleaned = PUNCTUATION.replace_all(&lowered, "");

    let mut keywords: Vec<String> = Vec::new();
    for token in cleaned.split_whitespace() {
        if token.chars().count() <= MIN_KEYWORD_CHARS || is_stop_word(token) {
            continue;
        }
        if !keywords.iter().any(|k| k == token) {
            keywords.push(token.to_string());
        }
    }

    keywords
}

/// Keyword boost for a document, before clamping.
///
/// Each keyword earns a boost per field it appears in. A further bonus
/// applies once two or more distinct keywords matched anywhere.
pub fn keyword_boost(document: &KnowledgeDocument, keywords: &[String]) -> f32 {
    if keywords.is_empty() {
        return 0.0;
    }

    let title = document.title.to_lowercase();
    let tags = document.metadata.joined_tags();
    let content = document.content.to_lowercase();

    let mut boost = 0.0;
    let mut matched = 0;

    for keyword in keywords {
        let mut hit = false;

        if title.contains(keyword.as_str()) {
            boost += TITLE_BOOST;
            hit = true;
        }
        if tags.contains(keyword.as_str()) {
            boost += TAG_BOOST;
            hit = true;
        }
        if content.contains(keyword.as_str()) {
            boost += CONTENT_BOOST;
            hit = true;
        }

        if hit {
            matched += 1;
        }
    }

    if matched >= 2 {
        boost += MULTI_KEYWORD_BONUS;
    }

    boost
}

/// Score every document against a query embedding and return the best ones.
///
/// Documents whose embedding dimensionality differs from the query's are
/// skipped. Ranking is stable, so equal relevance keeps store order.
pub fn rank_documents(
    documents: &[Arc<KnowledgeDocument>],
    query_embedding: &[f32],
    params: &SearchParams,
) -> Vec<SearchResult> {
    let keywords = extract_keywords(&params.query);

    let mut scored: Vec<(&Arc<KnowledgeDocument>, f32, f32)> = documents
        .iter()
        .filter(|document| {
            document.has_embedding() && document.embedding.len() == query_embedding.len()
        })
        .filter_map(|document| {
            let similarity = cosine_similarity(query_embedding, &document.embedding);
            if similarity < params.similarity_threshold {
                return None;
            }

            let relevance = (similarity + keyword_boost(document, &keywords)).min(1.0);
            Some((document, similarity, relevance))
        })
        .collect();

    scored.sort_by(|a, b| b.2.total_cmp(&a.2));
    scored.truncate(params.limit);

    tracing::debug!(
        query = %params.query,
        keywords = ?keywords,
        candidates = documents.len(),
        returned = scored.len(),
        "Ranked knowledge documents"
    );

    scored
        .into_iter()
        .map(|(document, similarity, relevance_score)| SearchResult {
            document: KnowledgeDocument::clone(document),
            similarity,
            relevance_score,
        })
        .collect()
}
