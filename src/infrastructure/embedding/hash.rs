//! Deterministic feature-hashing embedder for offline use

use async_trait::async_trait;

use crate::domain::embedding::{l2_normalize, EmbeddingProvider};
use crate::domain::DomainError;

pub const DEFAULT_HASH_DIMENSIONS: usize = 2048;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Bag-of-words embedder: every lowercase alphanumeric token increments the
/// bucket its FNV-1a hash falls into, then the vector is L2-normalized.
///
/// Texts sharing vocabulary get high cosine similarity. All components are
/// non-negative, so similarities never drop below zero.
#[derive(Debug, Clone)]
pub struct HashEmbeddingProvider {
    dimensions: usize,
    model: String,
}

impl Default for HashEmbeddingProvider {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_DIMENSIONS)
    }
}

impl HashEmbeddingProvider {
    pub fn new(dimensions: usize) -> Self {
        let dimensions = dimensions.max(1);
        Self {
            dimensions,
            model: format!("fnv1a-bow-{}", dimensions),
        }
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];

        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
        {
            let bucket = (fnv1a(&token.to_lowercase()) % self.dimensions as u64) as usize;
            vector[bucket] += 1.0;
        }

        l2_normalize(&mut vector);
        vector
    }
}

fn fnv1a(token: &str) -> u64 {
    token.bytes().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
    })
}

#[async_trait]
impl EmbeddingProvider for HashEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        Ok(self.vectorize(text))
    }

    fn provider_name(&self) -> &'static str {
        "hash"
    }

    fn model(&self) -> &str {
        &self.model
    }
}
