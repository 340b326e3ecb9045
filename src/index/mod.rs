//! In-memory vector index over transcript chunks.
//!
//! The index is immutable once built: a new video means a new index built
//! from scratch, never an incremental update. It holds no external
//! resources, so dropping the previous index on replacement is all the
//! cleanup there is.

use crate::chunking::TextChunk;
use crate::embedding::Embedder;
use crate::error::{Result, VidqaError};

/// A chunk paired with its embedding.
#[derive(Debug, Clone)]
struct IndexEntry {
    chunk: TextChunk,
    embedding: Vec<f32>,
}

/// A search hit with its similarity score.
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    /// The matched chunk.
    pub chunk: TextChunk,
    /// Cosine similarity to the query (higher is better).
    pub score: f32,
}

/// Similarity-searchable collection of embedded chunks.
#[derive(Debug, Default)]
pub struct VectorIndex {
    entries: Vec<IndexEntry>,
}

impl VectorIndex {
    /// Embed all chunks and build the index.
    ///
    /// Builds atomically: if the embedding call fails, or returns a vector
    /// count that does not match the chunk count, no index is produced.
    pub async fn build(chunks: Vec<TextChunk>, embedder: &dyn Embedder) -> Result<Self> {
        if chunks.is_empty() {
            return Ok(Self::default());
        }

        let texts: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
        let embeddings = embedder.embed_batch(&texts).await?;

        if embeddings.len() != chunks.len() {
            return Err(VidqaError::Embedding(format!(
                "Expected {} embeddings, got {}",
                chunks.len(),
                embeddings.len()
            )));
        }

        let entries = chunks
            .into_iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| IndexEntry { chunk, embedding })
            .collect();

        Ok(Self { entries })
    }

    /// Return the `k` most similar chunks, highest score first.
    ///
    /// Ties are broken by original chunk order (earlier chunk wins), so
    /// results are deterministic for a fixed index and query. An empty index
    /// yields an empty result rather than an error.
    pub fn search(&self, query_embedding: &[f32], k: usize) -> Vec<ScoredChunk> {
        let mut results: Vec<ScoredChunk> = self
            .entries
            .iter()
            .map(|entry| ScoredChunk {
                chunk: entry.chunk.clone(),
                score: cosine_similarity(query_embedding, &entry.embedding),
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.chunk.order.cmp(&b.chunk.order))
        });
        results.truncate(k);

        results
    }

    /// Number of indexed chunks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute cosine similarity between two vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}
