//! Top-K chunk retrieval against the active index.

use crate::chunking::TextChunk;
use crate::embedding::Embedder;
use crate::error::Result;
use crate::index::VectorIndex;
use tracing::debug;

/// Default number of chunks retrieved per question.
pub const DEFAULT_K: usize = 4;

/// Retrieves the chunks most similar to a query.
#[derive(Debug, Clone, Copy)]
pub struct Retriever {
    k: usize,
}

impl Retriever {
    /// Create a retriever returning up to `k` chunks per query.
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Number of chunks returned per query.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Embed the query and return the top-k chunks, best match first.
    ///
    /// The embedder must be the same one the index was built with;
    /// embedding-space consistency is what makes the scores meaningful.
    pub async fn retrieve(
        &self,
        index: &VectorIndex,
        embedder: &dyn Embedder,
        query: &str,
    ) -> Result<Vec<TextChunk>> {
        let query_embedding = embedder.embed(query).await?;
        let results = index.search(&query_embedding, self.k);

        debug!("Retrieved {} of {} indexed chunks", results.len(), index.len());

        Ok(results.into_iter().map(|r| r.chunk).collect())
    }
}

impl Default for Retriever {
    fn default() -> Self {
        Self::new(DEFAULT_K)
    }
}
