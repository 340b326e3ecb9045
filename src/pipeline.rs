//! A ready-to-query pipeline for one loaded video.

use crate::embedding::Embedder;
use crate::error::Result;
use crate::index::VectorIndex;
use crate::rag::{assemble_prompt, Generator, Retriever};
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// The composition of index and retrieval configuration for one video.
///
/// Immutable once built; a new video means a new pipeline. Ownership lives
/// in [`crate::session::SessionState`], which hands out shared snapshots.
pub struct Pipeline {
    /// Canonical ID of the loaded video.
    pub video_id: String,
    /// When this pipeline was built.
    pub loaded_at: DateTime<Utc>,
    index: VectorIndex,
    retriever: Retriever,
}

impl Pipeline {
    /// Create a pipeline over a freshly built index.
    pub fn new(video_id: String, index: VectorIndex, retriever: Retriever) -> Self {
        Self {
            video_id,
            loaded_at: Utc::now(),
            index,
            retriever,
        }
    }

    /// Number of chunks in the underlying index.
    pub fn chunk_count(&self) -> usize {
        self.index.len()
    }

    /// Answer a question from this video's transcript.
    ///
    /// Runs retrieve, assemble, and generate. The embedder must be the one
    /// the index was built with.
    #[instrument(skip(self, embedder, generator), fields(video_id = %self.video_id))]
    pub async fn answer(
        &self,
        embedder: &dyn Embedder,
        generator: &dyn Generator,
        question: &str,
    ) -> Result<String> {
        let chunks = self
            .retriever
            .retrieve(&self.index, embedder, question)
            .await?;
        debug!("Assembling prompt from {} context chunks", chunks.len());

        let prompt = assemble_prompt(&chunks, question);
        generator.generate(&prompt).await
    }
}
