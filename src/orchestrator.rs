//! Pipeline orchestrator for Vidqa.
//!
//! Coordinates the load path (fetch, chunk, embed, index, publish) and the
//! ask path (retrieve, assemble, generate) over the single active session.

use crate::chunking::{split_text, ChunkConfig};
use crate::config::Settings;
use crate::embedding::{Embedder, OpenAIEmbedder};
use crate::error::{Result, VidqaError};
use crate::index::VectorIndex;
use crate::pipeline::Pipeline;
use crate::rag::{Generator, OpenAIGenerator, Retriever};
use crate::session::SessionState;
use crate::transcript::{TranscriptFetcher, YoutubeTranscriptFetcher};
use std::sync::Arc;
use tracing::{info, instrument};

/// Outcome of a successful video load.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Canonical ID of the loaded video.
    pub video_id: String,
    /// Number of chunks indexed from its transcript.
    pub chunk_count: usize,
}

/// The main orchestrator for the Vidqa pipeline.
pub struct Orchestrator {
    settings: Settings,
    fetcher: Arc<dyn TranscriptFetcher>,
    embedder: Arc<dyn Embedder>,
    generator: Arc<dyn Generator>,
    session: SessionState,
}

impl Orchestrator {
    /// Create a new orchestrator with production providers.
    pub fn new(settings: Settings) -> Result<Self> {
        // Validate the chunking configuration up front so a bad config file
        // fails at startup rather than on the first load.
        ChunkConfig::new(settings.chunking.max_size, settings.chunking.overlap)?;

        let fetcher = Arc::new(YoutubeTranscriptFetcher::new());
        let embedder = Arc::new(OpenAIEmbedder::with_config(
            &settings.embedding.model,
            settings.embedding.dimensions as usize,
        ));
        let generator = Arc::new(OpenAIGenerator::with_model(&settings.generation.model));

        Ok(Self {
            settings,
            fetcher,
            embedder,
            generator,
            session: SessionState::new(),
        })
    }

    /// Create an orchestrator with custom providers.
    pub fn with_components(
        settings: Settings,
        fetcher: Arc<dyn TranscriptFetcher>,
        embedder: Arc<dyn Embedder>,
        generator: Arc<dyn Generator>,
    ) -> Self {
        Self {
            settings,
            fetcher,
            embedder,
            generator,
            session: SessionState::new(),
        }
    }

    /// Get a reference to the session state.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Load a video and make it the active session.
    ///
    /// Runs fetch, chunk, embed, and index, then atomically replaces the
    /// active pipeline. On any failure the previous session, if one exists,
    /// is left untouched and stays queryable.
    #[instrument(skip(self), fields(input = %input))]
    pub async fn load_video(&self, input: &str) -> Result<LoadResult> {
        let input = input.trim();
        if input.is_empty() {
            return Err(VidqaError::InvalidInput(
                "Video URL or ID must not be empty".to_string(),
            ));
        }

        let transcript = self.fetcher.fetch(input).await?;
        info!(
            "Fetched transcript for {} ({} segments)",
            transcript.video_id,
            transcript.segments.len()
        );

        let config = ChunkConfig::new(
            self.settings.chunking.max_size,
            self.settings.chunking.overlap,
        )?;
        let chunks = split_text(&transcript.full_text(), &config);

        let index = VectorIndex::build(chunks, self.embedder.as_ref()).await?;
        let pipeline = Pipeline::new(
            transcript.video_id.clone(),
            index,
            Retriever::new(self.settings.retrieval.k),
        );

        let result = LoadResult {
            video_id: transcript.video_id,
            chunk_count: pipeline.chunk_count(),
        };
        info!(
            "Indexed {} chunks for {}",
            result.chunk_count, result.video_id
        );

        self.session.replace(pipeline);
        Ok(result)
    }

    /// Answer a question from the active video's transcript.
    ///
    /// Fails with `NoActiveSession` when no video has been loaded yet. The
    /// pipeline snapshot is taken once, so a concurrent load cannot swap
    /// the index out mid-question.
    #[instrument(skip(self), fields(question = %question))]
    pub async fn ask(&self, question: &str) -> Result<String> {
        let question = question.trim();
        if question.is_empty() {
            return Err(VidqaError::InvalidInput(
                "Question must not be empty".to_string(),
            ));
        }

        let pipeline = self.session.current().ok_or(VidqaError::NoActiveSession)?;
        pipeline
            .answer(self.embedder.as_ref(), self.generator.as_ref(), question)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::{Transcript, TranscriptSegment};
    use async_trait::async_trait;

    struct FakeFetcher;

    #[async_trait]
    impl TranscriptFetcher for FakeFetcher {
        async fn fetch(&self, input: &str) -> Result<Transcript> {
            if input == "nocaptions0" {
                return Err(VidqaError::CaptionsUnavailable);
            }
            Ok(Transcript {
                video_id: input.to_string(),
                segments: vec![TranscriptSegment {
                    text: "some spoken words".to_string(),
                    start_seconds: 0.0,
                    duration_seconds: 2.0,
                }],
            })
        }
    }

    struct FakeEmbedder;

    #[async_trait]
    impl Embedder for FakeEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
            Ok(vec![1.0, 0.0])
        }
        async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|_| vec![1.0, 0.0]).collect())
        }
        fn dimensions(&self) -> usize {
            2
        }
    }

    struct FakeGenerator;

    #[async_trait]
    impl Generator for FakeGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok("answer".to_string())
        }
    }

    fn orchestrator() -> Orchestrator {
        Orchestrator::with_components(
            Settings::default(),
            Arc::new(FakeFetcher),
            Arc::new(FakeEmbedder),
            Arc::new(FakeGenerator),
        )
    }

    #[tokio::test]
    async fn test_ask_before_load_fails_with_no_active_session() {
        let orchestrator = orchestrator();
        let result = orchestrator.ask("what is this about?").await;
        assert!(matches!(result, Err(VidqaError::NoActiveSession)));
    }

    #[tokio::test]
    async fn test_load_then_ask() {
        let orchestrator = orchestrator();
        let result = orchestrator.load_video("dQw4w9WgXcQ").await.unwrap();
        assert_eq!(result.video_id, "dQw4w9WgXcQ");
        assert_eq!(result.chunk_count, 1);

        let answer = orchestrator.ask("anything?").await.unwrap();
        assert_eq!(answer, "answer");
    }

    #[tokio::test]
    async fn test_empty_inputs_rejected() {
        let orchestrator = orchestrator();
        assert!(matches!(
            orchestrator.load_video("   ").await,
            Err(VidqaError::InvalidInput(_))
        ));
        assert!(matches!(
            orchestrator.ask("").await,
            Err(VidqaError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_failed_load_preserves_prior_session() {
        let orchestrator = orchestrator();
        orchestrator.load_video("goodvideo00").await.unwrap();

        let result = orchestrator.load_video("nocaptions0").await;
        assert!(matches!(result, Err(VidqaError::CaptionsUnavailable)));

        // The previous session must still answer.
        let active = orchestrator.session().current().unwrap();
        assert_eq!(active.video_id, "goodvideo00");
        assert_eq!(orchestrator.ask("still there?").await.unwrap(), "answer");
    }

    #[tokio::test]
    async fn test_invalid_chunking_config_rejected_at_startup() {
        let mut settings = Settings::default();
        settings.chunking.overlap = settings.chunking.max_size;
        assert!(matches!(
            Orchestrator::new(settings),
            Err(VidqaError::InvalidInput(_))
        ));
    }
}
