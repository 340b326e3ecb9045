//! End-to-end session behavior over the load-video and ask operations,
//! using deterministic in-process providers instead of live network calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use vidqa::config::Settings;
use vidqa::embedding::Embedder;
use vidqa::error::{Result, VidqaError};
use vidqa::orchestrator::Orchestrator;
use vidqa::rag::Generator;
use vidqa::transcript::{Transcript, TranscriptFetcher, TranscriptSegment};

/// Fetcher serving canned transcripts keyed by video ID.
struct CannedFetcher {
    transcripts: HashMap<String, String>,
}

impl CannedFetcher {
    fn new(videos: &[(&str, &str)]) -> Self {
        Self {
            transcripts: videos
                .iter()
                .map(|(id, text)| (id.to_string(), text.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl TranscriptFetcher for CannedFetcher {
    async fn fetch(&self, input: &str) -> Result<Transcript> {
        match self.transcripts.get(input) {
            Some(text) => Ok(Transcript {
                video_id: input.to_string(),
                segments: vec![TranscriptSegment {
                    text: text.clone(),
                    start_seconds: 0.0,
                    duration_seconds: 60.0,
                }],
            }),
            None => Err(VidqaError::CaptionsUnavailable),
        }
    }
}

/// Deterministic embedding: character counts bucketed by codepoint.
struct HashEmbedder;

#[async_trait]
impl Embedder for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut v = vec![0.0f32; 16];
        for c in text.chars() {
            v[(c as usize) % 16] += 1.0;
        }
        Ok(v)
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            out.push(self.embed(text).await?);
        }
        Ok(out)
    }

    fn dimensions(&self) -> usize {
        16
    }
}

/// Generator that records every prompt it is given.
struct RecordingGenerator {
    prompts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Generator for RecordingGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok("generated answer".to_string())
    }
}

fn small_chunk_settings() -> Settings {
    // Small chunks so short fixture transcripts still produce several of them.
    let mut settings = Settings::default();
    settings.chunking.max_size = 40;
    settings.chunking.overlap = 8;
    settings
}

fn orchestrator_with(
    fetcher: CannedFetcher,
) -> (Orchestrator, Arc<Mutex<Vec<String>>>) {
    let prompts = Arc::new(Mutex::new(Vec::new()));
    let orchestrator = Orchestrator::with_components(
        small_chunk_settings(),
        Arc::new(fetcher),
        Arc::new(HashEmbedder),
        Arc::new(RecordingGenerator {
            prompts: prompts.clone(),
        }),
    );
    (orchestrator, prompts)
}

const RUST_TALK: &str = "this talk is about the rust borrow checker and how ownership \
     rules prevent data races at compile time without garbage collection";

const JAZZ_TALK: &str = "this lecture covers jazz improvisation and how bebop musicians \
     build solos from chord tones and enclosures around the melody";

#[tokio::test]
async fn load_then_ask_round_trip() {
    let (orchestrator, prompts) = orchestrator_with(CannedFetcher::new(&[("rustvideo00", RUST_TALK)]));

    let result = orchestrator.load_video("rustvideo00").await.unwrap();
    assert_eq!(result.video_id, "rustvideo00");
    assert!(result.chunk_count > 1);

    let answer = orchestrator.ask("what is the borrow checker?").await.unwrap();
    assert_eq!(answer, "generated answer");

    // The generator saw one prompt, built from this video's transcript.
    let prompts = prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Question: what is the borrow checker?"));
    assert!(prompts[0].contains("Answer ONLY from the provided transcript context."));
}

#[tokio::test]
async fn ask_before_load_is_typed_failure() {
    let (orchestrator, prompts) = orchestrator_with(CannedFetcher::new(&[]));

    let result = orchestrator.ask("anything?").await;
    assert!(matches!(result, Err(VidqaError::NoActiveSession)));

    // The generator was never invoked.
    assert!(prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn captions_unavailable_keeps_prior_session_queryable() {
    let (orchestrator, _prompts) =
        orchestrator_with(CannedFetcher::new(&[("rustvideo00", RUST_TALK)]));

    orchestrator.load_video("rustvideo00").await.unwrap();

    let result = orchestrator.load_video("nocaptions0").await;
    assert!(matches!(result, Err(VidqaError::CaptionsUnavailable)));

    // The first video still answers.
    let answer = orchestrator.ask("still loaded?").await.unwrap();
    assert_eq!(answer, "generated answer");
    assert_eq!(
        orchestrator.session().current().unwrap().video_id,
        "rustvideo00"
    );
}

#[tokio::test]
async fn second_load_replaces_first_without_leakage() {
    let (orchestrator, prompts) = orchestrator_with(CannedFetcher::new(&[
        ("rustvideo00", RUST_TALK),
        ("jazzvideo00", JAZZ_TALK),
    ]));

    orchestrator.load_video("rustvideo00").await.unwrap();
    orchestrator.load_video("jazzvideo00").await.unwrap();

    orchestrator.ask("how do bebop solos work?").await.unwrap();

    // Context must come only from the second video's transcript.
    let prompts = prompts.lock().unwrap();
    let prompt = prompts.last().unwrap();
    assert!(prompt.contains("jazz") || prompt.contains("bebop"));
    assert!(!prompt.contains("borrow checker"));
    assert!(!prompt.contains("ownership"));
}

#[tokio::test]
async fn concurrent_asks_share_one_snapshot_each() {
    let (orchestrator, prompts) =
        orchestrator_with(CannedFetcher::new(&[("rustvideo00", RUST_TALK)]));
    let orchestrator = Arc::new(orchestrator);

    orchestrator.load_video("rustvideo00").await.unwrap();

    let mut handles = Vec::new();
    for i in 0..8 {
        let orchestrator = orchestrator.clone();
        handles.push(tokio::spawn(async move {
            orchestrator.ask(&format!("question {}?", i)).await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    assert_eq!(prompts.lock().unwrap().len(), 8);
}
