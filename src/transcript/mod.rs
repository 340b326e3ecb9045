//! Transcript fetching for Vidqa.
//!
//! Provides a trait-based interface so the production YouTube fetcher and
//! deterministic test fakes are interchangeable.

mod youtube;

pub use youtube::YoutubeTranscriptFetcher;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One timed caption line from a video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Spoken text.
    pub text: String,
    /// Start time in the video (seconds).
    pub start_seconds: f64,
    /// Duration of this segment (seconds).
    pub duration_seconds: f64,
}

/// A full video transcript in spoken order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Canonical video ID the transcript was fetched for.
    pub video_id: String,
    /// Caption segments in spoken order.
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    /// Join all segment texts into one string, separated by single spaces.
    ///
    /// This is the text the chunker operates on; timing metadata is not
    /// carried downstream.
    pub fn full_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Trait for transcript providers.
///
/// Implementations must fail with [`crate::VidqaError::CaptionsUnavailable`]
/// when the video has no caption track, distinct from transport failures.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    /// Fetch the transcript for a video URL or bare video ID.
    async fn fetch(&self, input: &str) -> Result<Transcript>;
}
