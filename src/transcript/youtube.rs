//! YouTube caption fetching.
//!
//! Caption tracks are discovered through yt-dlp metadata and downloaded in
//! YouTube's json3 format over HTTP.

use super::{Transcript, TranscriptFetcher, TranscriptSegment};
use crate::error::{Result, VidqaError};
use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, instrument};

/// YouTube transcript fetcher.
pub struct YoutubeTranscriptFetcher {
    video_id_regex: Regex,
    http: reqwest::Client,
}

impl YoutubeTranscriptFetcher {
    pub fn new() -> Self {
        // Matches various YouTube URL formats and bare video IDs
        let video_id_regex = Regex::new(
            r"(?x)
            (?:
                # Full YouTube URLs
                (?:https?://)?
                (?:www\.)?
                (?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/)
                ([a-zA-Z0-9_-]{11})
            )
            |
            # Bare video ID (11 characters)
            ^([a-zA-Z0-9_-]{11})$
        ",
        )
        .expect("Invalid regex");

        Self {
            video_id_regex,
            http: reqwest::Client::new(),
        }
    }

    /// Extract video ID from a YouTube URL or bare ID.
    fn extract_video_id(&self, input: &str) -> Option<String> {
        let caps = self.video_id_regex.captures(input.trim())?;

        // Try group 1 (URL format) then group 2 (bare ID)
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    }

    /// Fetch video metadata (including caption track listings) using yt-dlp.
    async fn fetch_metadata(&self, video_id: &str) -> Result<serde_json::Value> {
        let url = format!("https://www.youtube.com/watch?v={}", video_id);

        let output = tokio::process::Command::new("yt-dlp")
            .args(["--dump-json", "--no-download", "--no-warnings", &url])
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    VidqaError::ToolNotFound("yt-dlp".to_string())
                } else {
                    VidqaError::TranscriptFetch(format!("Failed to run yt-dlp: {}", e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VidqaError::TranscriptFetch(format!(
                "Video {} not found or unavailable: {}",
                video_id, stderr
            )));
        }

        let json_str = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&json_str).map_err(|e| {
            VidqaError::TranscriptFetch(format!("Failed to parse yt-dlp output: {}", e))
        })
    }
}

impl Default for YoutubeTranscriptFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranscriptFetcher for YoutubeTranscriptFetcher {
    #[instrument(skip(self), fields(input = %input))]
    async fn fetch(&self, input: &str) -> Result<Transcript> {
        let video_id = self.extract_video_id(input).ok_or_else(|| {
            VidqaError::InvalidInput(format!("Invalid YouTube video ID or URL: {}", input))
        })?;

        let metadata = self.fetch_metadata(&video_id).await?;
        let track_url = select_caption_track(&metadata)?;

        debug!("Downloading caption track for {}", video_id);
        let response = self
            .http
            .get(&track_url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| {
                VidqaError::TranscriptFetch(format!("Caption track download failed: {}", e))
            })?;
        let body = response.text().await.map_err(|e| {
            VidqaError::TranscriptFetch(format!("Caption track download failed: {}", e))
        })?;

        let track: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            VidqaError::TranscriptFetch(format!("Failed to parse caption track: {}", e))
        })?;

        let segments = parse_json3_track(&track);
        debug!("Fetched {} caption segments for {}", segments.len(), video_id);

        Ok(Transcript { video_id, segments })
    }
}

/// Pick the URL of the best caption track from yt-dlp metadata.
///
/// Manually-authored subtitles are preferred over auto-generated captions,
/// and English tracks over the first listed language. Returns
/// `CaptionsUnavailable` when the video has no caption track at all.
fn select_caption_track(metadata: &serde_json::Value) -> Result<String> {
    for source in ["subtitles", "automatic_captions"] {
        let Some(tracks) = metadata[source].as_object() else {
            continue;
        };
        if tracks.is_empty() {
            continue;
        }

        let lang = tracks
            .keys()
            .find(|l| l.as_str() == "en" || l.starts_with("en-"))
            .or_else(|| tracks.keys().next())
            .cloned();

        if let Some(lang) = lang {
            let formats = tracks[&lang].as_array().cloned().unwrap_or_default();
            let url = formats
                .iter()
                .find(|f| f["ext"].as_str() == Some("json3"))
                .and_then(|f| f["url"].as_str())
                .map(|s| s.to_string());

            match url {
                Some(url) => return Ok(url),
                None => {
                    return Err(VidqaError::TranscriptFetch(format!(
                        "Caption track '{}' has no json3 format",
                        lang
                    )))
                }
            }
        }
    }

    Err(VidqaError::CaptionsUnavailable)
}

/// Parse a json3 caption track into ordered transcript segments.
///
/// Events without renderable text (style markers, window definitions) are
/// skipped.
fn parse_json3_track(track: &serde_json::Value) -> Vec<TranscriptSegment> {
    let Some(events) = track["events"].as_array() else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    for event in events {
        let Some(segs) = event["segs"].as_array() else {
            continue;
        };

        let text: String = segs
            .iter()
            .filter_map(|s| s["utf8"].as_str())
            .collect::<Vec<_>>()
            .join("");
        let text = text.replace('\n', " ").trim().to_string();
        if text.is_empty() {
            continue;
        }

        segments.push(TranscriptSegment {
            text,
            start_seconds: event["tStartMs"].as_f64().unwrap_or(0.0) / 1000.0,
            duration_seconds: event["dDurationMs"].as_f64().unwrap_or(0.0) / 1000.0,
        });
    }

    segments
}
