//! Overlapping fixed-size chunking of transcript text.
//!
//! Splitting is purely length-based: no attempt is made to respect word or
//! sentence boundaries. Consecutive chunks share `overlap` characters so that
//! content falling on a cut point is never lost to retrieval.

use crate::error::{Result, VidqaError};
use serde::{Deserialize, Serialize};

/// Chunking parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    /// Maximum chunk length in characters.
    pub max_size: usize,
    /// Number of characters each chunk shares with its predecessor.
    pub overlap: usize,
}

impl ChunkConfig {
    /// Create a chunk configuration, validating `max_size > 0` and
    /// `overlap < max_size`.
    pub fn new(max_size: usize, overlap: usize) -> Result<Self> {
        if max_size == 0 {
            return Err(VidqaError::InvalidInput(
                "chunk max_size must be positive".to_string(),
            ));
        }
        if overlap >= max_size {
            return Err(VidqaError::InvalidInput(format!(
                "chunk overlap ({}) must be smaller than max_size ({})",
                overlap, max_size
            )));
        }
        Ok(Self { max_size, overlap })
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_size: 1000,
            overlap: 200,
        }
    }
}

/// A bounded-length piece of transcript text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextChunk {
    /// Text content of this chunk.
    pub content: String,
    /// Offset of the first character in the source text, in characters.
    pub start_offset: usize,
    /// Position of this chunk in the split sequence.
    pub order: usize,
}

/// Split text into overlapping fixed-size chunks.
///
/// "Character" means a Unicode scalar value (Rust `char`), so chunk
/// boundaries are reproducible for non-ASCII transcripts regardless of
/// byte encoding. Each chunk except possibly the last has exactly
/// `max_size` characters, and each chunk after the first starts `overlap`
/// characters before the previous cut point.
///
/// An empty input yields an empty vector; no chunk is ever empty.
pub fn split_text(text: &str, config: &ChunkConfig) -> Vec<TextChunk> {
    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();

    let mut start = 0;
    let mut order = 0;
    while start < chars.len() {
        let end = usize::min(start + config.max_size, chars.len());
        chunks.push(TextChunk {
            content: chars[start..end].iter().collect(),
            start_offset: start,
            order,
        });
        if end == chars.len() {
            break;
        }
        start = end - config.overlap;
        order += 1;
    }

    chunks
}
