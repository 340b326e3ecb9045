//! Vidqa - Single-Video Transcript Question Answering
//!
//! Ask natural-language questions about one video, answered only from that
//! video's spoken transcript.
//!
//! # Overview
//!
//! Vidqa runs a single-session RAG pipeline:
//! - Load a YouTube video: fetch its caption track, split it into overlapping
//!   chunks, embed the chunks, and build an in-memory similarity index
//! - Ask questions: retrieve the most relevant chunks and have a language
//!   model answer using only that context
//!
//! Exactly one video is active at a time; loading a new video replaces the
//! previous session wholesale. Nothing is persisted across restarts.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `transcript` - Transcript fetching (YouTube captions)
//! - `chunking` - Overlapping fixed-size text chunking
//! - `embedding` - Embedding generation
//! - `index` - In-memory vector index with similarity search
//! - `rag` - Retrieval, prompt assembly, and answer generation
//! - `pipeline` - A ready-to-query (index, retriever) pair
//! - `session` - The single-slot active session state
//! - `orchestrator` - Load/ask coordination
//!
//! # Example
//!
//! ```rust,no_run
//! use vidqa::config::Settings;
//! use vidqa::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let orchestrator = Orchestrator::new(settings)?;
//!
//!     let result = orchestrator.load_video("dQw4w9WgXcQ").await?;
//!     println!("Indexed {} chunks", result.chunk_count);
//!
//!     let answer = orchestrator.ask("What is this video about?").await?;
//!     println!("{}", answer);
//!
//!     Ok(())
//! }
//! ```

pub mod chunking;
pub mod cli;
pub mod config;
pub mod embedding;
pub mod error;
pub mod index;
pub mod openai;
pub mod orchestrator;
pub mod pipeline;
pub mod rag;
pub mod session;
pub mod transcript;

pub use error::{Result, VidqaError};
