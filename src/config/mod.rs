//! Configuration management for Vidqa.

mod settings;

pub use settings::{
    ChunkingSettings, EmbeddingSettings, GeneralSettings, GenerationSettings, RetrievalSettings,
    Settings,
};
