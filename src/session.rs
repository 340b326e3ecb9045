//! Single-slot session state.
//!
//! Holds zero or one active [`Pipeline`]. The slot is the only mutable
//! shared resource in the system: ingestion replaces it atomically, and
//! readers get a consistent `Arc` snapshot that stays valid even if a
//! concurrent load swaps in a new pipeline underneath them. Last writer
//! wins across concurrent loads.

use crate::pipeline::Pipeline;
use std::sync::{Arc, RwLock};

/// Process-wide holder for the active pipeline.
#[derive(Default)]
pub struct SessionState {
    active: RwLock<Option<Arc<Pipeline>>>,
}

impl SessionState {
    /// Create an empty session (no video loaded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically publish a new pipeline, discarding any previous one.
    pub fn replace(&self, pipeline: Pipeline) {
        let mut slot = self.active.write().unwrap();
        *slot = Some(Arc::new(pipeline));
    }

    /// Snapshot the currently active pipeline, if any.
    pub fn current(&self) -> Option<Arc<Pipeline>> {
        self.active.read().unwrap().clone()
    }

    /// Whether a video is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.active.read().unwrap().is_some()
    }
}
