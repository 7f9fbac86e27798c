//! In-memory fetch collaborator
//!
//! Serves payloads from a map, with an optional artificial delay. Counts
//! every fetch so callers can observe cache behaviour.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use arena_core::FighterId;
use async_trait::async_trait;

use crate::error::FetchError;
use crate::payload::RawFighter;
use crate::source::FighterSource;

#[derive(Debug, Default)]
pub struct MemorySource {
    records: HashMap<FighterId, RawFighter>,
    failing: HashMap<FighterId, String>,
    delay: Option<Duration>,
    fetches: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a payload under its numeric id
    pub fn with_record(mut self, raw: RawFighter) -> Self {
        self.records.insert(FighterId::Numeric(raw.id), raw);
        self
    }

    /// Register a payload under an explicit identifier
    pub fn with_record_as(mut self, id: impl Into<FighterId>, raw: RawFighter) -> Self {
        self.records.insert(id.into(), raw);
        self
    }

    /// Make `id` fail with a transport error
    pub fn with_failure(mut self, id: impl Into<FighterId>, message: &str) -> Self {
        self.failing.insert(id.into(), message.to_string());
        self
    }

    /// Sleep before answering every fetch
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of fetches issued so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FighterSource for MemorySource {
    async fn fetch(&self, id: &FighterId) -> Result<RawFighter, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = self.failing.get(id) {
            return Err(FetchError::Transport(message.clone()));
        }

        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(id.clone()))
    }
}
