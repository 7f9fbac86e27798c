//! Error types for resolution

use std::time::Duration;

use arena_core::FighterId;

/// Failure reported by a fetch collaborator
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("no record found for identifier {0}")]
    NotFound(FighterId),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// Directory-level failure, annotated with the identifier being resolved
#[derive(Debug, thiserror::Error)]
#[error("failed to resolve {id}")]
pub struct ResolutionError {
    pub id: FighterId,
    #[source]
    pub source: FetchError,
}

impl ResolutionError {
    pub fn new(id: FighterId, source: FetchError) -> Self {
        Self { id, source }
    }

    pub fn kind(&self) -> &FetchError {
        &self.source
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.source, FetchError::NotFound(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.source, FetchError::Timeout(_))
    }
}
