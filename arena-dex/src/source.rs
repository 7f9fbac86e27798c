//! Fetch collaborator seam

use arena_core::FighterId;
use async_trait::async_trait;

use crate::error::FetchError;
use crate::payload::RawFighter;

/// Asynchronous source of raw creature payloads
#[async_trait]
pub trait FighterSource: Send + Sync {
    /// Fetch the payload for one identifier.
    ///
    /// Fails with `NotFound` when the source does not know the identifier
    /// and `Transport` for anything else.
    async fn fetch(&self, id: &FighterId) -> Result<RawFighter, FetchError>;
}
