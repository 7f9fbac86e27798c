//! Competitor directory - cached identifier resolution
//!
//! The cache sits behind an `RwLock` that is only held for the synchronous
//! has/get/set calls, never across an `.await`. Two concurrent resolutions of
//! the same uncached identifier both fetch; the last write wins.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use arena_core::{Cache, Fighter, FighterId};
use futures_util::future::try_join_all;

use crate::config::DexConfig;
use crate::error::{FetchError, ResolutionError};
use crate::http::PokeApiSource;
use crate::source::FighterSource;

/// Resolves identifiers to fighters, memoizing successful lookups
pub struct Directory<S> {
    source: S,
    cache: RwLock<Cache<FighterId, Fighter>>,
    config: DexConfig,
}

impl Directory<PokeApiSource> {
    /// Directory backed by the HTTP API described by `config`
    pub fn http(config: DexConfig) -> Self {
        let source = PokeApiSource::new(&config);
        Self::with_config(source, config)
    }
}

impl<S: FighterSource> Directory<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, DexConfig::default())
    }

    pub fn with_config(source: S, config: DexConfig) -> Self {
        Self {
            source,
            cache: RwLock::new(Cache::new()),
            config,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &DexConfig {
        &self.config
    }

    /// Resolve one identifier, hitting the source only on a cache miss
    pub async fn resolve(&self, id: &FighterId) -> Result<Fighter, ResolutionError> {
        if let Some(fighter) = self.cached(id) {
            tracing::debug!("Cache hit: {}", id);
            return Ok(fighter);
        }

        tracing::debug!("Fetching: {}", id);
        let raw = self.source.fetch(id).await.map_err(|e| {
            tracing::warn!("Fetch of {} failed: {}", id, e);
            ResolutionError::new(id.clone(), e)
        })?;

        let fighter = raw.into_fighter();
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(id.clone(), fighter.clone());

        Ok(fighter)
    }

    /// Resolve every identifier concurrently on the calling task.
    ///
    /// Output order matches input order. The first failure aborts the
    /// batch and no partial results are returned.
    pub async fn resolve_batch(&self, ids: &[FighterId]) -> Result<Vec<Fighter>, ResolutionError> {
        try_join_all(ids.iter().map(|id| self.resolve(id))).await
    }

    /// Resolve one identifier, failing with a timeout if it takes longer than
    /// `timeout`. The pending fetch is dropped and nothing is cached for it.
    pub async fn resolve_with_timeout(
        &self,
        id: &FighterId,
        timeout: Duration,
    ) -> Result<Fighter, ResolutionError> {
        match tokio::time::timeout(timeout, self.resolve(id)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!("Resolution of {} timed out after {:?}", id, timeout);
                Err(ResolutionError::new(id.clone(), FetchError::Timeout(timeout)))
            }
        }
    }

    /// Resolve with the configured timeout
    pub async fn resolve_bounded(&self, id: &FighterId) -> Result<Fighter, ResolutionError> {
        self.resolve_with_timeout(id, self.config.timeout).await
    }

    pub fn clear_cache(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .size()
    }

    fn cached(&self, id: &FighterId) -> Option<Fighter> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        if cache.has(id) {
            cache.get(id).cloned()
        } else {
            None
        }
    }
}
