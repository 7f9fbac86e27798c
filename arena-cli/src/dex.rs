//! Shared directory arguments and helpers

use std::time::Duration;

use anyhow::Result;
use clap::Args;

use arena_core::FighterId;
use arena_dex::{DexConfig, Directory, PokeApiSource, DEFAULT_BASE_URL};

#[derive(Args, Clone, Debug)]
pub struct DexArgs {
    /// Creature API root
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl DexArgs {
    pub fn config(&self) -> DexConfig {
        DexConfig::default().with_base_url(&self.base_url)
    }

    pub fn config_with_timeout(&self, timeout_ms: Option<u64>) -> DexConfig {
        match timeout_ms {
            Some(ms) => self.config().with_timeout(Duration::from_millis(ms)),
            None => self.config(),
        }
    }

    pub fn directory(&self, config: DexConfig) -> Directory<PokeApiSource> {
        tracing::debug!("Using creature API at {}", config.base_url);
        Directory::http(config)
    }
}

/// Parse identifiers as typed on the command line
pub fn parse_ids(raw: &[String]) -> Vec<FighterId> {
    raw.iter()
        .map(|s| s.parse::<FighterId>().unwrap_or_else(|never| match never {}))
        .collect()
}

/// Drive an async command to completion
pub fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Runtime::new()?;
    Ok(runtime.block_on(future))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids() {
        let raw = vec!["1".to_string(), "pikachu".to_string(), "130".to_string()];
        assert_eq!(
            parse_ids(&raw),
            vec![
                FighterId::Numeric(1),
                FighterId::from("pikachu"),
                FighterId::Numeric(130),
            ]
        );
    }

    #[test]
    fn test_config_with_timeout() {
        let args = DexArgs {
            base_url: "http://localhost:8080/api/v2/".to_string(),
        };
        let config = args.config_with_timeout(Some(250));
        assert_eq!(config.base_url, "http://localhost:8080/api/v2");
        assert_eq!(config.timeout, Duration::from_millis(250));

        assert_eq!(args.config_with_timeout(None).timeout, arena_dex::DEFAULT_TIMEOUT);
    }
}
