//! Configuration for the directory and its HTTP source

use std::time::Duration;

/// Public creature API
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default bound for time-limited resolution
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);

/// Directory configuration
#[derive(Clone, Debug, PartialEq)]
pub struct DexConfig {
    /// API root; records live under `{base_url}/pokemon/{id}`
    pub base_url: String,
    /// Bound used by `Directory::resolve_bounded`
    pub timeout: Duration,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl DexConfig {
    /// Set API root (trailing slashes are dropped)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set resolution timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
