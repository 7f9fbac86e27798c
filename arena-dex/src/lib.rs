//! ARENA Dex - Competitor directory backed by a remote creature API
//!
//! This crate turns identifiers into fighter records:
//! - Raw payload model and stat extraction
//! - Fetch collaborator trait with HTTP and in-memory sources
//! - Cached directory with batch and time-bounded resolution

mod config;
mod directory;
mod error;
mod http;
mod memory;
mod payload;
mod source;

pub use config::{DexConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use directory::Directory;
pub use error::{FetchError, ResolutionError};
pub use http::PokeApiSource;
pub use memory::MemorySource;
pub use payload::{NamedRef, RawFighter, RawStat, RawType, Sprites};
pub use source::FighterSource;
