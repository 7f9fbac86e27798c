//! ARENA Core - Fighter model, lookup cache and battle resolution
//!
//! This crate provides the pure, synchronous building blocks:
//! - Fighter records and identifiers
//! - Generic memoizing lookup cache
//! - Deterministic turn-based battle resolver
//! - Generic comparator for ranking fighters by stat

pub mod fighter;
pub mod cache;
pub mod battle;
pub mod compare;

// Re-exports for convenient access
pub use fighter::{Fighter, FighterId, Stat, ALL_STATS};
pub use cache::Cache;
pub use battle::{battle, battle_with_limit, damage, BattleOutcome, MAX_ROUNDS};
pub use compare::Comparator;
