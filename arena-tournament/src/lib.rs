//! ARENA Tournament - Single-elimination brackets
//!
//! This crate provides tournament infrastructure:
//! - Bracket state machine (pairing, byes, winner propagation)
//! - Tournament orchestration over a competitor directory
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run_tournament (orchestration)
//! - Level 2: register, run_bracket, play_round (phases)
//! - Level 3: fight_pairs, fight (steps)
//! - Level 4: configuration

mod bracket;
mod config;
mod tournament;

pub use bracket::{Bout, Bracket, RoundReport};
pub use config::BracketConfig;
pub use tournament::{run_bracket, Tournament, TournamentError, TournamentResult};
