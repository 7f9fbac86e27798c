//! Tournament execution - single elimination
//!
//! Level 1 - Orchestration and Level 2 - Phases

use arena_core::{Fighter, FighterId};
use arena_dex::{Directory, FighterSource, ResolutionError};
use serde::Serialize;

use crate::bracket::{Bracket, RoundReport};
use crate::config::BracketConfig;

/// Errors that abort a tournament
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("a tournament needs at least one entrant")]
    EmptyRoster,

    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

/// Result of a tournament
#[derive(Clone, Debug, Serialize)]
pub struct TournamentResult {
    pub champion: Fighter,
    /// Number of entrants in round 1
    pub entrants: usize,
    /// Per-round reports in play order
    pub rounds: Vec<RoundReport>,
}

impl TournamentResult {
    /// Total battles fought across all rounds
    pub fn battles_fought(&self) -> usize {
        self.rounds.iter().map(|r| r.bouts.len()).sum()
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }
}

/// Single-elimination tournament over a competitor directory
pub struct Tournament<'a, S> {
    directory: &'a Directory<S>,
    config: BracketConfig,
}

impl<'a, S: FighterSource> Tournament<'a, S> {
    pub fn new(directory: &'a Directory<S>, config: BracketConfig) -> Self {
        Self { directory, config }
    }

    pub fn config(&self) -> &BracketConfig {
        &self.config
    }

    // ========================================================================
    // Level 1 - Orchestration
    // ========================================================================

    /// Resolve every identifier, then run the bracket to completion
    pub async fn run_tournament(&self, ids: &[FighterId]) -> Result<TournamentResult, TournamentError> {
        if ids.is_empty() {
            return Err(TournamentError::EmptyRoster);
        }

        tracing::info!("Starting tournament with {} entrants", ids.len());

        let roster = self.register(ids).await?;
        run_bracket(roster, &self.config)
    }

    /// Run a tournament and return only its champion
    pub async fn champion(&self, ids: &[FighterId]) -> Result<Fighter, TournamentError> {
        self.run_tournament(ids).await.map(|result| result.champion)
    }

    // ========================================================================
    // Level 2 - Phases
    // ========================================================================

    /// Resolve entrants one at a time, in input order
    async fn register(&self, ids: &[FighterId]) -> Result<Vec<Fighter>, ResolutionError> {
        let mut roster = Vec::with_capacity(ids.len());
        for id in ids {
            let fighter = match self.config.resolve_timeout {
                Some(timeout) => self.directory.resolve_with_timeout(id, timeout).await?,
                None => self.directory.resolve(id).await?,
            };
            roster.push(fighter);
        }

        tracing::info!("{} competitors registered", roster.len());
        Ok(roster)
    }
}

/// Run a bracket over an already-resolved roster
pub fn run_bracket(
    roster: Vec<Fighter>,
    config: &BracketConfig,
) -> Result<TournamentResult, TournamentError> {
    let entrants = roster.len();
    let mut bracket = Bracket::new(roster);
    let mut rounds = Vec::new();

    while let Some(report) = bracket.play_round(config) {
        log_round(&report);
        rounds.push(report);
    }

    let champion = bracket.champion().cloned().ok_or(TournamentError::EmptyRoster)?;
    tracing::info!("{} is the champion", champion.name);

    Ok(TournamentResult {
        champion,
        entrants,
        rounds,
    })
}

fn log_round(report: &RoundReport) {
    tracing::info!("Round {}", report.round);
    for bout in &report.bouts {
        tracing::info!("  {} vs {}: {}", bout.winner.name, bout.loser.name, bout.summary);
    }
    if let Some(bye) = &report.bye {
        tracing::info!("  {} advances on a bye", bye.name);
    }
}
