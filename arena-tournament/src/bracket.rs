//! Single-elimination bracket state machine
//!
//! Level 2 - Phases and Level 3 - Steps

use arena_core::{battle_with_limit, Fighter};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::BracketConfig;

/// One battle fought inside a round
#[derive(Clone, Debug, Serialize)]
pub struct Bout {
    pub winner: Fighter,
    pub loser: Fighter,
    /// Damage steps executed
    pub rounds: u32,
    pub summary: String,
}

/// Everything that happened in one bracket round
#[derive(Clone, Debug, Serialize)]
pub struct RoundReport {
    /// 1-based bracket round
    pub round: u32,
    /// Battles in pairing order
    pub bouts: Vec<Bout>,
    /// Unpaired entrant that advanced without a battle
    pub bye: Option<Fighter>,
}

impl RoundReport {
    /// Entrants advancing to the next round, in order
    pub fn advancers(&self) -> Vec<&Fighter> {
        self.bouts
            .iter()
            .map(|b| &b.winner)
            .chain(self.bye.iter())
            .collect()
    }
}

/// Current roster and round number
#[derive(Clone, Debug)]
pub struct Bracket {
    roster: Vec<Fighter>,
    round: u32,
}

impl Bracket {
    /// Start a bracket at round 1. Entrant order decides pairings.
    pub fn new(roster: Vec<Fighter>) -> Self {
        Self { roster, round: 1 }
    }

    pub fn roster(&self) -> &[Fighter] {
        &self.roster
    }

    /// Round that will be played next
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_finished(&self) -> bool {
        self.roster.len() <= 1
    }

    /// Sole remaining entrant once the bracket is finished
    pub fn champion(&self) -> Option<&Fighter> {
        if self.is_finished() {
            self.roster.first()
        } else {
            None
        }
    }

    /// Play one round and replace the roster with its advancers.
    ///
    /// Returns `None` when the bracket is already finished.
    pub fn play_round(&mut self, config: &BracketConfig) -> Option<RoundReport> {
        if self.is_finished() {
            return None;
        }

        let bouts = fight_pairs(&self.roster, config);
        let bye = self.roster.chunks_exact(2).remainder().first().cloned();

        let report = RoundReport {
            round: self.round,
            bouts,
            bye,
        };

        self.roster = report.advancers().into_iter().cloned().collect();
        self.round += 1;

        Some(report)
    }
}

/// Battle `(0,1), (2,3), ...`; a trailing odd entrant is left out
fn fight_pairs(roster: &[Fighter], config: &BracketConfig) -> Vec<Bout> {
    if config.parallel {
        roster
            .par_chunks_exact(2)
            .map(|pair| fight(&pair[0], &pair[1], config.max_rounds))
            .collect()
    } else {
        roster
            .chunks_exact(2)
            .map(|pair| fight(&pair[0], &pair[1], config.max_rounds))
            .collect()
    }
}

fn fight(a: &Fighter, b: &Fighter, max_rounds: u32) -> Bout {
    let outcome = battle_with_limit(a, b, max_rounds);
    Bout {
        winner: outcome.winner.clone(),
        loser: outcome.loser.clone(),
        rounds: outcome.rounds,
        summary: outcome.summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(id: u64, name: &str, hp: u32, attack: u32, defense: u32, speed: u32) -> Fighter {
        Fighter::new(id, name, hp, attack, defense, speed)
    }

    fn names(fighters: &[Fighter]) -> Vec<&str> {
        fighters.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_single_entrant_is_champion_without_battles() {
        let mut bracket = Bracket::new(vec![fighter(1, "X", 10, 10, 10, 10)]);
        assert!(bracket.is_finished());
        assert_eq!(bracket.champion().map(|f| f.name.as_str()), Some("X"));
        assert!(bracket.play_round(&BracketConfig::default()).is_none());
        assert_eq!(bracket.round(), 1);
    }

    #[test]
    fn test_empty_bracket_has_no_champion() {
        let bracket = Bracket::new(Vec::new());
        assert!(bracket.is_finished());
        assert!(bracket.champion().is_none());
    }

    #[test]
    fn test_odd_entrant_gets_bye() {
        let a = fighter(1, "A", 100, 90, 10, 50);
        let b = fighter(2, "B", 100, 10, 10, 40);
        let c = fighter(3, "C", 100, 20, 60, 30);
        let mut bracket = Bracket::new(vec![a, b, c]);
        let config = BracketConfig::default();

        let first = bracket.play_round(&config).unwrap();
        assert_eq!(first.round, 1);
        assert_eq!(first.bouts.len(), 1);
        assert_eq!(first.bouts[0].winner.name, "A");
        assert_eq!(first.bouts[0].loser.name, "B");
        assert_eq!(first.bye.as_ref().map(|f| f.name.as_str()), Some("C"));
        assert_eq!(names(bracket.roster()), vec!["A", "C"]);

        let second = bracket.play_round(&config).unwrap();
        assert_eq!(second.round, 2);
        assert_eq!(second.bouts.len(), 1);
        assert_eq!(second.bouts[0].winner.name, "A");
        assert_eq!(second.bouts[0].loser.name, "C");
        assert!(second.bye.is_none());

        assert!(bracket.is_finished());
        assert_eq!(bracket.champion().map(|f| f.name.as_str()), Some("A"));
        assert_eq!(bracket.round(), 3);
    }

    #[test]
    fn test_advancers_keep_pairing_order() {
        // Second entrant of each pair is the stronger one
        let roster = vec![
            fighter(1, "w1", 10, 1, 0, 1),
            fighter(2, "s1", 100, 50, 0, 99),
            fighter(3, "w2", 10, 1, 0, 1),
            fighter(4, "s2", 100, 50, 0, 99),
            fighter(5, "w3", 10, 1, 0, 1),
            fighter(6, "s3", 100, 50, 0, 99),
            fighter(7, "odd", 10, 1, 0, 1),
        ];
        let mut bracket = Bracket::new(roster);

        let report = bracket.play_round(&BracketConfig::default()).unwrap();
        let advancing: Vec<&str> = report.advancers().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(advancing, vec!["s1", "s2", "s3", "odd"]);
        assert_eq!(names(bracket.roster()), vec!["s1", "s2", "s3", "odd"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let roster: Vec<Fighter> = (0..13u32)
            .map(|i| {
                fighter(
                    i as u64,
                    &format!("f{}", i),
                    40 + (i * 17) % 90,
                    30 + (i * 29) % 100,
                    20 + (i * 11) % 80,
                    10 + (i * 37) % 120,
                )
            })
            .collect();

        let mut sequential = Bracket::new(roster.clone());
        let mut parallel = Bracket::new(roster);

        while !sequential.is_finished() {
            let s = sequential.play_round(&BracketConfig::sequential()).unwrap();
            let p = parallel.play_round(&BracketConfig::parallel()).unwrap();
            let s_summaries: Vec<&str> = s.bouts.iter().map(|b| b.summary.as_str()).collect();
            let p_summaries: Vec<&str> = p.bouts.iter().map(|b| b.summary.as_str()).collect();
            assert_eq!(s_summaries, p_summaries);
        }

        assert!(parallel.is_finished());
        assert_eq!(sequential.champion(), parallel.champion());
    }

    #[test]
    fn test_round_cap_is_forwarded() {
        let a = fighter(1, "A", 200, 1, 100, 1);
        let b = fighter(2, "B", 200, 1, 100, 1);
        let mut bracket = Bracket::new(vec![a, b]);

        let report = bracket
            .play_round(&BracketConfig::default().with_max_rounds(5))
            .unwrap();
        assert_eq!(report.bouts[0].rounds, 5);
        assert_eq!(report.bouts[0].winner.name, "A");
    }
}
