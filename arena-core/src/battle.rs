//! Turn-based battle resolution
//!
//! Fully deterministic: the same two fighters always produce the same
//! outcome. The faster fighter strikes first (ties go to `a`), then the two
//! alternate. Each strike deals `max(1, (attack - defense) * 0.5)`.

use crate::fighter::Fighter;

/// Safety cap on damage steps per battle
pub const MAX_ROUNDS: u32 = 50;

/// Minimum damage dealt by any strike
const DAMAGE_FLOOR: f64 = 1.0;

/// Result of a single battle
///
/// `winner` and `loser` borrow the two input records.
#[derive(Clone, Debug)]
pub struct BattleOutcome<'a> {
    pub winner: &'a Fighter,
    pub loser: &'a Fighter,
    /// Number of damage steps executed
    pub rounds: u32,
    pub summary: String,
}

impl BattleOutcome<'_> {
    /// True if the first argument won
    pub fn first_won(&self, a: &Fighter) -> bool {
        std::ptr::eq(self.winner, a)
    }
}

/// Damage dealt by one strike of `attacker` against `defender`
pub fn damage(attacker: &Fighter, defender: &Fighter) -> f64 {
    let raw = (attacker.attack as f64 - defender.defense as f64) * 0.5;
    raw.max(DAMAGE_FLOOR)
}

/// Resolve a battle with the default round cap
pub fn battle<'a>(a: &'a Fighter, b: &'a Fighter) -> BattleOutcome<'a> {
    battle_with_limit(a, b, MAX_ROUNDS)
}

/// Resolve a battle, stopping after at most `max_rounds` damage steps
/// (a cap of 0 is raised to 1).
///
/// Health is tracked per original fighter, not per role. When the loop
/// stops, `a` wins iff its health is still positive; this also holds at the
/// round cap, even if `b` has more health left.
pub fn battle_with_limit<'a>(a: &'a Fighter, b: &'a Fighter, max_rounds: u32) -> BattleOutcome<'a> {
    let max_rounds = max_rounds.max(1);

    let mut a_health = a.hp as f64;
    let mut b_health = b.hp as f64;
    let mut a_attacks = a.speed >= b.speed;
    let mut rounds = 0u32;

    while a_health > 0.0 && b_health > 0.0 && rounds < max_rounds {
        if a_attacks {
            b_health -= damage(a, b);
        } else {
            a_health -= damage(b, a);
        }
        rounds += 1;
        a_attacks = !a_attacks;
    }

    let (winner, loser) = if a_health > 0.0 { (a, b) } else { (b, a) };

    BattleOutcome {
        winner,
        loser,
        rounds,
        summary: format!("{} defeated {} in {} rounds", winner.name, loser.name, rounds),
    }
}
