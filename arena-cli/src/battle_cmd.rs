//! Battle command - resolve one battle between two creatures

use anyhow::{Context, Result};
use clap::Args;

use arena_core::{battle_with_limit, damage, Fighter, FighterId};

use crate::dex::{block_on, DexArgs};

#[derive(Args)]
pub struct BattleArgs {
    /// First creature (wins speed ties)
    pub first: String,

    /// Second creature
    pub second: String,

    /// Maximum damage steps
    #[arg(long, default_value = "50")]
    pub max_rounds: u32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run battle command
pub fn run(args: BattleArgs, dex: &DexArgs) -> Result<()> {
    let ids: Vec<FighterId> = vec![first_id(&args), second_id(&args)];
    let directory = dex.directory(dex.config());

    let fighters = block_on(directory.resolve_batch(&ids))?.context("Failed to resolve combatants")?;
    let (a, b) = match fighters.as_slice() {
        [a, b] => (a, b),
        _ => anyhow::bail!("expected two combatants, got {}", fighters.len()),
    };

    let outcome = battle_with_limit(a, b, args.max_rounds);

    if args.json {
        #[derive(serde::Serialize)]
        struct JsonOutput<'a> {
            winner: &'a Fighter,
            loser: &'a Fighter,
            rounds: u32,
            summary: &'a str,
        }

        let output = JsonOutput {
            winner: outcome.winner,
            loser: outcome.loser,
            rounds: outcome.rounds,
            summary: &outcome.summary,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_matchup(a, b);
        println!("\n{}", outcome.summary);
    }

    Ok(())
}

fn first_id(args: &BattleArgs) -> FighterId {
    args.first.parse().unwrap_or_else(|never| match never {})
}

fn second_id(args: &BattleArgs) -> FighterId {
    args.second.parse().unwrap_or_else(|never| match never {})
}

fn print_matchup(a: &Fighter, b: &Fighter) {
    println!("{} vs {}", a.name, b.name);
    for f in [a, b] {
        println!(
            "  {:<12} hp={:<4} atk={:<4} def={:<4} spd={:<4}",
            f.name, f.hp, f.attack, f.defense, f.speed
        );
    }
    println!("  {} hits {} for {:.1}", a.name, b.name, damage(a, b));
    println!("  {} hits {} for {:.1}", b.name, a.name, damage(b, a));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_from_args() {
        let args = BattleArgs {
            first: "6".to_string(),
            second: "blastoise".to_string(),
            max_rounds: 50,
            json: false,
        };
        assert_eq!(first_id(&args), FighterId::Numeric(6));
        assert_eq!(second_id(&args), FighterId::from("blastoise"));
    }
}
