//! Rank command - sort creatures by one stat

use anyhow::{Context, Result};
use clap::Args;

use arena_core::{Comparator, Fighter, Stat};

use crate::dex::{block_on, parse_ids, DexArgs};

#[derive(Args)]
pub struct RankArgs {
    /// Stat to rank by (hp, attack, defense, speed)
    #[arg(long, default_value = "speed")]
    pub stat: Stat,

    /// Creature identifiers
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,
}

/// Run rank command
pub fn run(args: RankArgs, dex: &DexArgs) -> Result<()> {
    let ids = parse_ids(&args.ids);
    let directory = dex.directory(dex.config());

    let fighters = block_on(directory.resolve_batch(&ids))?.context("Failed to resolve creatures")?;

    let ranked = rank(&fighters, args.stat);
    print_ranking(&ranked, args.stat);

    Ok(())
}

/// Highest stat first
fn rank(fighters: &[Fighter], stat: Stat) -> Vec<Fighter> {
    let mut sorted = Comparator::by_stat(stat).sort(fighters);
    sorted.reverse();
    sorted
}

fn print_ranking(ranked: &[Fighter], stat: Stat) {
    println!("Ranking by {}:", stat);
    for (i, f) in ranked.iter().enumerate() {
        println!("  {:>2}. {:<12} {}", i + 1, f.name, f.stat(stat));
    }

    let cmp = Comparator::by_stat(stat);
    if let Some(first) = ranked.first() {
        let best = ranked.iter().fold(first, |acc, f| cmp.max(acc, f));
        let worst = ranked.iter().fold(first, |acc, f| cmp.min(acc, f));
        println!("Highest {}: {}", stat, best.name);
        println!("Lowest {}: {}", stat, worst.name);
    }
}
