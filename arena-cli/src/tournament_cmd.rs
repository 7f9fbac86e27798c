//! Tournament command - run a single-elimination bracket
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), prepare_roster(), run_tournament(), report_results()
//! - Level 3: shuffle_roster()
//! - Level 4: formatting utilities

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use arena_core::FighterId;
use arena_tournament::{BracketConfig, Tournament, TournamentResult};

use crate::dex::{block_on, parse_ids, DexArgs};

/// Bulbasaur, Charmander, Squirtle, Pikachu, Charizard, Blastoise, Gengar, Gyarados
const DEFAULT_ROSTER: [&str; 8] = ["1", "4", "7", "25", "6", "9", "94", "130"];

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct TournamentArgs {
    /// Creature identifiers (numeric ids or names), in bracket order
    #[arg(value_name = "ID")]
    pub ids: Vec<String>,

    /// Bound each resolution to this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Compute the battles of each round in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Shuffle the entrants before pairing (seeded by --seed)
    #[arg(long)]
    pub shuffle: bool,

    /// Maximum damage steps per battle
    #[arg(long, default_value = "50")]
    pub max_rounds: u32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run tournament command
///
/// This function reads like a table of contents:
/// 1. Build bracket and directory configuration
/// 2. Prepare the entrant list
/// 3. Run the tournament
/// 4. Report results
pub fn run(args: TournamentArgs, dex: &DexArgs, seed: Option<u64>) -> Result<()> {
    let config = build_config(&args);
    let ids = prepare_roster(&args, seed);

    tracing::info!(
        "Starting tournament: {} entrants, max_rounds={}, parallel={}",
        ids.len(),
        config.max_rounds,
        config.parallel
    );

    let directory = dex.directory(dex.config_with_timeout(args.timeout_ms));
    let tournament = Tournament::new(&directory, config);

    let result = block_on(tournament.run_tournament(&ids))?.context("Tournament aborted")?;

    report_results(&result, directory.cache_size(), &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Build bracket configuration from command arguments
fn build_config(args: &TournamentArgs) -> BracketConfig {
    let mut config = BracketConfig::default().with_max_rounds(args.max_rounds);
    config.parallel = args.parallel;
    if let Some(ms) = args.timeout_ms {
        config = config.with_resolve_timeout(Duration::from_millis(ms));
    }
    config
}

/// Entrant list: user-supplied or the default roster, optionally shuffled
fn prepare_roster(args: &TournamentArgs, seed: Option<u64>) -> Vec<FighterId> {
    let raw: Vec<String> = if args.ids.is_empty() {
        DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect()
    } else {
        args.ids.clone()
    };

    let mut ids = parse_ids(&raw);
    if args.shuffle {
        shuffle_roster(&mut ids, seed);
    }
    ids
}

/// Report tournament results
fn report_results(result: &TournamentResult, cache_size: usize, args: &TournamentArgs) -> Result<()> {
    if args.json {
        print_json_results(result, cache_size)
    } else {
        print_text_results(result, cache_size);
        Ok(())
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Shuffle entrants with a seeded or random RNG
fn shuffle_roster(ids: &mut [FighterId], seed: Option<u64>) {
    let mut rng = create_rng(seed);
    ids.shuffle(&mut rng);
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Print results as JSON
fn print_json_results(result: &TournamentResult, cache_size: usize) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        #[serde(flatten)]
        result: &'a TournamentResult,
        battles_fought: usize,
        cache_size: usize,
    }

    let output = JsonOutput {
        result,
        battles_fought: result.battles_fought(),
        cache_size,
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize results")?;
    println!("{}", json);
    Ok(())
}

/// Print round-by-round narration
fn print_text_results(result: &TournamentResult, cache_size: usize) {
    println!("\n=== Tournament ===");
    println!("{} competitors registered", result.entrants);

    for round in &result.rounds {
        println!("\nROUND {}", round.round);
        for bout in &round.bouts {
            println!("  {} vs {}", bout.winner.name, bout.loser.name);
            println!("    {}", bout.summary);
        }
        if let Some(bye) = &round.bye {
            println!("  {} advances automatically", bye.name);
        }
    }

    let champion = &result.champion;
    println!("\n{} is the CHAMPION!", champion.name);
    println!("\nChampion stats:");
    println!("  id:      {}", champion.id);
    println!("  hp:      {}", champion.hp);
    println!("  attack:  {}", champion.attack);
    println!("  defense: {}", champion.defense);
    println!("  speed:   {}", champion.speed);
    println!("  types:   {}", champion.types.join(", "));
    println!("\nBattles fought: {}", result.battles_fought());
    println!("Creatures in cache: {}", cache_size);
}

// ============================================================================
// TESTS
// ============================================================================
