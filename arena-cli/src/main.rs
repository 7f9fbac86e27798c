//! ARENA CLI - Command-line interface
//!
//! Commands:
//! - tournament: Run a single-elimination tournament
//! - battle: Resolve a single battle between two creatures
//! - rank: Sort creatures by one stat

mod battle_cmd;
mod dex;
mod rank_cmd;
mod tournament_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use battle_cmd::BattleArgs;
use dex::DexArgs;
use rank_cmd::RankArgs;
use tournament_cmd::TournamentArgs;

#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Creature tournament simulator backed by a public creature API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    dex: DexArgs,

    /// Random seed (used by --shuffle)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log cache hits, fetches and every battle
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single-elimination tournament
    Tournament(TournamentArgs),
    /// Resolve a single battle
    Battle(BattleArgs),
    /// Sort creatures by one stat
    Rank(RankArgs),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Tournament(args) => tournament_cmd::run(args, &cli.dex, cli.seed),
        Commands::Battle(args) => battle_cmd::run(args, &cli.dex),
        Commands::Rank(args) => rank_cmd::run(args, &cli.dex),
    };

    if let Err(e) = result {
        tracing::error!("{:#}", e);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
