mod autoplay;

use std::path::PathBuf;

use anyhow::{Context, Result};
use autoplay::{Chooser, Strategy};
use clap::Parser;
use env_logger::Env;
use log::info;
use model::{Game, GameConfig};

/// Plays a 2048 game from a seed with a scripted strategy and reports the result.
#[derive(Parser, Debug)]
struct Args {
    /// Path to a TOML rules file; defaults apply when omitted
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Seed for tile spawns and the random strategy
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Override the configured field size
    #[arg(long, value_name = "N")]
    size: Option<usize>,
    /// Stop after this many moves even if the game is not over
    #[arg(long, value_name = "N", default_value_t = 10_000)]
    max_moves: usize,
    #[arg(long, value_enum, default_value_t = Strategy::Greedy)]
    strategy: Strategy,
    /// Print the default rules as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", GameConfig::default_toml());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
        config.validate().context("invalid --size")?;
    }

    info!(
        "seed {}, strategy {:?}, move cap {}",
        args.seed, args.strategy, args.max_moves
    );
    let mut game = Game::seeded(config, args.seed);
    let mut chooser = Chooser::new(args.strategy, args.seed);
    let summary = autoplay::play(&mut game, &mut chooser, args.max_moves);

    print!("{}", game.field());
    println!(
        "moves: {}  score: {}  best tile: {}  won: {}  over: {}",
        summary.moves, summary.score, summary.best_tile, summary.won, summary.over
    );
    Ok(())
}
