//! Kalah engine CLI
//!
//! Analyses one position and prints the move the engine would play.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kalah::{AIEngine, Board, EngineConfig, GameBoard};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Position as 14 slot counts (pits 0-5, store 6, pits 7-12, store 13)
    /// followed by "top" or "bottom". Defaults to the starting position.
    #[arg(short, long)]
    position: Option<String>,

    /// Time allowance per move in milliseconds
    #[arg(short, long)]
    time_ms: Option<u64>,

    /// Stop iterative deepening at this depth
    #[arg(long)]
    max_depth: Option<u32>,

    /// Search without alpha-beta pruning
    #[arg(long)]
    no_pruning: bool,

    /// TOML config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    show_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(args) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(ms) = args.time_ms {
        config.time_limit_ms = ms;
    }
    if args.max_depth.is_some() {
        config.max_depth = args.max_depth;
    }
    if args.no_pruning {
        config.pruning = false;
    }
    config.validate()?;

    if args.show_config {
        print!("{}", toml::to_string(&config)?);
        return Ok(());
    }

    let board: Board = match &args.position {
        Some(text) => text
            .parse()
            .with_context(|| format!("parsing position {text:?}"))?,
        None => Board::new(),
    };

    println!("{}\n", board.diagram());
    if board.game_over() {
        match board.winner() {
            Some(side) => println!("Game over: {side:?} wins"),
            None => println!("Game over: draw"),
        }
        return Ok(());
    }

    let engine = AIEngine::with_config(config);
    let result = engine.choose_move_with_stats(&board, engine.config().time_limit_ms);

    println!("Best move: {}", result.best_move);
    println!("Score:     {:+}", result.score);
    println!(
        "Depth:     {}{}",
        result.depth,
        if result.terminal { " (game decided)" } else { "" }
    );
    println!(
        "Nodes:     {} ({} cutoffs)",
        result.stats.nodes, result.stats.cutoffs
    );
    println!(
        "Time:      {}ms{}",
        result.time_ms,
        if result.timed_out { " (deadline reached)" } else { "" }
    );
    Ok(())
}
