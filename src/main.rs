//! Go-Minimax: play Go between search agents from the command line.
//!
//! ## Usage
//!
//! - `go-minimax` - Play one stone-count vs liberty-count game on 9x9
//! - `go-minimax play --size 13 --games 5` - Play a series and print a summary
//! - `go-minimax tournament --sizes 9 13` - Both color orders on each size
//!
//! Set `RUST_LOG=info` to log every finished game, `debug` for every search decision.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::warn;

use go_minimax::agent::AgentKind;
use go_minimax::constants::{DEFAULT_DEPTH, DEFAULT_KOMI, DEFAULT_SIZE, VALID_SIZES};
use go_minimax::game::{MatchConfig, run_match_with, run_pairing};

/// Go-Minimax: Go agents driven by minimax with alpha-beta pruning
#[derive(Parser)]
#[command(name = "go-minimax")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a series of games between two agents
    Play(PlayArgs),
    /// Stone count vs liberty count on several board sizes, both color orders
    Tournament(TournamentArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH, value_parser = parse_depth)]
    depth: usize,
    /// Points added to White's score
    #[arg(long, default_value_t = DEFAULT_KOMI)]
    komi: f64,
    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct PlayArgs {
    /// Board size (9, 13 or 19)
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = parse_board_size)]
    size: usize,
    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,
    #[arg(long, value_enum, default_value_t = AgentKind::StoneCount)]
    black: AgentKind,
    #[arg(long, value_enum, default_value_t = AgentKind::LibertyCount)]
    white: AgentKind,
    /// Do not print the final board of each game
    #[arg(long)]
    quiet: bool,
    #[command(flatten)]
    search: SearchArgs,
}

#[derive(Args)]
struct TournamentArgs {
    /// Board sizes to test; unsupported sizes are skipped
    #[arg(long, num_args = 1.., default_values_t = VALID_SIZES.to_vec())]
    sizes: Vec<usize>,
    /// Games per size and color order
    #[arg(long, default_value_t = 5)]
    games: u32,
    #[command(flatten)]
    search: SearchArgs,
}

fn parse_board_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if VALID_SIZES.contains(&size) {
        Ok(size)
    } else {
        Err(format!("board size must be one of {VALID_SIZES:?}"))
    }
}

fn parse_depth(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("depth must be at least 1".to_string()),
        Ok(depth) => Ok(depth),
        Err(_) => Err(format!("`{s}` is not a number")),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play(args)) => run_play(args),
        Some(Commands::Tournament(args)) => run_tournament(args),
        None => run_play(PlayArgs {
            size: DEFAULT_SIZE,
            games: 1,
            black: AgentKind::StoneCount,
            white: AgentKind::LibertyCount,
            quiet: false,
            search: SearchArgs {
                depth: DEFAULT_DEPTH,
                komi: DEFAULT_KOMI,
                seed: None,
            },
        }),
    }
}

fn run_play(args: PlayArgs) -> Result<()> {
    let config = MatchConfig {
        board_size: args.size,
        depth: args.search.depth,
        komi: args.search.komi,
        games: args.games,
        seed: args.search.seed,
    };
    println!(
        "{} (Black) vs {} (White) on {}x{}, depth {}\n",
        args.black.display_name(),
        args.white.display_name(),
        config.board_size,
        config.board_size,
        config.depth
    );

    let analytics = run_match_with(&config, args.black, args.white, |game, board, record| {
        if !args.quiet {
            println!("{board}");
        }
        let result = match record.winner {
            Some(color) => format!("{color} wins"),
            None => "Draw".to_string(),
        };
        println!(
            "Game {}/{}: {result} ({:.1} - {:.1}) after {} moves",
            game + 1,
            config.games,
            record.black_score,
            record.white_score,
            record.moves
        );
    })
    .context("failed to start match")?;

    println!("\n{analytics}");
    Ok(())
}

fn run_tournament(args: TournamentArgs) -> Result<()> {
    let mut sizes: Vec<usize> = args
        .sizes
        .iter()
        .copied()
        .filter(|size| {
            let ok = VALID_SIZES.contains(size);
            if !ok {
                warn!("skipping unsupported board size {size}");
            }
            ok
        })
        .collect();
    if sizes.is_empty() {
        warn!("no supported board sizes given, using {DEFAULT_SIZE}");
        sizes.push(DEFAULT_SIZE);
    }

    let stone = AgentKind::StoneCount.display_name();
    let liberty = AgentKind::LibertyCount.display_name();
    let start = std::time::Instant::now();

    for size in sizes {
        println!("\n=== Running tournament on {size}x{size} board ===");
        let config = MatchConfig {
            board_size: size,
            depth: args.search.depth,
            komi: args.search.komi,
            games: args.games,
            seed: args.search.seed,
        };
        let analytics = run_pairing(&config, AgentKind::StoneCount, AgentKind::LibertyCount)
            .with_context(|| format!("tournament on {size}x{size} failed"))?;

        let total = analytics.total_games().max(1) as f64;
        let times = analytics.average_times();
        let memory = analytics.average_memory();
        println!("Total Games: {}", analytics.total_games());
        for name in [stone, liberty] {
            let wins = analytics.wins(name);
            println!("{name} wins: {wins} ({:.2}%)", wins as f64 / total * 100.0);
        }
        println!(
            "Draws: {} ({:.2}%)",
            analytics.draws(),
            analytics.draws() as f64 / total * 100.0
        );
        println!("Average time per move:");
        for name in [stone, liberty] {
            println!("  {name}: {:.4} seconds", times.get(name).copied().unwrap_or(0.0));
        }
        println!("Average memory usage per move:");
        for name in [stone, liberty] {
            println!("  {name}: {:.2} MB", memory.get(name).copied().unwrap_or(0.0));
        }
    }

    println!(
        "\nTournament completed in {:.2} seconds",
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
