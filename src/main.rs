use std::io;
use std::time::Duration;

use battleship_hunter::logging::LogFacade;
use battleship_hunter::prelude::*;
use battleship_hunter::stats::run_games;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Battleship against a hunt/target search AI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch the hunter play one game, shot by shot.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = TargetingKind::Directional)]
        targeting: TargetingKind,
        #[arg(long, value_enum, default_value_t = HuntingKind::Checkerboard)]
        hunting: HuntingKind,
        /// Step automatically instead of waiting for Enter.
        #[arg(long)]
        auto: bool,
        /// Pause between frames in auto mode.
        #[arg(long, default_value_t = 40)]
        delay_ms: u64,
    },
    /// Play many games quietly and print average scores.
    Bench {
        #[arg(long, default_value_t = 1000)]
        games: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = TargetingKind::Directional)]
        targeting: TargetingKind,
        #[arg(long, value_enum, default_value_t = HuntingKind::Checkerboard)]
        hunting: HuntingKind,
    },
}

fn seed_or_random(seed: Option<u64>) -> u64 {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            s
        }
        None => rand::random(),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            targeting,
            hunting,
            auto,
            delay_ms,
        } => {
            let seed = seed_or_random(seed);
            let config = HunterConfig::new(hunting, targeting);
            let hunter = Hunter::seeded(config, seed.wrapping_add(1))
                .with_logger(LogFacade::new("hunter"));
            let mut placement = SmallRng::seed_from_u64(seed);
            let mut game = GameEngine::random(&mut placement, hunter)?
                .with_logger(LogFacade::new("game"));
            println!("GAME BOARD\n{}\n", game.ocean());

            let stdin = io::stdin();
            let mut ui = TerminalUi::new(stdin.lock(), io::stdout(), 1);
            if auto {
                ui = ui.auto(Duration::from_millis(delay_ms));
            }
            let summary = game.run_with(&mut ui)?;
            match summary.status {
                GameStatus::Won => println!(
                    "Game #1 finished! Accuracy: {} / {} ({:.2}%)",
                    summary.stats.shots_hit,
                    summary.stats.total_shots,
                    summary.stats.accuracy()
                ),
                GameStatus::InProgress => println!("Game abandoned."),
            }
        }
        Commands::Bench {
            games,
            seed,
            targeting,
            hunting,
        } => {
            let seed = seed_or_random(seed);
            let config = HunterConfig::new(hunting, targeting);
            let report = run_games(config, games, seed)?.report();
            println!("Games: {}", report.games);
            println!("Average Shots Hit: {:.4}", report.avg_shots_hit);
            println!("Average Total Shots: {:.4}", report.avg_total_shots);
            println!("Average Accuracy: {:.4}", report.avg_accuracy);
            println!(
                "Average Targeting Fallbacks: {:.4}",
                report.avg_targeting_fallbacks
            );
        }
    }
    Ok(())
}
