use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four_engine::ai::{Agent, MinimaxAgent, RandomAgent};
use connect_four_engine::arena::{play_game, MatchStats};
use connect_four_engine::config::AppConfig;
use connect_four_engine::game::Player;

/// Pit the minimax engine against another agent without a UI.
#[derive(Parser)]
#[command(name = "arena", about = "Run headless Connect Four matches")]
struct Cli {
    /// Opponent for the engine: random or minimax
    #[arg(long, default_value = "random")]
    opponent: String,

    /// Number of games; the engine alternates colours
    #[arg(long, default_value_t = 20)]
    games: usize,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override search depth in plies
    #[arg(long)]
    depth: Option<u8>,

    /// Search depth of a minimax opponent (defaults to the engine's)
    #[arg(long)]
    opponent_depth: Option<u8>,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default, serde::Serialize)]
struct Summary {
    engine: String,
    opponent: String,
    depth: u8,
    engine_wins: usize,
    opponent_wins: usize,
    draws: usize,
    average_game_length: f32,
    by_colour: MatchStats,
    seconds: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    if cli.games == 0 {
        bail!("--games must be at least 1");
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    config.validate().context("invalid configuration")?;

    let dims = config.board;
    let mut engine = MinimaxAgent::new(dims, config.search.clone());
    let mut opponent: Box<dyn Agent> = match cli.opponent.as_str() {
        "random" => match cli.seed {
            Some(seed) => Box::new(RandomAgent::with_seed(seed)),
            None => Box::new(RandomAgent::new()),
        },
        "minimax" => {
            let mut search = config.search.clone();
            if let Some(depth) = cli.opponent_depth {
                search.depth = depth;
            }
            search.validate().context("invalid opponent depth")?;
            Box::new(MinimaxAgent::new(dims, search))
        }
        other => bail!("unknown opponent '{}' (expected 'random' or 'minimax')", other),
    };

    let mut summary = Summary {
        engine: engine.name().to_string(),
        opponent: opponent.name().to_string(),
        depth: config.search.depth,
        ..Default::default()
    };

    let started = Instant::now();
    for game in 0..cli.games {
        // Red always opens; the engine takes Red on even games.
        let engine_colour = if game % 2 == 0 { Player::Red } else { Player::Yellow };
        let record = match engine_colour {
            Player::Red => play_game(&mut engine, opponent.as_mut(), dims, Player::Red),
            Player::Yellow => play_game(opponent.as_mut(), &mut engine, dims, Player::Red),
        }
        .with_context(|| format!("playing game {}", game + 1))?;

        match record.winner {
            Some(p) if p == engine_colour => summary.engine_wins += 1,
            Some(_) => summary.opponent_wins += 1,
            None => summary.draws += 1,
        }
        summary.by_colour.record(&record);

        if !cli.json {
            println!(
                "game {:>3}: engine as {:<6} {:<12} in {} moves",
                game + 1,
                engine_colour.name(),
                match record.winner {
                    Some(p) if p == engine_colour => "won",
                    Some(_) => "lost",
                    None => "drew",
                },
                record.game_length()
            );
        }
    }
    summary.seconds = started.elapsed().as_secs_f64();
    summary.average_game_length = summary.by_colour.average_game_length();

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("serializing summary")?
        );
    } else {
        println!();
        println!(
            "{} (depth {}) vs {} on {}: {} won, {} lost, {} drawn",
            summary.engine,
            summary.depth,
            summary.opponent,
            dims,
            summary.engine_wins,
            summary.opponent_wins,
            summary.draws
        );
        println!(
            "Red {:.0}%  Yellow {:.0}%  Draw {:.0}%  avg length {:.1}  ({:.1}s)",
            summary.by_colour.win_rate(Player::Red) * 100.0,
            summary.by_colour.win_rate(Player::Yellow) * 100.0,
            summary.by_colour.draw_rate() * 100.0,
            summary.average_game_length,
            summary.seconds
        );
    }

    Ok(())
}
