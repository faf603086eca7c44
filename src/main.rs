use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use connect_four_engine::config::AppConfig;
use connect_four_engine::game::Player;
use connect_four_engine::session::Session;
use connect_four_engine::ui::App;

/// Play Connect Four against an alpha-beta minimax engine.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four against the engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override search depth in plies
    #[arg(long)]
    depth: Option<u8>,

    /// Colour the human plays: red or yellow
    #[arg(long)]
    human: Option<String>,

    /// Let the engine make the first move
    #[arg(long)]
    engine_first: bool,

    /// Write logs to stderr (redirect it, the TUI owns the screen)
    #[arg(long)]
    log: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn parse_player(name: &str) -> Result<Player> {
    match name.to_ascii_lowercase().as_str() {
        "red" | "r" => Ok(Player::Red),
        "yellow" | "y" => Ok(Player::Yellow),
        other => anyhow::bail!("unknown colour '{}' (expected 'red' or 'yellow')", other),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    if cli.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(io::stderr)
            .init();
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(name) = &cli.human {
        config.play.human = parse_player(name)?;
    }
    if cli.engine_first {
        config.play.human_first = false;
    }
    config.validate().context("invalid configuration")?;

    let session = Session::new(
        config.board,
        config.search.clone(),
        config.play.human,
        config.play.human_first,
    )
    .context("starting game session")?;

    run(App::new(session))
}

fn run(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let res = app.run(&mut terminal);

    // Restore terminal, always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running game")
}
