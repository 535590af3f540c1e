//! Gomoku GUI
//!
//! A graphical interface for playing Gomoku against the computer or another player.

use std::path::PathBuf;

use clap::Parser;
use gomoku::ui::GomokuApp;
use gomoku::{
    ConfigError, GameConfig, GameController, GameMode, MoveOutcome, MoveStrategy, Player,
    RandomStrategy,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gomoku", about = "Five-in-a-row on a 15x15 board")]
struct Cli {
    /// TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Board size (lines per side)
    #[arg(long)]
    size: Option<usize>,

    /// Two humans on one board
    #[arg(long, conflicts_with = "human")]
    pvp: bool,

    /// Colour played by the human against the computer
    #[arg(long, value_parser = parse_player)]
    human: Option<Player>,

    /// Computer thinking delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed for the computer's random moves
    #[arg(long)]
    seed: Option<u64>,

    /// Play computer against computer in the terminal and print the result
    #[arg(long)]
    headless: bool,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("GUI error: {0}")]
    Gui(#[from] eframe::Error),
}

fn parse_player(s: &str) -> Result<Player, String> {
    match s.to_ascii_lowercase().as_str() {
        "black" | "b" => Ok(Player::Black),
        "white" | "w" => Ok(Player::White),
        other => Err(format!("unknown colour '{other}', expected black or white")),
    }
}

impl Cli {
    /// File values first, then command-line overrides
    fn resolve(&self) -> Result<GameConfig, ConfigError> {
        let mut config = GameConfig::load_or_default(&self.config)?;
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if self.pvp {
            config.mode = GameMode::PvP;
        } else if let Some(human) = self.human {
            config.mode = GameMode::PvE { human };
        }
        if let Some(delay) = self.delay_ms {
            config.strategy_delay_ms = delay;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = cli.resolve()?;
    info!(?config, "starting");

    if cli.headless {
        play_headless(config);
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )?;
    Ok(())
}

/// Both seats driven by the random strategy. The controller owns one seat;
/// a second strategy stands in for the human on the other.
fn play_headless(config: GameConfig) {
    let mut stand_in = match config.seed {
        Some(seed) => RandomStrategy::seeded(seed.wrapping_add(1)),
        None => RandomStrategy::new(),
    };
    let mut game = GameController::new(headless_config(config));

    while !game.status().is_terminal() {
        let Some(pos) = stand_in.select_move(game.board()) else {
            break;
        };
        if let MoveOutcome::Rejected(err) = game.submit_move(pos) {
            warn!(%pos, %err, "stand-in move rejected");
            break;
        }
    }

    for (pos, player) in game.history() {
        println!("{:>5} {pos}", player.name());
    }
    println!("\n{}", game.board());
    println!("{}", game.status());
}

/// Controller seat opens, and answers without a thinking delay
fn headless_config(config: GameConfig) -> GameConfig {
    GameConfig {
        mode: GameMode::PvE {
            human: config.first_player.opponent(),
        },
        strategy_delay_ms: 0,
        ..config
    }
}
