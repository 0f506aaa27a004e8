use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use hopper_mechanics::GamePhase;
use hopper_runner::{init_logging, InputScript, LevelConfig, Session, TICKS_PER_SECOND};

#[derive(Parser)]
#[command(version, about = "Headless 2D platformer simulation", long_about = None)]
pub struct Cli {
    /// Level file to load (TOML); the built-in sample level if omitted
    #[arg(short, long)]
    level: Option<PathBuf>,

    /// Input script to play (TOML); the built-in sample script if omitted
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// How many simulation ticks to run (60 per second)
    #[arg(short, long, default_value_t = 1800)]
    ticks: u64,

    /// Also log to a file in the data directory
    #[arg(long)]
    log_file: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging("cli", cli.log_file).context("failed to initialize logging")?;

    let level = match &cli.level {
        Some(path) => LevelConfig::load(path)
            .with_context(|| format!("failed to load level {}", path.display()))?,
        None => {
            info!("no level given, using the sample level");
            LevelConfig::sample()
        }
    };
    let script = match &cli.script {
        Some(path) => InputScript::load(path)
            .with_context(|| format!("failed to load script {}", path.display()))?,
        None => {
            info!("no script given, using the sample script");
            InputScript::sample()
        }
    };

    let mut session = Session::new(level.build());
    session.run_script(&script, cli.ticks)?;

    let outcome = session.outcome();
    let seconds = outcome.ticks as f32 / TICKS_PER_SECOND as f32;
    println!(
        "Ran {} ticks ({seconds:.1}s), {} events executed",
        outcome.ticks, outcome.events_executed
    );
    println!(
        "Player ended at ({:.2}, {:.2}) with {} token(s) collected",
        outcome.player_position.x, outcome.player_position.y, outcome.tokens_collected
    );
    match outcome.phase {
        GamePhase::Victory => println!("Outcome: level complete"),
        GamePhase::Respawning { .. } => println!("Outcome: waiting to respawn"),
        GamePhase::Playing => println!("Outcome: still playing"),
    }

    Ok(())
}
