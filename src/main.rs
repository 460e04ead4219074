//! Binary entrypoint for the Delve dungeon crawler.
//!
//! Loads the content catalog, then plays one session on stdin/stdout.
//! Logs go to stderr (or `--log-file`) so they never mix with the game text.

use anyhow::{Context, Result};
use clap::Parser;
use delve::build_info;
use delve::core::constants::{DATA_PATH_ENV, DEFAULT_DATA_PATH};
use delve::core::{GameConfig, RunController};
use delve::ui::TerminalFrontend;
use log::{error, info};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "delve")]
#[command(about = "A turn-based text dungeon crawler")]
#[command(version, long_version = build_info::LONG_VERSION)]
struct Cli {
    /// Game data (heroes, enemies, equipment, room descriptions)
    #[arg(short, long, env = DATA_PATH_ENV, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Seed for a reproducible dungeon and battle rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Draw health bars without colours
    #[arg(long)]
    no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            data_path: self.data.clone(),
            seed: self.seed,
            color: !self.no_color,
        }
    }
}

fn init_logging(verbosity: u8, log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    let base_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    // RUST_LOG still wins for targeted filters
    builder.parse_env("RUST_LOG");

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_ref())?;

    let config = cli.game_config();
    info!("starting delve {}", build_info::LONG_VERSION);

    let catalog = config.load_catalog().with_context(|| {
        format!(
            "failed to load game data from {} (set --data or {})",
            config.data_path.display(),
            DATA_PATH_ENV
        )
    })?;

    let stdin = io::stdin();
    let frontend = TerminalFrontend::new(stdin.lock(), io::stdout(), config.color);
    let mut controller = RunController::new(catalog, config.dice(), frontend);

    match controller.play() {
        Ok(report) => {
            info!(
                "session finished: {:?}, {} rooms entered, {} enemies defeated",
                report.ending, report.rooms_entered, report.enemies_defeated
            );
            Ok(())
        }
        Err(e) => {
            error!("session aborted: {e}");
            Err(e).context("game session aborted")
        }
    }
}
