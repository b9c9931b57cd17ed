//! The airctl command-line tool: gesture-driven desktop control.
//!
//! Usage:
//!   airctl run [OPTIONS]       Drive the desktop from a live detector stream
//!   airctl replay <PATH>       Replay a recorded observation stream
//!   airctl check               Check system capabilities

use std::path::PathBuf;

use airctl_common::config::AppConfig;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "airctl",
    about = "Hand-gesture control for the desktop",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive the desktop from a live landmark detector stream
    Run {
        /// Observation stream input: a path, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Effect backend: uinput|null
        #[arg(short, long, default_value = "uinput")]
        backend: String,

        /// Config file path (defaults to the standard location)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Frame processing rate (Hz)
        #[arg(long, default_value = "30")]
        fps: u32,

        /// Record the incoming observation stream to a JSONL file
        #[arg(long)]
        record: Option<PathBuf>,
    },

    /// Replay a recorded observation stream, printing dispatched actions
    Replay {
        /// Path to the recorded stream (JSONL)
        path: PathBuf,

        /// Config file path (defaults to the standard location)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Check system capabilities
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.command {
        Commands::Run { config, .. } | Commands::Replay { config, .. } => config.clone(),
        Commands::Check => None,
    };
    let config = match &config_path {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };

    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    airctl_common::logging::init_logging(&logging)?;

    match cli.command {
        Commands::Run {
            input,
            backend,
            fps,
            record,
            ..
        } => commands::run::run(input, backend, config, fps, record).await,
        Commands::Replay { path, .. } => commands::replay::run(path, config),
        Commands::Check => commands::check::run(),
    }
}
