//! tweenkit CLI: inspect and export keyframe scenes.
//!
//! Usage:
//!   tweenkit export <SCENE>      Export a scene as animated SVG
//!   tweenkit describe <SCENE>    Print a text description of a scene
//!   tweenkit info <SCENE>        Show scene statistics
//!   tweenkit validate <SCENE>    Check a scene for errors
//!   tweenkit sample <SCENE>      Print entity state at a tick as JSON
//!   tweenkit config              Show the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tweenkit_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "tweenkit",
    about = "Keyframe 2D scene animation toolkit",
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
    /// Export a scene as declarative SVG
    Export {
        /// Path to the scene JSON file
        path: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Ticks per second (defaults to the configured rate)
        #[arg(long)]
        rate: Option<u32>,

        /// Loop the animation forever (overrides the configured default)
        #[arg(long = "loop", overrides_with = "no_loop")]
        looping: bool,

        /// Play the animation once (overrides the configured default)
        #[arg(long = "no-loop", overrides_with = "looping")]
        no_loop: bool,

        /// Background color as r,g,b in [0, 1] (defaults to the scene's)
        #[arg(long)]
        background: Option<String>,

        /// Only export the named shape (repeatable)
        #[arg(long = "only")]
        only: Vec<String>,
    },

    /// Print a text description of a scene
    Describe {
        /// Path to the scene JSON file
        path: PathBuf,

        /// Ticks per second (defaults to the configured rate)
        #[arg(long)]
        rate: Option<u32>,
    },

    /// Show scene statistics
    Info {
        /// Path to the scene JSON file
        path: PathBuf,
    },

    /// Build a scene and report the first error
    Validate {
        /// Path to the scene JSON file
        path: PathBuf,
    },

    /// Print every shape's state at a tick as JSON
    Sample {
        /// Path to the scene JSON file
        path: PathBuf,

        /// Tick to sample
        #[arg(short, long)]
        tick: i64,
    },

    /// Show the effective configuration
    Config {
        /// Write the default configuration to the config path
        #[arg(long)]
        write_default: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    tweenkit_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Export {
            path,
            output,
            rate,
            looping,
            no_loop,
            background,
            only,
        } => commands::export::run(
            &config.export,
            path,
            output,
            rate,
            looping,
            no_loop,
            background,
            only,
        ),
        Commands::Describe { path, rate } => commands::describe::run(&config.export, path, rate),
        Commands::Info { path } => commands::info::run(path),
        Commands::Validate { path } => commands::validate::run(path),
        Commands::Sample { path, tick } => commands::sample::run(path, tick),
        Commands::Config { write_default } => commands::config::run(&config, write_default),
    }
}
