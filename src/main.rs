use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pitboard::cli;
use pitboard::config::PitboardConfig;
use pitboard::error::PitboardError;
use pitboard::logging::{init_logging, LoggingConfig};

#[derive(Parser)]
#[command(
    name = "pitboard",
    version,
    about = "Car number roster keeper for league season records"
)]
struct Cli {
    /// Roster file (overrides the configured path)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Config file (default: pitboard.toml in the working directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// New-season update: unreported numbers age and expire
    Season {
        /// Numbers reported for C1, comma or space separated (prompts if omitted)
        #[arg(long)]
        c1: Option<String>,

        /// Numbers reported for C2, comma or space separated (prompts if omitted)
        #[arg(long)]
        c2: Option<String>,
    },

    /// Mid-season transfer update: unreported numbers keep their idle counts
    Transfer {
        /// Numbers reported for C1, comma or space separated (prompts if omitted)
        #[arg(long)]
        c1: Option<String>,

        /// Numbers reported for C2, comma or space separated (prompts if omitted)
        #[arg(long)]
        c2: Option<String>,
    },

    /// Add or modify a single entry
    Set {
        /// Target table: 1, 2, C1 or C2
        table: String,

        /// Entry tokens: "[name] number [idle]", e.g. "张三 15 2" or "15"
        #[arg(required = true)]
        entry: Vec<String>,
    },

    /// Remove numbers from a table
    Remove {
        /// Target table: 1, 2, C1 or C2
        table: String,

        /// Numbers to remove, comma or space separated
        #[arg(required = true)]
        numbers: Vec<String>,
    },

    /// Rewrite the roster file in the canonical layout
    Rewrite,
}

fn main() {
    init_logging(&LoggingConfig::default());

    let args = Cli::parse();
    if let Err(err) = run(args) {
        if let Some(pitboard_err) = err.downcast_ref::<PitboardError>() {
            eprintln!("{}", pitboard_err.user_message());
        }
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(args: Cli) -> Result<()> {
    let mut config = PitboardConfig::resolve(args.config.as_deref())
        .map_err(|e| PitboardError::configuration(format!("{:#}", e)))?;
    if let Some(file) = args.file {
        config.roster.file = file;
    }

    match args.command {
        Commands::Season { c1, c2 } => cli::season_command(&config, c1, c2),
        Commands::Transfer { c1, c2 } => cli::transfer_command(&config, c1, c2),
        Commands::Set { table, entry } => cli::set_command(&config, &table, &entry),
        Commands::Remove { table, numbers } => cli::remove_command(&config, &table, &numbers),
        Commands::Rewrite => cli::rewrite_command(&config),
    }
}
