//! vocadrill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vocadrill", version, about = "English/Vietnamese vocabulary drill")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Practice missing letters interactively
    Drill {
        /// Path to a .toml word set or directory (overrides the configured source)
        #[arg(long)]
        words: Option<PathBuf>,

        /// Fraction of characters to blank, in (0, 1]
        #[arg(long)]
        ratio: Option<f64>,

        /// Stop after this many words (default: one pass over the list)
        #[arg(long)]
        limit: Option<usize>,

        /// Seed for the blank shuffle (reproducible sessions)
        #[arg(long)]
        seed: Option<u64>,

        /// Present words in list order instead of shuffling
        #[arg(long)]
        no_shuffle: bool,

        /// Write a JSON session report to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the words the configured source provides
    Words {
        /// Path to a .toml word set or directory (overrides the configured source)
        #[arg(long)]
        words: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Get feedback on a paragraph translation
    Translate {
        /// The Vietnamese original
        #[arg(long)]
        original: String,

        /// Your English translation
        #[arg(long)]
        translation: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate word-set TOML files
    Validate {
        /// Path to a word-set file or directory
        #[arg(long)]
        words: PathBuf,
    },

    /// Create starter config and example word set
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vocadrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Drill {
            words,
            ratio,
            limit,
            seed,
            no_shuffle,
            report,
            config,
        } => commands::drill::execute(words, ratio, limit, seed, no_shuffle, report, config).await,
        Commands::Words { words, config } => commands::words::execute(words, config).await,
        Commands::Translate {
            original,
            translation,
            config,
        } => commands::translate::execute(original, translation, config).await,
        Commands::Validate { words } => commands::validate::execute(words),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
