// SPDX-License-Identifier: MIT OR Apache-2.0

//! Letterpress CLI - play the word tile game in a terminal
//!
//! Deals a 5×5 board of weighted random letters; type coordinates to move
//! letters into the tray and see whether they spell a word.

use anyhow::{Context, Result};
use clap::Parser;
use letterpress_cli::config::{self, GameConfig};
use letterpress_cli::Session;
use letterpress_core::logging::{ContextLogger, JsonLogger, SessionId};
use letterpress_core::{Lexicon, WordList};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(
    name = "letterpress",
    about = "Letterpress word tile game command-line interface",
    version
)]
struct Args {
    /// Word list file, one word per line
    #[clap(short, long)]
    dictionary: Option<PathBuf>,

    /// Seed for reproducible boards
    #[clap(short, long)]
    seed: Option<u64>,

    /// Config file to use instead of the platform default
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[clap(long)]
    debug: bool,

    /// Print every board event as a JSON line
    #[clap(long)]
    json: bool,
}

fn init_logging(level: &str, debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    // Logs go to stderr so they never interleave with the board on stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_dictionary(path: Option<PathBuf>) -> Result<Option<Arc<dyn Lexicon>>> {
    let Some(path) = path else {
        tracing::warn!("No dictionary configured; pass --dictionary or set dictionary_path");
        return Ok(None);
    };

    let words = WordList::load(&path)
        .with_context(|| format!("Failed to load dictionary {}", path.display()))?;
    if words.is_empty() {
        tracing::warn!(path = %path.display(), "Dictionary is empty");
    }
    let words: Arc<dyn Lexicon> = Arc::new(words);
    Ok(Some(words))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config, using defaults: {:#}", e);
        GameConfig::default()
    });

    init_logging(&config.log_level, args.debug);

    let dictionary = load_dictionary(args.dictionary.or(config.dictionary_path))?;
    let seed = args.seed.or(config.seed);
    tracing::info!(?seed, "Starting letterpress");

    let mut session = Session::new(dictionary, seed);
    if args.json {
        let logger = ContextLogger::new(Arc::new(JsonLogger::stdout()), SessionId::new(), "board");
        session = session.with_logger(logger);
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session.run(stdin.lock(), &mut stdout)?;

    println!("Goodbye!");
    Ok(())
}
