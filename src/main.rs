//! Unscramble - CLI
//!
//! Word-unscrambling game with a line-based console mode, a TUI mode and
//! dictionary tooling.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;
use unscramble::{
    commands::{analyze_words, run_benchmark, run_console, run_interactive},
    config::{DEFAULT_DICTIONARY, DEFAULT_SHOP_DICTIONARY, GameConfig},
    game::{ScrambleMode, TimingMode},
    output::{print_analysis_result, print_benchmark_result},
    wordlists::{DEFAULT_CAPACITY, WordStore},
};

#[derive(Parser)]
#[command(
    name = "unscramble",
    about = "Unscramble the anagram: streak combos, hints, achievements and a word shop",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary loaded at startup (whitespace separated words)
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,

    /// Dictionary sold in the shop
    #[arg(long, global = true, default_value = DEFAULT_SHOP_DICTIONARY)]
    shop_dictionary: PathBuf,

    /// Maximum number of words held across all loads
    #[arg(long, global = true, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Seed for word choice, scrambling and hints
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Time rounds with the wall clock instead of the fixed 25 seconds
    #[arg(long, global = true)]
    timed: bool,

    /// Scramble algorithm: classic (default) or uniform
    #[arg(long, global = true, default_value = "classic")]
    scramble: ScrambleMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Console game (default)
    Play,

    /// Full-screen terminal game
    Tui,

    /// Show how the dictionary splits across difficulty bands
    Analyze {
        /// Include the shop dictionary
        #[arg(long)]
        with_shop: bool,
    },

    /// Measure how often scrambling returns the word unchanged
    Benchmark {
        /// Scrambles per word and algorithm
        #[arg(short = 'n', long, default_value = "500")]
        trials: usize,

        /// Include the shop dictionary
        #[arg(long)]
        with_shop: bool,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            dictionary: self.dictionary.clone(),
            shop_dictionary: self.shop_dictionary.clone(),
            capacity: self.capacity,
            seed: self.seed,
            timing: if self.timed {
                TimingMode::Wall
            } else {
                TimingMode::Fixed
            },
            scramble: self.scramble,
        }
    }
}

fn init_logging(verbose: u8) {
    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else {
        builder.filter_level(match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        });
    }
    builder.init();
}

/// Load the dictionaries named in `config` into a fresh store
fn load_store(config: &GameConfig, with_shop: bool) -> Result<WordStore> {
    let mut store = WordStore::with_capacity(config.capacity);
    store
        .load(&config.dictionary, 0)
        .context("loading main dictionary")?;
    if with_shop {
        store
            .append(&config.shop_dictionary)
            .context("loading shop dictionary")?;
    }
    Ok(store)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.game_config();

    // Default to the console game if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_console(config),
        Commands::Tui => run_interactive(config),
        Commands::Analyze { with_shop } => {
            let store = load_store(&config, with_shop)?;
            print_analysis_result(&analyze_words(store.words()));
            Ok(())
        }
        Commands::Benchmark { trials, with_shop } => {
            let store = load_store(&config, with_shop)?;
            let seed = config.seed.unwrap_or_else(rand::random);
            println!(
                "Scrambling {} words {trials} times each (seed {seed})...",
                store.len()
            );
            let result = run_benchmark(store.words(), trials, seed, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
