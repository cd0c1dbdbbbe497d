//! Doublets - CLI
//!
//! Word ladder solver with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use doublets::{
    Doublets,
    commands::{
        BenchmarkConfig, LadderConfig, check_ladder, find_ladder, list_neighbors,
        measure_distance, run_benchmark, run_simple,
    },
    output::{
        print_benchmark_result, print_check_result, print_distance_result, print_ladder_result,
        print_neighbors_result,
    },
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "doublets",
    about = "Word ladder solver: shortest chains of words changing one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file (first word per line)
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented query shell)
    Simple,

    /// Find a shortest ladder between two words
    Ladder {
        start: String,
        end: String,

        /// Show search statistics
        #[arg(short, long)]
        stats: bool,
    },

    /// List the words one letter away from a word
    Neighbors { word: String },

    /// Hamming distance between two words (-1 if lengths differ)
    Distance { first: String, second: String },

    /// Check whether a sequence of words is a valid ladder
    Check {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Benchmark searches between random word pairs
    Benchmark {
        /// Number of random pairs to search
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible pairs
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Pick the log filter; `RUST_LOG` overrides the -v flags outside the TUI
fn log_filter(verbose: u8, tui: bool) -> EnvFilter {
    // Log lines would scribble over the alternate screen
    if tui {
        return EnvFilter::new("warn");
    }

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn init_logging(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the game based on the -w flag
fn load_game(wordlist: &str) -> Result<Doublets> {
    match wordlist {
        "embedded" => Ok(Doublets::embedded()),
        path => Doublets::from_file(path)
            .with_context(|| format!("Error reading word list from '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(log_filter(cli.verbose, matches!(command, Commands::Play)));

    let game = load_game(&cli.wordlist)?;

    match command {
        Commands::Play => run_play_command(&game),
        Commands::Simple => run_simple(&game).map_err(|e| anyhow::anyhow!(e)),
        Commands::Ladder { start, end, stats } => {
            let result = find_ladder(LadderConfig::new(start, end), &game);
            print_ladder_result(&result, stats);
            Ok(())
        }
        Commands::Neighbors { word } => {
            print_neighbors_result(&list_neighbors(&word, &game));
            Ok(())
        }
        Commands::Distance { first, second } => {
            print_distance_result(&measure_distance(&first, &second));
            Ok(())
        }
        Commands::Check { words } => {
            print_check_result(&check_ladder(&words, &game));
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&game, count, seed);
            Ok(())
        }
    }
}

fn run_benchmark_command(game: &Doublets, count: usize, seed: Option<u64>) {
    if let Some(seed) = seed {
        println!("Running {count} searches between random word pairs (seed {seed})...");
    } else {
        println!("Running {count} searches between random word pairs...");
    }

    let mut config = BenchmarkConfig::new(count);
    config.seed = seed;

    let result = run_benchmark(game, &config);
    print_benchmark_result(&result);
}

fn run_play_command(game: &Doublets) -> Result<()> {
    use doublets::interactive::{App, run_tui};

    let app = App::new(game);
    run_tui(app)
}
