//! Word Train - CLI
//!
//! Solve Word Train positions, sweep player counts, or play against the computer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, debug};
use word_train::{
    commands::{run_play, run_sweep, solve_prefix},
    core::Lexicon,
    output::{print_solve_report, print_sweep_result, print_words},
    solver::{DEFAULT_MIN_WORD_LENGTH, DEFAULT_NUM_PLAYERS, GameQuery},
    wordlists::{
        EMBEDDED,
        loader::{FileSource, lexicon_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_train",
    about = "Word Train solver: which next letters win under perfect play",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Lexicon: 'embedded' (default) or path to a line-delimited word file
    #[arg(short, long, global = true, default_value = "embedded")]
    lexicon: String,

    /// Number of players (solve and play; sweep takes its own range)
    #[arg(short, long, global = true, default_value_t = DEFAULT_NUM_PLAYERS)]
    players: usize,

    /// Minimum length for a completed word to end the game
    #[arg(short, long = "min-length", global = true, default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    min_length: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every next letter from a prefix
    Solve {
        /// The current string (empty for a fresh game)
        #[arg(default_value = "")]
        prefix: String,

        /// Also print the full word sets
        #[arg(short, long)]
        words: bool,
    },

    /// Solve a prefix for every player count up to a maximum
    Sweep {
        /// The current string (empty for a fresh game)
        #[arg(default_value = "")]
        prefix: String,

        /// Largest player count to solve
        #[arg(short = 'n', long, default_value = "6")]
        max_players: usize,
    },

    /// List the words reachable from a prefix
    Words {
        /// Prefix to expand
        #[arg(default_value = "")]
        prefix: String,
    },

    /// Play against the computer
    Play {
        /// Let the computer move first
        #[arg(long)]
        computer_first: bool,
    },
}

/// Load the lexicon based on the -l flag
fn load_lexicon(lexicon: &str) -> Lexicon {
    match lexicon {
        "embedded" => lexicon_from_slice(EMBEDDED),
        path => FileSource::new(path).into_lexicon(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let lexicon = load_lexicon(&cli.lexicon);
    lexicon
        .words()
        .with_context(|| format!("failed to load lexicon '{}'", cli.lexicon))?;
    debug!(%lexicon, "lexicon ready");

    match cli.command {
        Commands::Solve { prefix, words } => {
            let query = GameQuery::new(prefix.trim().to_lowercase())
                .with_players(cli.players)
                .with_min_word_length(cli.min_length);
            let report = solve_prefix(&lexicon, &query)?;
            print_solve_report(&report, words);
        }
        Commands::Sweep {
            prefix,
            max_players,
        } => {
            let prefix = prefix.trim().to_lowercase();
            let result = run_sweep(&lexicon, &prefix, max_players, cli.min_length)?;
            print_sweep_result(&result);
        }
        Commands::Words { prefix } => {
            let prefix = prefix.trim().to_lowercase();
            let mut words: Vec<String> = lexicon
                .trie()?
                .get_all_words(&prefix, cli.min_length)
                .into_iter()
                .collect();
            words.sort();
            print_words(&prefix, &words);
        }
        Commands::Play { computer_first } => {
            run_play(&lexicon, cli.players, cli.min_length, !computer_first)?;
        }
    }

    Ok(())
}
