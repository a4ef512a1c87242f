//! Wordle Game - CLI
//!
//! Terminal Wordle with TUI and simple CLI modes: six guesses to find a
//! hidden five-letter word, with per-letter feedback after every guess.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{run_simple, score_words},
    core::Word,
    output::print_score_result,
    wordlists::{
        ANSWERS,
        loader::{load_from_file, words_from_slice},
        random_target,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Terminal Wordle: guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pin the target word instead of picking one at random
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score one guess against a target and print the feedback
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

/// Load the answer pool based on the -w flag
fn load_pool(wordlist_mode: &str) -> Result<Vec<Word>> {
    let pool = match wordlist_mode {
        "embedded" => words_from_slice(ANSWERS),
        path => load_from_file(path).with_context(|| format!("failed to read wordlist {path}"))?,
    };

    if pool.is_empty() {
        bail!("wordlist '{wordlist_mode}' contains no valid 5-letter words");
    }

    Ok(pool)
}

/// Resolve the session target: pinned via --target, or random from the pool
fn resolve_target(pinned: Option<&str>, pool: &[Word]) -> Result<Word> {
    match pinned {
        Some(text) => Word::new(text).map_err(|e| anyhow::anyhow!("invalid --target: {e}")),
        None => Ok(random_target(pool)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let pool = load_pool(&cli.wordlist)?;
            let target = resolve_target(cli.target.as_deref(), &pool)?;
            run_play_command(&pool, target)
        }
        Commands::Simple => {
            let pool = load_pool(&cli.wordlist)?;
            let target = resolve_target(cli.target.as_deref(), &pool)?;
            run_simple(&pool, target).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { guess, target } => {
            let result = score_words(&guess, &target)?;
            print_score_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(pool: &[Word], target: Word) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(pool, target);
    run_tui(app)
}
