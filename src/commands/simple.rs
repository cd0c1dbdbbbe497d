//! Simple interactive CLI mode
//!
//! Line-oriented query shell without TUI

use super::check::check_ladder;
use super::ladder::{LadderConfig, LadderOutcome, find_ladder};
use super::neighbors::list_neighbors;
use crate::Doublets;
use crate::output::formatters::format_ladder;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Ladder { start: String, end: String },
    Neighbors(String),
    Distance(String, String),
    IsWord(String),
    Check(Vec<String>),
    Count,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line
    ///
    /// A bare pair of words is shorthand for `ladder A B`.
    ///
    /// # Errors
    ///
    /// Returns a usage message if the command is unknown or has the wrong
    /// number of arguments.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Err("Empty command (try 'help')".to_string());
        };
        let args: Vec<String> = parts.map(str::to_string).collect();

        match (head.to_lowercase().as_str(), args.as_slice()) {
            ("ladder" | "l", [start, end]) => Ok(Self::Ladder {
                start: start.clone(),
                end: end.clone(),
            }),
            ("neighbors" | "n", [word]) => Ok(Self::Neighbors(word.clone())),
            ("distance" | "d", [a, b]) => Ok(Self::Distance(a.clone(), b.clone())),
            ("word" | "w", [word]) => Ok(Self::IsWord(word.clone())),
            ("check" | "c", words) if !words.is_empty() => Ok(Self::Check(words.to_vec())),
            ("count", []) => Ok(Self::Count),
            ("help" | "h" | "?", []) => Ok(Self::Help),
            ("quit" | "q" | "exit", []) => Ok(Self::Quit),
            ("ladder" | "l" | "distance" | "d", _) => Err(format!("Usage: {head} <word> <word>")),
            ("neighbors" | "n" | "word" | "w", _) => Err(format!("Usage: {head} <word>")),
            ("check" | "c", _) => Err(format!("Usage: {head} <word> [word...]")),
            ("count" | "help" | "h" | "?" | "quit" | "q" | "exit", _) => {
                Err(format!("Usage: {head}"))
            }
            (_, [end]) => Ok(Self::Ladder {
                start: head.to_string(),
                end: end.clone(),
            }),
            _ => Err(format!("Unknown command '{head}' (try 'help')")),
        }
    }
}

/// Build the text answer for a command
#[must_use]
pub fn respond(command: &ShellCommand, game: &Doublets) -> String {
    match command {
        ShellCommand::Ladder { start, end } => {
            let result = find_ladder(LadderConfig::new(start.clone(), end.clone()), game);
            match result.outcome {
                LadderOutcome::Found | LadderOutcome::Identity => format!(
                    "{} ({} steps)",
                    format_ladder(&result.ladder),
                    result.steps()
                ),
                LadderOutcome::LengthMismatch => {
                    "No ladder: words have different lengths".to_string()
                }
                LadderOutcome::NotAWord(word) => format!("No ladder: '{word}' is not a word"),
                LadderOutcome::Unreachable => {
                    format!("No ladder connects '{}' and '{}'", result.start, result.end)
                }
            }
        }
        ShellCommand::Neighbors(word) => {
            let result = list_neighbors(word, game);
            if result.neighbors.is_empty() {
                format!("'{}' has no neighbors", result.word)
            } else {
                format!(
                    "{} neighbors: {}",
                    result.neighbors.len(),
                    result.neighbors.join(", ")
                )
            }
        }
        ShellCommand::Distance(a, b) => match game.hamming_distance(a, b) {
            -1 => "Distance undefined (-1): different lengths".to_string(),
            distance => format!("Distance: {distance}"),
        },
        ShellCommand::IsWord(word) => {
            if game.is_word(word) {
                format!("'{word}' is a word")
            } else {
                format!("'{word}' is not a word")
            }
        }
        ShellCommand::Check(words) => match check_ladder(words, game).verdict {
            Ok(()) => "Valid ladder".to_string(),
            Err(violation) => format!("Not a ladder: {violation}"),
        },
        ShellCommand::Count => format!("{} words in dictionary", game.word_count()),
        ShellCommand::Help => HELP.to_string(),
        ShellCommand::Quit => String::new(),
    }
}

const HELP: &str = "Commands:
  ladder A B     shortest ladder from A to B (or just 'A B')
  neighbors W    words one letter away from W
  distance A B   Hamming distance (-1 if lengths differ)
  word W         is W in the dictionary?
  check W...     is the sequence a valid ladder?
  count          dictionary size
  quit           exit";

/// Run the shell over arbitrary input and output streams
///
/// Stops at `quit` or end of input.
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails.
pub fn run_shell<R: BufRead, W: Write>(
    game: &Doublets,
    input: R,
    mut output: W,
) -> io::Result<()> {
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "> ")?;
            output.flush()?;
            continue;
        }

        match ShellCommand::parse(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => writeln!(output, "{}", respond(&command, game))?,
            Err(usage) => writeln!(output, "{usage}")?,
        }

        write!(output, "> ")?;
        output.flush()?;
    }

    Ok(())
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// responses.
pub fn run_simple(game: &Doublets) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Doublets - Interactive Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Dictionary: {} words. Type 'help' for commands.\n",
        game.word_count().to_string().bright_cyan()
    );

    let stdin = io::stdin();
    run_shell(game, stdin.lock(), io::stdout()).map_err(|e| e.to_string())?;

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}
