//! Ladder command
//!
//! Finds a shortest ladder between two words and explains empty results.

use crate::Doublets;
use crate::core::Word;
use crate::ladder::SearchStats;
use std::time::{Duration, Instant};

/// Configuration for a ladder query
pub struct LadderConfig {
    pub start: String,
    pub end: String,
}

impl LadderConfig {
    #[must_use]
    pub const fn new(start: String, end: String) -> Self {
        Self { start, end }
    }
}

/// Why a ladder query produced what it did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderOutcome {
    Found,
    /// Start and end are the same word
    Identity,
    LengthMismatch,
    /// This endpoint is not in the dictionary
    NotAWord(String),
    /// Both are words but no chain connects them
    Unreachable,
}

/// Result of a ladder query
pub struct LadderResult {
    pub start: String,
    pub end: String,
    pub ladder: Vec<String>,
    pub outcome: LadderOutcome,
    pub stats: SearchStats,
    pub duration: Duration,
}

impl LadderResult {
    /// Number of letter changes in the ladder
    #[must_use]
    pub fn steps(&self) -> usize {
        self.ladder.len().saturating_sub(1)
    }
}

/// Run a ladder query
#[must_use]
pub fn find_ladder(config: LadderConfig, game: &Doublets) -> LadderResult {
    let start_time = Instant::now();
    let outcome = game.search().search(&config.start, &config.end);
    let duration = start_time.elapsed();

    let start = Word::new(&config.start);
    let end = Word::new(&config.end);

    let reason = if start == end {
        LadderOutcome::Identity
    } else if !outcome.ladder.is_empty() {
        LadderOutcome::Found
    } else if start.distance(&end).is_none() {
        LadderOutcome::LengthMismatch
    } else if !game.is_word(start.text()) {
        LadderOutcome::NotAWord(start.text().to_string())
    } else if !game.is_word(end.text()) {
        LadderOutcome::NotAWord(end.text().to_string())
    } else {
        LadderOutcome::Unreachable
    };

    LadderResult {
        start: start.text().to_string(),
        end: end.text().to_string(),
        ladder: outcome.ladder.to_strings(),
        outcome: reason,
        stats: outcome.stats,
        duration,
    }
}
