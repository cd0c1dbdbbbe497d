//! Ladder check command
//!
//! Validates a user-supplied chain of words.

use crate::Doublets;
use crate::core::Word;
use crate::ladder::{LadderViolation, validate_ladder};

/// Result of checking a sequence
pub struct CheckResult {
    pub words: Vec<String>,
    pub verdict: Result<(), LadderViolation>,
}

impl CheckResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.verdict.is_ok()
    }
}

/// Check whether `words` form a valid ladder in this game's dictionary
#[must_use]
pub fn check_ladder<S: AsRef<str>>(words: &[S], game: &Doublets) -> CheckResult {
    CheckResult {
        words: words
            .iter()
            .map(|w| Word::new(w).text().to_string())
            .collect(),
        verdict: validate_ladder(game.lexicon(), words),
    }
}
