//! Ladder validation
//!
//! Checks that a supplied chain of words is internally consistent: every
//! adjacent pair is made of dictionary words one substitution apart. The
//! chain's endpoints are not compared against any particular start or end.

use crate::core::{Lexicon, Word};
use std::fmt;

/// Reason a sequence is not a word ladder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderViolation {
    /// The sequence has no words
    Empty,
    /// The word at `index` is not in the lexicon
    NotAWord { index: usize, word: String },
    /// Words `index` and `index + 1` are not neighbors
    ///
    /// `distance` is `None` when their lengths differ.
    NotAdjacent {
        index: usize,
        distance: Option<usize>,
    },
}

impl fmt::Display for LadderViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "A ladder must contain at least one word"),
            Self::NotAWord { index, word } => {
                write!(f, "Word {} ('{word}') is not in the dictionary", index + 1)
            }
            Self::NotAdjacent {
                index,
                distance: Some(distance),
            } => write!(
                f,
                "Words {} and {} differ in {distance} positions, expected 1",
                index + 1,
                index + 2
            ),
            Self::NotAdjacent {
                index,
                distance: None,
            } => write!(
                f,
                "Words {} and {} have different lengths",
                index + 1,
                index + 2
            ),
        }
    }
}

impl std::error::Error for LadderViolation {}

/// Validate a sequence against the lexicon
///
/// A single-word sequence is always valid, even when the word is not in the
/// lexicon, because there are no pairs to check.
///
/// # Errors
///
/// Returns the first violation found, scanning pairs left to right.
pub fn validate_ladder<S: AsRef<str>>(
    lexicon: &Lexicon,
    sequence: &[S],
) -> Result<(), LadderViolation> {
    if sequence.is_empty() {
        return Err(LadderViolation::Empty);
    }

    for (index, pair) in sequence.windows(2).enumerate() {
        let current = Word::new(&pair[0]);
        let next = Word::new(&pair[1]);

        if lexicon.lookup(current.text()).is_none() {
            return Err(LadderViolation::NotAWord {
                index,
                word: current.text().to_string(),
            });
        }
        if lexicon.lookup(next.text()).is_none() {
            return Err(LadderViolation::NotAWord {
                index: index + 1,
                word: next.text().to_string(),
            });
        }

        let distance = current.distance(&next);
        if distance != Some(1) {
            return Err(LadderViolation::NotAdjacent { index, distance });
        }
    }

    Ok(())
}
