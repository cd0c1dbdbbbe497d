//! Ladder result type

use crate::core::Word;
use std::fmt;

/// An ordered chain of words from start to end, inclusive
///
/// An empty ladder means no ladder exists. A single-word ladder means the
/// start and end were the same word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<Word>,
}

impl Ladder {
    /// The "no ladder exists" result
    #[must_use]
    pub const fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// The zero-step ladder `[word]`
    #[must_use]
    pub fn identity(word: Word) -> Self {
        Self { words: vec![word] }
    }

    /// Wrap an already-ordered chain of words
    #[must_use]
    pub const fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the ladder, endpoints included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of single-letter changes (`len - 1`, zero when empty)
    #[inline]
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        self.words.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Word> {
        self.words.last()
    }

    /// Owned string form of the ladder
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.words.iter().map(|w| w.text().to_string()).collect()
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(words: &[&str]) -> Ladder {
        Ladder::from_words(words.iter().map(|&w| Word::new(w)).collect())
    }

    #[test]
    fn empty_ladder_has_no_steps() {
        let empty = Ladder::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.steps(), 0);
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn identity_ladder_is_one_word() {
        let identity = Ladder::identity(Word::new("xyzzy"));
        assert_eq!(identity.len(), 1);
        assert_eq!(identity.steps(), 0);
        assert_eq!(identity.to_strings(), ["xyzzy"]);
    }

    #[test]
    fn steps_and_endpoints() {
        let l = ladder(&["cat", "cot", "dot", "dog"]);
        assert_eq!(l.len(), 4);
        assert_eq!(l.steps(), 3);
        assert_eq!(l.first().map(Word::text), Some("cat"));
        assert_eq!(l.last().map(Word::text), Some("dog"));
    }

    #[test]
    fn display_joins_with_arrows() {
        assert_eq!(ladder(&["hot", "dot", "dog"]).to_string(), "hot -> dot -> dog");
    }
}
