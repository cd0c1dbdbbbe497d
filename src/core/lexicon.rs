//! The fixed dictionary of valid words
//!
//! A Lexicon is built once and never mutated. Words are kept sorted so that
//! enumeration order, and therefore neighbor order and ladder tie-breaks, is
//! the same on every run.

use super::Word;
use std::slice;

/// Immutable, sorted, duplicate-free set of normalized words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<Word>,
}

impl Lexicon {
    /// Build a lexicon from raw tokens
    ///
    /// Each token is lower-cased; duplicates (after normalization) are
    /// dropped silently. Empty input gives an empty lexicon.
    ///
    /// # Examples
    /// ```
    /// use doublets::core::Lexicon;
    ///
    /// let lexicon = Lexicon::from_tokens(["Cat", "cat", "COT"]);
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains("CaT"));
    /// ```
    #[must_use]
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens.into_iter().map(Word::new).collect()
    }

    /// Number of distinct words
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

    /// Check membership of the normalized form of `word`
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Look up the stored member matching `word` (case-insensitive)
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Word> {
        let normalized = word.to_lowercase();
        self.lookup(&normalized)
    }

    /// Look up an already-normalized word
    pub(crate) fn lookup(&self, normalized: &str) -> Option<&Word> {
        self.words
            .binary_search_by(|w| w.text().cmp(normalized))
            .ok()
            .map(|idx| &self.words[idx])
    }

    /// Iterate over every member exactly once, in sorted order
    ///
    /// Each call starts a fresh iteration.
    pub fn words(&self) -> slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for Lexicon {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        let mut words: Vec<Word> = iter.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a Word;
    type IntoIter = slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words()
    }
}
