//! String-level word ladder game
//!
//! [`Doublets`] owns a lexicon and answers queries with plain strings and
//! integers, the shape an interactive shell or test harness consumes. The
//! typed API lives in [`crate::ladder`].

use crate::core::Lexicon;
use crate::ladder::{LadderSearch, distance_or_sentinel};
use crate::wordlists::{WORDS, loader};
use std::io::{self, BufReader, Read};
use std::path::Path;

/// A word ladder game over a fixed dictionary
#[derive(Debug, Clone, Default)]
pub struct Doublets {
    lexicon: Lexicon,
}

impl Doublets {
    #[must_use]
    pub const fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Build a game from a word list stream
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the stream cannot be read.
    ///
    /// # Examples
    /// ```
    /// use doublets::Doublets;
    ///
    /// let game = Doublets::from_reader("cat\ncot\ndot\ndog\n".as_bytes()).unwrap();
    /// assert_eq!(game.word_count(), 4);
    /// assert_eq!(game.min_ladder("cat", "dog"), ["cat", "cot", "dot", "dog"]);
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        loader::load_from_reader(BufReader::new(reader)).map(Self::new)
    }

    /// Build a game from a word list file
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be opened or read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        loader::load_from_file(path).map(Self::new)
    }

    /// Game over the dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::lexicon_from_slice(WORDS))
    }

    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Typed search over this game's lexicon
    #[must_use]
    pub const fn search(&self) -> LadderSearch<'_> {
        LadderSearch::new(&self.lexicon)
    }

    /// Total number of words in the lexicon
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.lexicon.len()
    }

    /// Check whether `word` is in the lexicon (case-insensitive)
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    /// Hamming distance, or `-1` when the lengths differ
    #[must_use]
    pub fn hamming_distance(&self, a: &str, b: &str) -> i32 {
        distance_or_sentinel(self.search().hamming_distance(a, b))
    }

    /// All lexicon words one substitution away from `word`
    #[must_use]
    pub fn neighbors(&self, word: &str) -> Vec<String> {
        self.search()
            .neighbors(word)
            .into_iter()
            .map(|w| w.text().to_string())
            .collect()
    }

    /// A minimum-length ladder from `start` to `end`; empty if none exists
    #[must_use]
    pub fn min_ladder(&self, start: &str, end: &str) -> Vec<String> {
        self.search().min_ladder(start, end).to_strings()
    }

    /// Check whether `sequence` is a valid word ladder
    #[must_use]
    pub fn is_word_ladder<S: AsRef<str>>(&self, sequence: &[S]) -> bool {
        self.search().is_word_ladder(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn game(words: &str) -> Doublets {
        Doublets::from_reader(words.as_bytes()).unwrap()
    }

    #[test]
    fn word_count_and_membership() {
        let game = game("Cat\ncot\nCAT\ndog extra tokens\n");
        assert_eq!(game.word_count(), 3);
        assert!(game.is_word("cat"));
        assert!(game.is_word("DOG"));
        assert!(!game.is_word("extra"));
    }

    #[test]
    fn hamming_distance_sentinel() {
        let game = game("cat\n");
        assert_eq!(game.hamming_distance("cat", "cat"), 0);
        assert_eq!(game.hamming_distance("cat", "COT"), 1);
        assert_eq!(game.hamming_distance("cat", "dog"), 3);
        assert_eq!(game.hamming_distance("cat", "cats"), -1);
        assert_eq!(game.hamming_distance("", "a"), -1);
    }

    #[test]
    fn neighbors_as_strings() {
        let game = game("cat\ncot\ncar\ndog\n");
        let found: HashSet<String> = game.neighbors("cat").into_iter().collect();
        let expected: HashSet<String> = ["cot", "car"].iter().map(|s| (*s).to_string()).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn min_ladder_scenarios() {
        let game1 = game("cat\ncot\ncog\ndog\ndot\n");
        let ladder = game1.min_ladder("cat", "dog");
        assert_eq!(ladder.len(), 4);
        assert!(game1.is_word_ladder(&ladder));

        let game2 = game("cat\ndog\n");
        assert!(game2.min_ladder("cat", "dog").is_empty());

        let game3 = game("hot\ndot\ndog\nlot\nlog\ncog\n");
        assert_eq!(game3.min_ladder("hot", "dog"), ["hot", "dot", "dog"]);
    }

    #[test]
    fn min_ladder_short_circuits() {
        let game = game("cat\ncot\ncart\n");
        assert_eq!(game.min_ladder("Zzz", "zzz"), ["zzz"]);
        assert!(game.min_ladder("cat", "cart").is_empty());
        assert!(game.min_ladder("cat", "cut").is_empty());
    }

    #[test]
    fn is_word_ladder_boundaries() {
        let game = game("cat\ncot\n");
        let empty: Vec<String> = Vec::new();
        assert!(!game.is_word_ladder(&empty));
        assert!(game.is_word_ladder(&["notaword"]));
        assert!(game.is_word_ladder(&["cat", "cot", "cat"]));
    }

    #[test]
    fn embedded_game_is_playable() {
        let game = Doublets::embedded();
        assert!(game.word_count() > 1000);
        assert!(game.is_word("cold"));
        assert_eq!(game.min_ladder("cold", "warm").len(), 5);
    }

    #[test]
    fn unreadable_source_is_an_error() {
        assert!(Doublets::from_file("/no/such/dictionary.txt").is_err());
    }
}
