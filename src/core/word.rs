//! Dictionary word representation
//!
//! A Word stores a lower-cased token along with its characters so that
//! distance checks index positions directly instead of re-decoding UTF-8.

use std::fmt;

/// A case-normalized dictionary token
///
/// Any string is a valid word, including the empty string. Normalization
/// happens once, here; every comparison after that is plain equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

impl Word {
    /// Create a new Word, lower-casing the input
    ///
    /// # Examples
    /// ```
    /// use doublets::core::Word;
    ///
    /// let word = Word::new("Cold");
    /// assert_eq!(word.text(), "cold");
    /// assert_eq!(word.len(), 4);
    /// ```
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self {
        let text = text.as_ref().to_lowercase();
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Hamming distance to another word
    ///
    /// Returns `None` when the lengths differ: the distance is undefined and
    /// no ladder step can connect the two words.
    ///
    /// # Examples
    /// ```
    /// use doublets::core::Word;
    ///
    /// assert_eq!(Word::new("cold").distance(&Word::new("cord")), Some(1));
    /// assert_eq!(Word::new("cold").distance(&Word::new("colder")), None);
    /// ```
    #[must_use]
    pub fn distance(&self, other: &Self) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }

        Some(
            self.chars
                .iter()
                .zip(&other.chars)
                .filter(|(a, b)| a != b)
                .count(),
        )
    }

    /// Check whether `other` is exactly one substitution away
    ///
    /// Stops comparing as soon as a second difference is found.
    #[must_use]
    pub fn is_neighbor(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut differences = 0;
        for (a, b) in self.chars.iter().zip(&other.chars) {
            if a != b {
                differences += 1;
                if differences > 1 {
                    return false;
                }
            }
        }

        differences == 1
    }

    /// Positions at which two equal-length words differ
    ///
    /// Returns an empty vector for words of different lengths.
    #[must_use]
    pub fn differing_positions(&self, other: &Self) -> Vec<usize> {
        if self.len() != other.len() {
            return Vec::new();
        }

        self.chars
            .iter()
            .zip(&other.chars)
            .enumerate()
            .filter_map(|(i, (a, b))| (a != b).then_some(i))
            .collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
