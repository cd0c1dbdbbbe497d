//! Neighbor and distance commands

use crate::Doublets;
use crate::core::Word;

/// Result of listing a word's neighbors
pub struct NeighborsResult {
    pub word: String,
    pub is_word: bool,
    pub neighbors: Vec<String>,
}

/// List every dictionary word one letter away from `word`
#[must_use]
pub fn list_neighbors(word: &str, game: &Doublets) -> NeighborsResult {
    NeighborsResult {
        word: Word::new(word).text().to_string(),
        is_word: game.is_word(word),
        neighbors: game.neighbors(word),
    }
}

/// Result of comparing two words
pub struct DistanceResult {
    pub first: String,
    pub second: String,
    /// `None` when the words differ in length
    pub distance: Option<usize>,
    pub differing_positions: Vec<usize>,
}

/// Compare two words position by position
#[must_use]
pub fn measure_distance(first: &str, second: &str) -> DistanceResult {
    let a = Word::new(first);
    let b = Word::new(second);

    DistanceResult {
        distance: a.distance(&b),
        differing_positions: a.differing_positions(&b),
        first: a.text().to_string(),
        second: b.text().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_of_dictionary_word() {
        let game = Doublets::from_reader("cat\ncot\ncar\ndog\n".as_bytes()).unwrap();
        let result = list_neighbors("CAT", &game);

        assert_eq!(result.word, "cat");
        assert!(result.is_word);
        assert_eq!(result.neighbors, ["car", "cot"]);
    }

    #[test]
    fn neighbors_of_non_word() {
        let game = Doublets::from_reader("cat\ncot\n".as_bytes()).unwrap();
        let result = list_neighbors("cut", &game);

        assert!(!result.is_word);
        assert_eq!(result.neighbors, ["cat", "cot"]);
    }

    #[test]
    fn distance_with_positions() {
        let result = measure_distance("Cold", "card");
        assert_eq!(result.distance, Some(2));
        assert_eq!(result.differing_positions, vec![1, 2]);
        assert_eq!(result.first, "cold");
    }

    #[test]
    fn distance_undefined() {
        let result = measure_distance("cold", "colder");
        assert_eq!(result.distance, None);
        assert!(result.differing_positions.is_empty());
    }
}
