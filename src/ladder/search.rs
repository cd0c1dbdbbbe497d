//! Breadth-first ladder search
//!
//! The word graph is implicit: nodes are lexicon words and edges join words
//! one substitution apart. Neighbors are found by scanning the whole lexicon,
//! so one expansion costs O(lexicon size x word length).

use super::distance::hamming_distance;
use super::path::Ladder;
use super::validate::validate_ladder;
use crate::core::{Lexicon, Word};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Counters from a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken off the frontier and scanned for neighbors
    pub expanded: usize,
    /// Distinct words reached, the start included
    pub visited: usize,
}

/// A ladder plus the work it took to find it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub ladder: Ladder,
    pub stats: SearchStats,
}

/// BFS tree node; `predecessor` indexes the per-search arena
struct SearchNode<'a> {
    word: &'a Word,
    predecessor: Option<usize>,
}

/// Ladder queries against a borrowed lexicon
///
/// Holds no state besides the lexicon reference; every search allocates its
/// own frontier, visited set and node arena.
#[derive(Debug, Clone, Copy)]
pub struct LadderSearch<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> LadderSearch<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Hamming distance between two strings, `None` if lengths differ
    #[must_use]
    pub fn hamming_distance(&self, a: &str, b: &str) -> Option<usize> {
        hamming_distance(a, b)
    }

    /// Every lexicon word exactly one substitution from `word`
    ///
    /// Results follow lexicon order. `word` itself need not be in the lexicon.
    #[must_use]
    pub fn neighbors(&self, word: &str) -> Vec<&'a Word> {
        self.neighbors_of(&Word::new(word))
    }

    fn neighbors_of(&self, word: &Word) -> Vec<&'a Word> {
        self.lexicon
            .words()
            .filter(|candidate| word.is_neighbor(candidate))
            .collect()
    }

    /// Shortest ladder from `start` to `end`
    ///
    /// Returns `[start]` when the words are equal (dictionary or not), and an
    /// empty ladder when the lengths differ, either endpoint is not a word, or
    /// the two are not connected.
    ///
    /// # Examples
    /// ```
    /// use doublets::core::Lexicon;
    /// use doublets::ladder::LadderSearch;
    ///
    /// let lexicon = Lexicon::from_tokens(["hot", "dot", "dog", "lot", "log", "cog"]);
    /// let search = LadderSearch::new(&lexicon);
    ///
    /// let ladder = search.min_ladder("hot", "dog");
    /// assert_eq!(ladder.to_strings(), ["hot", "dot", "dog"]);
    /// ```
    #[must_use]
    pub fn min_ladder(&self, start: &str, end: &str) -> Ladder {
        self.search(start, end).ladder
    }

    /// Shortest ladder along with search counters
    #[must_use]
    pub fn search(&self, start: &str, end: &str) -> SearchOutcome {
        let start = Word::new(start);
        let end = Word::new(end);

        if start == end {
            return SearchOutcome {
                ladder: Ladder::identity(start),
                stats: SearchStats::default(),
            };
        }

        if start.distance(&end).is_none() {
            debug!(start = %start, end = %end, "length mismatch, no ladder possible");
            return SearchOutcome::default();
        }

        let (Some(start_word), Some(end_word)) = (
            self.lexicon.lookup(start.text()),
            self.lexicon.lookup(end.text()),
        ) else {
            debug!(start = %start, end = %end, "endpoint not in lexicon");
            return SearchOutcome::default();
        };

        let outcome = self.breadth_first_search(start_word, end_word);
        debug!(
            start = %start,
            end = %end,
            length = outcome.ladder.len(),
            expanded = outcome.stats.expanded,
            visited = outcome.stats.visited,
            "search finished"
        );
        outcome
    }

    fn breadth_first_search(&self, start: &'a Word, end: &'a Word) -> SearchOutcome {
        let mut arena = vec![SearchNode {
            word: start,
            predecessor: None,
        }];
        let mut frontier = VecDeque::from([0usize]);
        let mut visited: FxHashSet<&str> = FxHashSet::default();
        visited.insert(start.text());

        let mut stats = SearchStats {
            expanded: 0,
            visited: 1,
        };

        while let Some(current) = frontier.pop_front() {
            stats.expanded += 1;
            let word = arena[current].word;
            trace!(word = %word, frontier = frontier.len(), "expanding");

            for neighbor in self.neighbors_of(word) {
                if !visited.insert(neighbor.text()) {
                    continue;
                }
                stats.visited += 1;

                arena.push(SearchNode {
                    word: neighbor,
                    predecessor: Some(current),
                });
                let node = arena.len() - 1;

                // First arrival at the target is along a shortest path
                if neighbor == end {
                    return SearchOutcome {
                        ladder: reconstruct(&arena, node),
                        stats,
                    };
                }

                frontier.push_back(node);
            }
        }

        SearchOutcome {
            ladder: Ladder::empty(),
            stats,
        }
    }

    /// True iff `sequence` is a non-empty chain of lexicon words, each one
    /// substitution from the next
    ///
    /// A single word is always a ladder, whether or not it is in the lexicon.
    #[must_use]
    pub fn is_word_ladder<S: AsRef<str>>(&self, sequence: &[S]) -> bool {
        validate_ladder(self.lexicon, sequence).is_ok()
    }
}

/// Walk predecessor links back to the root and return start-to-end order
fn reconstruct(arena: &[SearchNode<'_>], end: usize) -> Ladder {
    let mut words = Vec::new();
    let mut cursor = Some(end);

    while let Some(idx) = cursor {
        words.push(arena[idx].word.clone());
        cursor = arena[idx].predecessor;
    }

    words.reverse();
    Ladder::from_words(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn texts(words: &[&Word]) -> Vec<String> {
        let mut texts: Vec<String> = words.iter().map(|w| w.text().to_string()).collect();
        texts.sort();
        texts
    }

    /// All-pairs shortest path lengths (in edges) by Floyd-Warshall
    fn all_pairs(lexicon: &Lexicon) -> Vec<Vec<Option<usize>>> {
        let words: Vec<&Word> = lexicon.words().collect();
        let n = words.len();
        let mut dist = vec![vec![None; n]; n];

        for i in 0..n {
            dist[i][i] = Some(0);
            for j in 0..n {
                if words[i].is_neighbor(words[j]) {
                    dist[i][j] = Some(1);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if let (Some(a), Some(b)) = (dist[i][k], dist[k][j])
                        && dist[i][j].is_none_or(|d| a + b < d)
                    {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }

        dist
    }

    #[test]
    fn scenario_two_paths_of_equal_length() {
        let lexicon = Lexicon::from_tokens(["cat", "cot", "cog", "dog", "dot"]);
        let search = LadderSearch::new(&lexicon);

        let ladder = search.min_ladder("cat", "dog").to_strings();
        assert!(
            ladder == ["cat", "cot", "cog", "dog"] || ladder == ["cat", "cot", "dot", "dog"],
            "unexpected ladder {ladder:?}"
        );
    }

    #[test]
    fn scenario_no_connection() {
        let lexicon = Lexicon::from_tokens(["cat", "dog"]);
        let search = LadderSearch::new(&lexicon);

        assert!(search.min_ladder("cat", "dog").is_empty());
    }

    #[test]
    fn scenario_short_ladder() {
        let lexicon = Lexicon::from_tokens(["hot", "dot", "dog", "lot", "log", "cog"]);
        let search = LadderSearch::new(&lexicon);

        let ladder = search.min_ladder("hot", "dog");
        assert_eq!(ladder.to_strings(), ["hot", "dot", "dog"]);
        assert_eq!(ladder.steps(), 2);
    }

    #[test]
    fn scenario_neighbors() {
        let lexicon = Lexicon::from_tokens(["cat", "cot", "car", "dog"]);
        let search = LadderSearch::new(&lexicon);

        assert_eq!(texts(&search.neighbors("cat")), ["car", "cot"]);
    }

    #[test]
    fn neighbors_in_lexicon_order() {
        let lexicon = Lexicon::from_tokens(["cot", "car", "cab", "cat"]);
        let search = LadderSearch::new(&lexicon);

        let found: Vec<&str> = search.neighbors("cat").iter().map(|w| w.text()).collect();
        assert_eq!(found, ["cab", "car", "cot"]);
    }

    #[test]
    fn neighbors_of_unknown_word() {
        let lexicon = Lexicon::from_tokens(["cat", "cot", "dog"]);
        let search = LadderSearch::new(&lexicon);

        assert_eq!(texts(&search.neighbors("CUT")), ["cat", "cot"]);
        assert!(search.neighbors("").is_empty());
        assert!(search.neighbors("elephant").is_empty());
    }

    #[test]
    fn identity_ladder_for_equal_words() {
        let lexicon = Lexicon::from_tokens(["cat"]);
        let search = LadderSearch::new(&lexicon);

        assert_eq!(search.min_ladder("cat", "CAT").to_strings(), ["cat"]);
        assert_eq!(search.min_ladder("xyzzy", "xyzzy").to_strings(), ["xyzzy"]);
        assert_eq!(search.min_ladder("", "").to_strings(), [""]);
    }

    #[test]
    fn length_mismatch_short_circuits() {
        let lexicon = Lexicon::from_tokens(["cat", "cart", "cot"]);
        let search = LadderSearch::new(&lexicon);

        let outcome = search.search("cat", "cart");
        assert!(outcome.ladder.is_empty());
        assert_eq!(outcome.stats, SearchStats::default());
    }

    #[test]
    fn missing_endpoint_skips_search() {
        let lexicon = Lexicon::from_tokens(["cat", "cot", "dot"]);
        let search = LadderSearch::new(&lexicon);

        let outcome = search.search("cat", "dog");
        assert!(outcome.ladder.is_empty());
        assert_eq!(outcome.stats.expanded, 0);

        assert!(search.min_ladder("cut", "cot").is_empty());
    }

    #[test]
    fn input_case_is_normalized() {
        let lexicon = Lexicon::from_tokens(["hot", "dot", "dog"]);
        let search = LadderSearch::new(&lexicon);

        assert_eq!(search.min_ladder("HOT", "Dog").to_strings(), ["hot", "dot", "dog"]);
    }

    #[test]
    fn disconnected_components_give_empty_ladder() {
        let lexicon = Lexicon::from_tokens(["aa", "ab", "zz", "zy"]);
        let search = LadderSearch::new(&lexicon);

        let outcome = search.search("aa", "zz");
        assert!(outcome.ladder.is_empty());
        // Frontier drained: both words of the start component were expanded
        assert_eq!(outcome.stats.expanded, 2);
        assert_eq!(outcome.stats.visited, 2);
    }

    #[test]
    fn search_stops_at_first_arrival() {
        let lexicon = Lexicon::from_tokens(["aaa", "aab", "abb", "bbb", "zzz", "zza"]);
        let search = LadderSearch::new(&lexicon);

        let outcome = search.search("aaa", "aab");
        assert_eq!(outcome.ladder.to_strings(), ["aaa", "aab"]);
        assert_eq!(outcome.stats.expanded, 1);
    }

    #[test]
    fn empty_lexicon_yields_nothing() {
        let lexicon = Lexicon::default();
        let search = LadderSearch::new(&lexicon);

        assert!(search.min_ladder("cat", "cot").is_empty());
        assert!(search.neighbors("cat").is_empty());
        assert!(!search.is_word_ladder(&["cat", "cot"]));
    }

    #[test]
    fn is_word_ladder_edge_cases() {
        let lexicon = Lexicon::from_tokens(["cat", "cot", "dot"]);
        let search = LadderSearch::new(&lexicon);

        let empty: [&str; 0] = [];
        assert!(!search.is_word_ladder(&empty));
        // No pairs to check, so membership is not required
        assert!(search.is_word_ladder(&["qqq"]));
        assert!(search.is_word_ladder(&["cat", "cot", "dot"]));
        assert!(!search.is_word_ladder(&["cat", "dot"]));
        assert!(!search.is_word_ladder(&["cat", "cut"]));
    }

    #[test]
    fn ladders_match_exhaustive_shortest_paths() {
        let lexicon = Lexicon::from_tokens([
            "cold", "cord", "card", "ward", "warm", "word", "worm", "wore", "core", "care", "cure",
            "pure", "gold", "bold", "bolt", "boat", "coat", "cost", "most", "mist",
        ]);
        let search = LadderSearch::new(&lexicon);
        let words: Vec<&Word> = lexicon.words().collect();
        let dist = all_pairs(&lexicon);

        for (i, start) in words.iter().enumerate() {
            for (j, end) in words.iter().enumerate() {
                let ladder = search.min_ladder(start.text(), end.text());
                match dist[i][j] {
                    Some(edges) => {
                        assert_eq!(ladder.len(), edges + 1, "{start} -> {end}");
                        assert!(search.is_word_ladder(ladder.words()));
                        assert_eq!(ladder.first(), Some(*start));
                        assert_eq!(ladder.last(), Some(*end));
                    }
                    None => assert!(ladder.is_empty(), "{start} -> {end}"),
                }
            }
        }
    }

    proptest! {
        #[test]
        fn identity_ladder_for_any_word(w in "[a-zA-Z]{0,10}") {
            let lexicon = Lexicon::from_tokens(["cat", "cot"]);
            let search = LadderSearch::new(&lexicon);
            prop_assert_eq!(search.min_ladder(&w, &w).to_strings(), vec![w.to_lowercase()]);
        }

        #[test]
        fn single_word_is_always_a_ladder(w in "\\PC{0,8}") {
            let lexicon = Lexicon::default();
            let search = LadderSearch::new(&lexicon);
            prop_assert!(search.is_word_ladder(&[w]));
        }

        #[test]
        fn found_ladders_are_valid_and_minimal(
            tokens in proptest::collection::vec("[ab]{3}", 1..8),
            a in "[ab]{3}",
            b in "[ab]{3}",
        ) {
            let lexicon = Lexicon::from_tokens(&tokens);
            let search = LadderSearch::new(&lexicon);
            let ladder = search.min_ladder(&a, &b);

            if a != b && !(lexicon.contains(&a) && lexicon.contains(&b)) {
                prop_assert!(ladder.is_empty());
            }
            if !ladder.is_empty() {
                prop_assert!(search.is_word_ladder(ladder.words()));
                let lower_bound = Word::new(&a).distance(&Word::new(&b)).unwrap();
                prop_assert!(ladder.steps() >= lower_bound);
            }
        }
    }
}
