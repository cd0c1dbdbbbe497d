//! Benchmark command
//!
//! Runs ladder searches between random same-length word pairs.

use crate::Doublets;
use crate::core::Word;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    /// Fixed seed for reproducible pairs; random when `None`
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_searches: usize,
    pub found: usize,
    pub unreachable: usize,
    pub average_length: f64,
    /// Longest ladder found, as (start, end, words)
    pub longest: Option<(String, String, usize)>,
    /// Ladder length in words -> number of searches
    pub distribution: BTreeMap<usize, usize>,
    pub nodes_expanded: usize,
    pub duration: Duration,
    pub searches_per_second: f64,
}

/// Run `config.count` searches between random pairs
///
/// Each pair is drawn from words of the same length, so every search gets
/// past the length check. An empty dictionary gives an empty result.
///
/// # Panics
///
/// Panics only if the hard-coded progress bar template is invalid.
#[must_use]
pub fn run_benchmark(game: &Doublets, config: &BenchmarkConfig) -> BenchmarkResult {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let pairs = sample_pairs(game, config.count, &mut rng);

    let pb = if config.show_progress {
        let pb = ProgressBar::new(pairs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .expect("valid progress template")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let search = game.search();
    let mut found = 0;
    let mut total_length = 0;
    let mut nodes_expanded = 0;
    let mut longest: Option<(String, String, usize)> = None;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    let start = Instant::now();

    for (idx, (from, to)) in pairs.iter().enumerate() {
        let outcome = search.search(from.text(), to.text());
        nodes_expanded += outcome.stats.expanded;

        let length = outcome.ladder.len();
        *distribution.entry(length).or_insert(0) += 1;

        if length > 0 {
            found += 1;
            total_length += length;
            if longest.as_ref().is_none_or(|(_, _, best)| length > *best) {
                longest = Some((from.text().to_string(), to.text().to_string(), length));
            }
        }

        if idx % 10 == 0 && found > 0 {
            let avg = total_length as f64 / found as f64;
            pb.set_message(format!("Avg: {avg:.2} words"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_searches = pairs.len();

    BenchmarkResult {
        total_searches,
        found,
        unreachable: total_searches - found,
        average_length: if found > 0 {
            total_length as f64 / found as f64
        } else {
            0.0
        },
        longest,
        distribution,
        nodes_expanded,
        duration,
        searches_per_second: if duration.is_zero() {
            0.0
        } else {
            total_searches as f64 / duration.as_secs_f64()
        },
    }
}

/// Draw `count` random (start, end) pairs of distinct words with equal length
///
/// Words with no other word of their length never start a pair.
fn sample_pairs<'a, R: Rng>(
    game: &'a Doublets,
    count: usize,
    rng: &mut R,
) -> Vec<(&'a Word, &'a Word)> {
    let mut by_length: FxHashMap<usize, Vec<&Word>> = FxHashMap::default();
    for word in game.lexicon().words() {
        by_length.entry(word.len()).or_default().push(word);
    }

    let starts: Vec<&Word> = game
        .lexicon()
        .words()
        .filter(|word| by_length[&word.len()].len() > 1)
        .collect();

    let mut pairs = Vec::with_capacity(count);
    for _ in 0..count {
        let Some(&start) = starts.choose(rng) else {
            break;
        };
        let bucket = &by_length[&start.len()];
        // Lexicon words are distinct, so a bucket of two or more always has another
        let end = loop {
            if let Some(&end) = bucket.choose(rng)
                && end != start
            {
                break end;
            }
        };
        pairs.push((start, end));
    }

    pairs
}
