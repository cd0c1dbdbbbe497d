//! Doublets
//!
//! Word ladder solver: finds the shortest chain of dictionary words between
//! two words, changing one letter at a time, using breadth-first search.
//!
//! # Quick Start
//!
//! ```rust
//! use doublets::Doublets;
//!
//! let game = Doublets::from_reader("cold\ncord\ncard\nward\nwarm\n".as_bytes()).unwrap();
//!
//! let ladder = game.min_ladder("cold", "warm");
//! assert_eq!(ladder, ["cold", "cord", "card", "ward", "warm"]);
//! assert!(game.is_word_ladder(&ladder));
//! assert_eq!(game.hamming_distance("cold", "warmer"), -1);
//! ```

// Core domain types
pub mod core;

// Search algorithms
pub mod ladder;

// String-level game facade
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use game::Doublets;
