//! Word lists for ladder search
//!
//! Provides the embedded default dictionary and loaders for external lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
