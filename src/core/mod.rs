//! Core domain types for word ladders
//!
//! This module contains the dictionary types with no knowledge of searching.
//! Both types are immutable once built.

mod lexicon;
mod word;

pub use lexicon::Lexicon;
pub use word::Word;
