//! Word ladder search
//!
//! Distance, neighbor discovery, shortest-ladder search and ladder validation
//! over a [`Lexicon`](crate::core::Lexicon).

pub mod distance;
mod path;
mod search;
pub mod validate;

pub use distance::{UNDEFINED_DISTANCE, distance_or_sentinel, hamming_distance};
pub use path::Ladder;
pub use search::{LadderSearch, SearchOutcome, SearchStats};
pub use validate::{LadderViolation, validate_ladder};
