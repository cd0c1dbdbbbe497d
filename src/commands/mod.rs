//! Command implementations

pub mod benchmark;
pub mod check;
pub mod ladder;
pub mod neighbors;
pub mod simple;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use check::{CheckResult, check_ladder};
pub use ladder::{LadderConfig, LadderOutcome, LadderResult, find_ladder};
pub use neighbors::{DistanceResult, NeighborsResult, list_neighbors, measure_distance};
pub use simple::{ShellCommand, run_simple};
