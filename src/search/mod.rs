//! Search engine for solving a cube configuration
//!
//! The engine runs in two phases:
//! - Bidirectional BFS: forward from the start and backward from the goal,
//!   one level at a time, with frontier expansion spread over a worker pool
//!   and all bookkeeping done by a single coordinator
//! - Fallback: iterative deepening from the remaining forward frontier, using
//!   the backward visited index as the goal test
//!
//! [`Algorithm`] picks how the move budget is split between the two.

pub mod config;
pub mod fallback;
pub mod frontier;
pub mod parallel;
pub mod result;
pub mod solver;
pub mod visited;

pub use config::{Algorithm, SearchConfig};
pub use frontier::{FrontierEntry, Side};
pub use parallel::ParallelConfig;
pub use result::{SearchResult, SearchStatistics, Solution};
pub use solver::{SolveError, Solver};
pub use visited::VisitedIndex;
