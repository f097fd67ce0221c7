//! Bidirectional breadth-first cube solver
//!
//! - [`cube`]: packed configuration, moves and legality checks
//! - [`notation`]: move-string parsing in both label conventions
//! - [`search`]: the parallel bidirectional search and its fallback

pub mod cube;
pub mod notation;
pub mod search;
