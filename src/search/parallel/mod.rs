//! Parallel frontier expansion for the bidirectional search.
//!
//! # Architecture
//!
//! - A **coordinator** owns both visited indices and drives the BFS levels
//! - A fixed **pool** of worker threads expands frontier shards
//! - A **channel system** carries shard assignments out and children back
//!
//! Each shard is moved to its worker by value. Beyond the pool's stop flag,
//! workers never touch shared mutable state: every child they produce goes
//! back to the coordinator, which merges results in shard order so that the
//! outcome depends only on the worker count.
//!
//! # Example
//!
//! ```ignore
//! use cubesolve::search::parallel::{BidirectionalState, Coordinator, WorkerPool};
//!
//! let pool = WorkerPool::spawn(4, MoveSet::Official);
//! let mut state = BidirectionalState::seeded(start.state(), goal.state());
//! let found = Coordinator::new(&pool).run(&mut state, 3, &mut stats)?;
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;
pub mod pool;

pub use config::ParallelConfig;
pub use coordinator::{BidirectionalState, Coordinator};
pub use pool::WorkerPool;
