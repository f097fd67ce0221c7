//! Top-level solve: validation, bidirectional BFS, then the fallback

use std::time::Instant;

use log::{info, warn};
use thiserror::Error;

use crate::cube::{Cube, CubeError, Move, validate};
use crate::search::config::SearchConfig;
use crate::search::fallback::Fallback;
use crate::search::parallel::ParallelConfig;
use crate::search::parallel::coordinator::{BidirectionalState, Coordinator};
use crate::search::parallel::pool::WorkerPool;
use crate::search::result::{SearchResult, SearchStatistics, Solution};

/// Errors that abort a solve.
///
/// Running out of move budget is not an error; it yields a [`SearchResult`]
/// without a solution.
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("invalid start configuration: {0}")]
    InvalidStart(#[from] CubeError),
    #[error("invalid goal configuration: {0}")]
    InvalidGoal(#[source] CubeError),
    #[error("goal configuration is not solved")]
    UnsolvedGoal,
    #[error("worker {worker_id} failed: {message}")]
    WorkerFailed { worker_id: usize, message: String },
    #[error("worker pool disconnected")]
    PoolDisconnected,
    #[error("corrupt frontier state: {0}")]
    CorruptState(#[source] CubeError),
}

/// Solver bound to one search and pool configuration.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SearchConfig,
    parallel: ParallelConfig,
}

impl Solver {
    pub fn new(config: SearchConfig, parallel: ParallelConfig) -> Self {
        Self { config, parallel }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn parallel_config(&self) -> &ParallelConfig {
        &self.parallel
    }

    /// The solved configuration a solve of `start` aims for.
    ///
    /// Face turns never move centers, so the goal is every face filled with
    /// its center color. Layered slides do move them, and there the reference
    /// solved cube is the goal.
    pub fn goal_for(&self, start: &Cube) -> Cube {
        if self.config.move_set.fixes_centers() {
            start.solved_state()
        } else {
            Cube::solved()
        }
    }

    /// Find a move sequence taking `start` to a solved configuration.
    ///
    /// An already solved start returns an empty solution without spawning any
    /// worker.
    pub fn solve(&self, start: &Cube) -> Result<SearchResult, SolveError> {
        self.solve_towards(start, &self.goal_for(start))
    }

    /// Like [`Solver::solve`], with the backward search rooted at `goal`.
    ///
    /// The goal must be a valid solved configuration. Any solved
    /// configuration met by the forward side also ends the search.
    pub fn solve_towards(&self, start: &Cube, goal: &Cube) -> Result<SearchResult, SolveError> {
        let timer = Instant::now();
        let move_set = self.config.move_set;
        let mut stats = SearchStatistics::new(self.config.algorithm, move_set);

        validate(start)?;
        validate(goal).map_err(SolveError::InvalidGoal)?;
        if !goal.is_solved() {
            return Err(SolveError::UnsolvedGoal);
        }

        if start.is_solved() {
            info!("Start configuration is already solved");
            stats.elapsed_time = timer.elapsed();
            return Ok(SearchResult::solved(Solution::new(Vec::new(), move_set), stats));
        }

        let mut state = BidirectionalState::seeded(start.state(), goal.state());
        let levels = self.config.effective_bfs_levels();

        if levels > 0 {
            let pool = WorkerPool::spawn(self.parallel.num_workers, move_set);
            stats.workers = pool.size();
            info!(
                "Bidirectional search: {} levels over {} workers ({} moves)",
                levels,
                pool.size(),
                move_set
            );
            let found = Coordinator::new(&pool).run(&mut state, levels, &mut stats);
            pool.shutdown();
            if let Some(moves) = found? {
                return Ok(self.finish(moves, &state, stats, timer));
            }
        }

        let max_depth = self.config.fallback_depth();
        if max_depth > 0 {
            info!(
                "Iterative deepening from {} frontier entries, up to depth {}",
                state.forward_frontier.len(),
                max_depth
            );
            let mut fallback =
                Fallback::new(move_set.moves(), &state.forward_index, &state.backward_index);
            let found = fallback
                .search(&state.forward_frontier, max_depth)
                .map_err(SolveError::CorruptState)?;
            stats.fallback_depth = fallback.depth_reached();
            stats.fallback_nodes = fallback.nodes();
            if let Some(moves) = found {
                return Ok(self.finish(moves, &state, stats, timer));
            }
        }

        warn!(
            "No solution within {} moves ({} algorithm)",
            self.config.max_moves, self.config.algorithm
        );
        record_indices(&mut stats, &state);
        stats.elapsed_time = timer.elapsed();
        Ok(SearchResult::exhausted(stats))
    }

    fn finish(
        &self,
        moves: Vec<Move>,
        state: &BidirectionalState,
        mut stats: SearchStatistics,
        timer: Instant,
    ) -> SearchResult {
        record_indices(&mut stats, state);
        stats.elapsed_time = timer.elapsed();
        info!("Found a {}-move solution in {:.2?}", moves.len(), stats.elapsed_time);
        SearchResult::solved(Solution::new(moves, self.config.move_set), stats)
    }
}

fn record_indices(stats: &mut SearchStatistics, state: &BidirectionalState) {
    stats.forward_visited = state.forward_index.len();
    stats.backward_visited = state.backward_index.len();
}
