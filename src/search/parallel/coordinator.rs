//! Level-synchronized bidirectional BFS driven over the worker pool.
//!
//! The coordinator is the only owner of the two visited indices. Workers get
//! read-only shards of the current frontier and send their children back; the
//! coordinator merges them in shard order, checks every child against the
//! opposite index, and builds the next frontier from children it has not seen.

use crate::cube::{CubeState, Move};
use crate::search::frontier::{FrontierEntry, Side, partition};
use crate::search::parallel::channel::{CoordinatorMessage, WorkerMessage};
use crate::search::parallel::pool::WorkerPool;
use crate::search::result::SearchStatistics;
use crate::search::solver::SolveError;
use crate::search::visited::VisitedIndex;
use log::{debug, info, warn};

/// Both visited indices and both frontiers of a bidirectional search.
#[derive(Debug, Clone)]
pub struct BidirectionalState {
    pub forward_index: VisitedIndex,
    pub backward_index: VisitedIndex,
    pub forward_frontier: Vec<FrontierEntry>,
    pub backward_frontier: Vec<FrontierEntry>,
}

impl BidirectionalState {
    /// Fresh state: each side knows only its own root.
    pub fn seeded(start: CubeState, goal: CubeState) -> Self {
        Self {
            forward_index: VisitedIndex::seeded(start),
            backward_index: VisitedIndex::seeded(goal),
            forward_frontier: vec![FrontierEntry::root(start)],
            backward_frontier: vec![FrontierEntry::root(goal)],
        }
    }

    fn frontier_mut(&mut self, side: Side) -> &mut Vec<FrontierEntry> {
        match side {
            Side::Forward => &mut self.forward_frontier,
            Side::Backward => &mut self.backward_frontier,
        }
    }

    /// The index `side` grows, and the one it meets.
    fn indices_mut(&mut self, side: Side) -> (&mut VisitedIndex, &VisitedIndex) {
        match side {
            Side::Forward => (&mut self.forward_index, &self.backward_index),
            Side::Backward => (&mut self.backward_index, &self.forward_index),
        }
    }

    /// Fold one shard's children into the index and the next frontier.
    ///
    /// Returns the composed solution if any child is known to the other side.
    fn merge(
        &mut self,
        side: Side,
        children: Vec<FrontierEntry>,
        next: &mut Vec<FrontierEntry>,
    ) -> Option<Vec<Move>> {
        let (same, opposite) = self.indices_mut(side);
        for child in children {
            if let Some(other) = opposite.get(&child.state) {
                return Some(match side {
                    Side::Forward => compose(&child.path, other),
                    Side::Backward => compose(other, &child.path),
                });
            }
            if same.insert_first(child.state, &child.path) {
                next.push(child);
            }
        }
        None
    }
}

/// Forward path followed by an already-inverted backward path
pub fn compose(forward: &[Move], backward: &[Move]) -> Vec<Move> {
    let mut path = Vec::with_capacity(forward.len() + backward.len());
    path.extend_from_slice(forward);
    path.extend_from_slice(backward);
    path
}

enum ShardResult {
    Children(Vec<FrontierEntry>),
    Solved(Vec<Move>),
}

/// Drives BFS levels over a borrowed worker pool.
pub struct Coordinator<'p> {
    pool: &'p WorkerPool,
}

impl<'p> Coordinator<'p> {
    pub fn new(pool: &'p WorkerPool) -> Self {
        Self { pool }
    }

    /// Run up to `levels` levels, forward then backward within each.
    ///
    /// Returns the first solution found, or None once the levels are spent.
    pub fn run(
        &self,
        state: &mut BidirectionalState,
        levels: usize,
        stats: &mut SearchStatistics,
    ) -> Result<Option<Vec<Move>>, SolveError> {
        for level in 0..levels {
            for side in [Side::Forward, Side::Backward] {
                if let Some(path) = self.expand_side(state, side, stats)? {
                    info!(
                        "Level {}: {} side found a {}-move solution",
                        level + 1,
                        side,
                        path.len()
                    );
                    return Ok(Some(path));
                }
            }
            stats.levels_completed = level + 1;
            info!(
                "Level {} done: frontiers {} forward / {} backward, visited {} / {}",
                level + 1,
                state.forward_frontier.len(),
                state.backward_frontier.len(),
                state.forward_index.len(),
                state.backward_index.len()
            );
        }
        Ok(None)
    }

    /// Expand one side's frontier by a single move.
    ///
    /// Shards are merged in order as soon as every earlier shard is in, so the
    /// earliest solution in shard-and-enumeration order wins and later shards
    /// are discarded.
    pub fn expand_side(
        &self,
        state: &mut BidirectionalState,
        side: Side,
        stats: &mut SearchStatistics,
    ) -> Result<Option<Vec<Move>>, SolveError> {
        let mut frontier = std::mem::take(state.frontier_mut(side));
        if frontier.is_empty() {
            warn!("The {} frontier is empty", side);
            return Ok(None);
        }

        let shards = partition(frontier.len(), self.pool.size());
        debug!(
            "Dispatching {} {} entries in {} shards",
            frontier.len(),
            side,
            shards.len()
        );

        // Hand each worker its own slice, split off from the back
        let mut batches: Vec<Vec<FrontierEntry>> = shards
            .iter()
            .rev()
            .map(|range| frontier.split_off(range.start))
            .collect();
        batches.reverse();
        for (shard, entries) in batches.into_iter().enumerate() {
            self.pool
                .dispatch(shard, CoordinatorMessage::Expand { shard, side, entries })?;
        }

        let mut pending: Vec<Option<ShardResult>> = shards.iter().map(|_| None).collect();
        let mut merged = 0;
        let mut next = Vec::new();

        while merged < shards.len() {
            match self.pool.recv()? {
                WorkerMessage::Expanded {
                    shard, children, ..
                } => {
                    stats.states_expanded += children.len() as u64;
                    pending[shard] = Some(ShardResult::Children(children));
                }
                WorkerMessage::Solved { shard, path, .. } => {
                    pending[shard] = Some(ShardResult::Solved(path));
                }
                WorkerMessage::Failed {
                    worker_id,
                    shard,
                    message,
                } => {
                    warn!("Worker {} failed on shard {}: {}", worker_id, shard, message);
                    return Err(SolveError::WorkerFailed { worker_id, message });
                }
            }

            while let Some(result) = pending.get_mut(merged).and_then(Option::take) {
                match result {
                    ShardResult::Solved(path) => return Ok(Some(path)),
                    ShardResult::Children(children) => {
                        if let Some(path) = state.merge(side, children, &mut next) {
                            return Ok(Some(path));
                        }
                    }
                }
                merged += 1;
            }
        }

        *state.frontier_mut(side) = next;
        Ok(None)
    }
}
