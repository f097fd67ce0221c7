//! Depth-bounded iterative deepening from the forward frontier
//!
//! Once the BFS levels are spent, every forward frontier entry is extended
//! depth-first, and any configuration found in the backward index completes
//! a solution. The forward index prunes branches that fall back into
//! territory the BFS already covered.

use log::info;

use crate::cube::{Cube, CubeError, Move};
use crate::search::frontier::FrontierEntry;
use crate::search::parallel::coordinator::compose;
use crate::search::visited::VisitedIndex;

/// A solving path and the depth label it was found at
type Found = (Vec<Move>, usize);

/// Iterative-deepening search seeded from a BFS frontier.
pub struct Fallback<'a> {
    moves: &'a [Move],
    forward: &'a VisitedIndex,
    backward: &'a VisitedIndex,
    nodes: u64,
    depth_reached: usize,
}

impl<'a> Fallback<'a> {
    pub fn new(moves: &'a [Move], forward: &'a VisitedIndex, backward: &'a VisitedIndex) -> Self {
        Self {
            moves,
            forward,
            backward,
            nodes: 0,
            depth_reached: 0,
        }
    }

    /// Configurations generated so far
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Deepest bound tried so far
    pub fn depth_reached(&self) -> usize {
        self.depth_reached
    }

    /// Try bounds `1..=max_depth` in turn over every frontier entry.
    ///
    /// Returns the full solving sequence, including the entry's own path.
    pub fn search(
        &mut self,
        frontier: &[FrontierEntry],
        max_depth: usize,
    ) -> Result<Option<Vec<Move>>, CubeError> {
        let cubes = frontier
            .iter()
            .map(|entry| Cube::from_state(entry.state))
            .collect::<Result<Vec<_>, _>>()?;

        for bound in 1..=max_depth {
            self.depth_reached = bound;
            info!(
                "Fallback depth {} over {} frontier entries",
                bound,
                frontier.len()
            );
            for (entry, cube) in frontier.iter().zip(&cubes) {
                let mut path = entry.path.clone();
                if let Some((solution, _)) = self.descend(cube, &mut path, 0, bound) {
                    return Ok(Some(solution));
                }
            }
        }
        Ok(None)
    }

    /// Explore every move below `cube` while `current < max_depth`.
    ///
    /// `path` holds the moves that reached `cube` and is restored on return.
    /// The shallowest success wins; ties go to catalog order, and once a
    /// branch succeeds later siblings are searched with the bound tightened to
    /// its depth.
    fn descend(
        &mut self,
        cube: &Cube,
        path: &mut Vec<Move>,
        current: usize,
        max_depth: usize,
    ) -> Option<Found> {
        if current >= max_depth {
            return None;
        }

        let mut best: Option<Found> = None;
        let mut bound = max_depth;
        let previous = path.last().copied();

        for &mv in self.moves {
            if previous == Some(mv.inverse()) {
                continue;
            }
            let (child, solved) = cube.turned(mv);
            let state = child.state();
            self.nodes += 1;
            path.push(mv);

            let found = if let Some(backward) = self.backward.get(&state) {
                Some((compose(path, backward), current + 1))
            } else if self.forward.contains(&state) {
                None
            } else if solved {
                Some((path.clone(), current))
            } else {
                self.descend(&child, path, current + 1, bound)
            };

            path.pop();

            if let Some((moves, depth)) = found
                && best.as_ref().is_none_or(|(_, d)| depth < *d)
            {
                bound = depth;
                best = Some((moves, depth));
            }
        }

        best
    }
}
