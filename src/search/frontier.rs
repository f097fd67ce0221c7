//! Frontier entries and the per-shard expansion run by workers

use std::fmt;
use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::cube::{Cube, CubeError, CubeState, Move};

/// Which end of the bidirectional search a frontier grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Grows from the start configuration
    Forward,
    /// Grows from the goal configuration
    Backward,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Forward => write!(f, "forward"),
            Side::Backward => write!(f, "backward"),
        }
    }
}

/// A discovered configuration together with the path that reached it.
///
/// Backward paths are stored already inverted and in forward order, so a
/// forward path followed by a backward path always solves the cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub state: CubeState,
    pub path: Vec<Move>,
}

impl FrontierEntry {
    /// Entry for a configuration reached with no moves
    pub fn root(state: CubeState) -> Self {
        Self {
            state,
            path: Vec::new(),
        }
    }

    /// Path to a child reached from this entry through `mv`
    pub fn child_path(&self, side: Side, mv: Move) -> Vec<Move> {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        match side {
            Side::Forward => {
                path.extend_from_slice(&self.path);
                path.push(mv);
            }
            Side::Backward => {
                path.push(mv.inverse());
                path.extend_from_slice(&self.path);
            }
        }
        path
    }
}

/// Outcome of expanding one shard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// All children, grouped per parent in shard order
    Children(Vec<FrontierEntry>),
    /// A forward child turned out solved; carries its full path
    Solved(Vec<Move>),
    /// The stop flag was raised before the shard was done
    Cancelled,
}

/// Apply every move to every entry of the shard.
///
/// Children come out in (parent, move) enumeration order. On the forward side
/// the first solved child stops the expansion. `stop` is checked before each
/// parent; once it is set the partial result is dropped.
pub fn expand_shard(
    entries: &[FrontierEntry],
    side: Side,
    moves: &[Move],
    stop: &AtomicBool,
) -> Result<Expansion, CubeError> {
    let mut children = Vec::with_capacity(entries.len() * moves.len());

    for entry in entries {
        if stop.load(Ordering::SeqCst) {
            return Ok(Expansion::Cancelled);
        }
        let cube = Cube::from_state(entry.state)?;
        for &mv in moves {
            let (child, solved) = cube.turned(mv);
            let path = entry.child_path(side, mv);
            if side == Side::Forward && solved {
                return Ok(Expansion::Solved(path));
            }
            children.push(FrontierEntry {
                state: child.state(),
                path,
            });
        }
    }

    Ok(Expansion::Children(children))
}

/// Split `len` entries into contiguous shards, at most one per worker.
///
/// A frontier smaller than the pool goes whole to a single worker; otherwise
/// every worker gets `len / workers` entries and the last also takes the
/// remainder.
pub fn partition(len: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk = len / workers;
    if chunk == 0 {
        return vec![0..len];
    }
    (0..workers)
        .map(|i| {
            let start = i * chunk;
            let end = if i + 1 == workers { len } else { start + chunk };
            start..end
        })
        .collect()
}
