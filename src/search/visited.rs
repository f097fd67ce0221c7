//! First-discovery-wins map from fingerprint to path

use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

use crate::cube::{CubeState, Move};

/// Every configuration one side of the search has reached, with the path
/// that reached it first. Entries are never overwritten.
#[derive(Debug, Clone, Default)]
pub struct VisitedIndex {
    paths: FxHashMap<CubeState, Vec<Move>>,
}

impl VisitedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// An index holding a single root configuration with an empty path
    pub fn seeded(root: CubeState) -> Self {
        let mut index = Self::new();
        index.insert_first(root, &[]);
        index
    }

    /// Record `path` for `state` unless the state is already known.
    ///
    /// Returns true if this call inserted it.
    pub fn insert_first(&mut self, state: CubeState, path: &[Move]) -> bool {
        match self.paths.entry(state) {
            Entry::Vacant(slot) => {
                slot.insert(path.to_vec());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, state: &CubeState) -> Option<&[Move]> {
        self.paths.get(state).map(Vec::as_slice)
    }

    pub fn contains(&self, state: &CubeState) -> bool {
        self.paths.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
