//! Configuration types for the solver

use crate::cube::MoveSet;

/// Default number of bidirectional BFS levels before the fallback takes over
pub const DEFAULT_BFS_LEVELS: usize = 6;
/// Default total move budget
pub const DEFAULT_MAX_MOVES: usize = 20;

/// Search strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Bidirectional BFS for the configured levels, then iterative deepening
    #[default]
    Combined,
    /// Bidirectional BFS only, for up to half the move budget
    Bidirectional,
    /// Iterative deepening straight from the start configuration
    IterativeDeepening,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Combined => write!(f, "combined"),
            Algorithm::Bidirectional => write!(f, "bidirectional"),
            Algorithm::IterativeDeepening => write!(f, "iterative-deepening"),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "combined" | "hybrid" => Ok(Algorithm::Combined),
            "bidirectional" | "bidi" | "bfs" => Ok(Algorithm::Bidirectional),
            "iterative-deepening" | "iddfs" | "ids" => Ok(Algorithm::IterativeDeepening),
            _ => Err(format!(
                "Unknown algorithm: '{}'. Valid options: combined, bidirectional, iterative-deepening",
                s
            )),
        }
    }
}

/// Main search configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Search strategy
    pub algorithm: Algorithm,
    /// Levels of bidirectional BFS for the combined strategy
    pub bfs_levels: usize,
    /// Upper bound on the solution length the search will look for
    pub max_moves: usize,
    /// Move catalog to search over
    pub move_set: MoveSet,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            bfs_levels: DEFAULT_BFS_LEVELS,
            max_moves: DEFAULT_MAX_MOVES,
            move_set: MoveSet::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_bfs_levels(mut self, levels: usize) -> Self {
        self.bfs_levels = levels;
        self
    }

    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = max_moves;
        self
    }

    pub fn with_move_set(mut self, move_set: MoveSet) -> Self {
        self.move_set = move_set;
        self
    }

    /// Number of BFS levels the selected algorithm actually runs
    pub fn effective_bfs_levels(&self) -> usize {
        match self.algorithm {
            Algorithm::Combined => self.bfs_levels,
            Algorithm::Bidirectional => self.max_moves / 2,
            Algorithm::IterativeDeepening => 0,
        }
    }

    /// Deepest bound the fallback iterates to once the BFS levels are spent.
    ///
    /// Each BFS level grows both sides by one move, so `2 * levels` of the
    /// budget is already used up.
    pub fn fallback_depth(&self) -> usize {
        match self.algorithm {
            Algorithm::Bidirectional => 0,
            Algorithm::Combined | Algorithm::IterativeDeepening => self
                .max_moves
                .saturating_sub(2 * self.effective_bfs_levels()),
        }
    }
}
