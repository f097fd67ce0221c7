//! Search result types and statistics

use crate::cube::moves::format_sequence;
use crate::cube::{Cube, Move, MoveSet};
use crate::search::config::Algorithm;
use std::time::Duration;

/// A move sequence that takes the start configuration to a solved one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    moves: Vec<Move>,
    move_set: MoveSet,
}

impl Solution {
    pub fn new(moves: Vec<Move>, move_set: MoveSet) -> Self {
        Self { moves, move_set }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn move_set(&self) -> MoveSet {
        self.move_set
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Replay the solution on a copy of `start` and check the result is solved
    pub fn verify(&self, start: &Cube) -> bool {
        let mut cube = *start;
        cube.apply_all(&self.moves);
        cube.is_solved()
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_sequence(&self.moves, self.move_set))
    }
}

/// Result of a solve
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The solving sequence, or None if the move budget ran out
    pub solution: Option<Solution>,
    /// Statistics from the search
    pub statistics: SearchStatistics,
}

impl SearchResult {
    pub fn solved(solution: Solution, statistics: SearchStatistics) -> Self {
        Self {
            solution: Some(solution),
            statistics,
        }
    }

    /// No solution within the configured budget
    pub fn exhausted(statistics: SearchStatistics) -> Self {
        Self {
            solution: None,
            statistics,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Statistics from a solve
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Algorithm used for the search
    pub algorithm: Algorithm,
    /// Move catalog searched
    pub move_set: MoveSet,
    /// Worker threads used for BFS expansion (0 if no BFS ran)
    pub workers: usize,
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// BFS levels run to completion
    pub levels_completed: usize,
    /// Children generated by BFS expansion
    pub states_expanded: u64,
    /// Size of the forward visited index when the search ended
    pub forward_visited: usize,
    /// Size of the backward visited index when the search ended
    pub backward_visited: usize,
    /// Deepest fallback bound tried
    pub fallback_depth: usize,
    /// Configurations generated by the fallback
    pub fallback_nodes: u64,
}

impl SearchStatistics {
    pub fn new(algorithm: Algorithm, move_set: MoveSet) -> Self {
        Self {
            algorithm,
            move_set,
            ..Default::default()
        }
    }

    /// Get generated configurations per second, across BFS and fallback
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            (self.states_expanded + self.fallback_nodes) as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Algorithm: {}\n", self.algorithm));
        s.push_str(&format!("Move set: {}\n", self.move_set));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));

        if self.workers > 0 {
            s.push_str(&format!("Workers: {}\n", self.workers));
            s.push_str(&format!("BFS levels completed: {}\n", self.levels_completed));
            s.push_str(&format!("States expanded: {}\n", self.states_expanded));
        }
        s.push_str(&format!(
            "Visited: {} forward, {} backward\n",
            self.forward_visited, self.backward_visited
        ));

        if self.fallback_depth > 0 {
            s.push_str(&format!("Fallback depth: {}\n", self.fallback_depth));
            s.push_str(&format!("Fallback nodes: {}\n", self.fallback_nodes));
        }

        s.push_str(&format!(
            "Throughput: {:.0} states/sec\n",
            self.throughput()
        ));

        s
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.solution {
            Some(solution) if solution.is_empty() => writeln!(f, "Already solved."),
            Some(solution) => {
                writeln!(f, "Solution found ({} moves):", solution.len())?;
                writeln!(f, "  {}", solution)
            }
            None => writeln!(f, "No solution within the move budget."),
        }
    }
}
