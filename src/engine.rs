//! Opponent move selection
//!
//! The opponent looks exactly one ply ahead. Depending on the difficulty it
//! either plays a uniformly random empty cell, or scores every empty cell
//! with [`evaluate_position`] twice (once for itself, once for the human)
//! and plays the best blend of attack and defense:
//!
//! ```text
//! combined = offensive + weight * defensive
//! ```
//!
//! Medium uses a defense weight of 0.5, Hard 0.8. Ties go to the first cell
//! in row-major order.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut engine = AIEngine::with_seed(42);
//! let mut board = Board::new();
//! board.set(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Difficulty::Hard, Stone::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Strategy: {:?}", result.strategy);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate_position;

/// Opponent strength setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Random empty cell
    Easy,
    /// Heuristic, defense weighted 0.5
    #[default]
    Medium,
    /// Heuristic, defense weighted 0.8
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Weight of the opponent's (defensive) score, `None` for random play
    #[inline]
    pub fn defense_weight(self) -> Option<f64> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(0.5),
            Difficulty::Hard => Some(0.8),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How the move was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniform pick among empty cells
    Random,
    /// Best combined heuristic score
    Heuristic,
}

/// Result of a move selection with statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Selected move, `None` when the board is full
    pub best_move: Option<Pos>,
    /// Combined score of the selected move (0 for random picks)
    pub score: f64,
    pub strategy: Strategy,
    /// Number of empty cells considered
    pub cells_evaluated: usize,
    /// Time taken in microseconds
    pub time_us: u64,
}

/// Combined attack/defense score for `color` playing at `pos`.
///
/// `offensive` is the score of `color` itself at `pos`, `defensive` the
/// score the opponent would get there, i.e. how much playing `pos` denies.
#[inline]
#[must_use]
pub fn combined_score(board: &Board, pos: Pos, color: Stone, defense_weight: f64) -> f64 {
    let offensive = evaluate_position(board, pos, color);
    let defensive = evaluate_position(board, pos, color.opponent());
    f64::from(offensive) + defense_weight * f64::from(defensive)
}

/// Single-ply opponent.
///
/// Holds only the random number generator used for Easy play; the heuristic
/// path is deterministic.
#[derive(Debug, Clone)]
pub struct AIEngine {
    rng: StdRng,
}

impl AIEngine {
    /// Create an engine seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create an engine with a fixed seed, for reproducible Easy games.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Get the move for `color`, or `None` if the board is full.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, difficulty: Difficulty, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, difficulty, color).best_move
    }

    /// Get the move for `color` along with how it was found.
    #[must_use]
    pub fn get_move_with_stats(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
        color: Stone,
    ) -> MoveResult {
        let start = Instant::now();

        let mut result = match difficulty.defense_weight() {
            None => self.pick_random(board),
            Some(weight) => Self::pick_best(board, color, weight),
        };
        result.time_us = start.elapsed().as_micros() as u64;

        tracing::debug!(
            %difficulty,
            %color,
            best_move = ?result.best_move,
            score = result.score,
            cells = result.cells_evaluated,
            time_us = result.time_us,
            "opponent move selected"
        );
        result
    }

    fn pick_random(&mut self, board: &Board) -> MoveResult {
        let cells: Vec<Pos> = board.empty_cells().collect();
        let best_move = if cells.is_empty() {
            None
        } else {
            Some(cells[self.rng.random_range(0..cells.len())])
        };
        MoveResult {
            best_move,
            score: 0.0,
            strategy: Strategy::Random,
            cells_evaluated: cells.len(),
            time_us: 0,
        }
    }

    fn pick_best(board: &Board, color: Stone, defense_weight: f64) -> MoveResult {
        let mut best_move = None;
        let mut best_score = f64::NEG_INFINITY;
        let mut cells = 0;

        for pos in board.empty_cells() {
            cells += 1;
            let score = combined_score(board, pos, color, defense_weight);
            // Strict comparison keeps the first cell on ties
            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        MoveResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0.0 },
            strategy: Strategy::Heuristic,
            cells_evaluated: cells,
            time_us: 0,
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
