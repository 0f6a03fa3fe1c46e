//! Evaluation module for Gomoku positions
//!
//! Scores a hypothetical stone on an empty cell by the line shapes it would
//! form in each of the four directions. There is no lookahead: the opponent
//! picks moves from these scores alone.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_line, evaluate_position};
pub use patterns::{line_score, PatternScore};
