//! Heuristic evaluation of a single candidate move
//!
//! For a hypothetical stone of `color` on an empty cell, each of the four
//! line directions is scanned up to four cells per side. The run of `color`
//! stones through the cell and the number of blocked ends select a score
//! from [`line_score`]; the four direction scores are summed.
//!
//! Note the scan only counts stones *contiguous* with the cell. Split shapes
//! such as `OO_O` score as a two, and a run continuing past the reach is cut
//! off. The opponent's play relies on exactly this behavior.

use crate::board::{line_through, Board, Pos, Stone, DIRECTIONS};

use super::patterns::line_score;

/// Score one direction through `pos` as if `color` stood there.
#[inline]
#[must_use]
pub fn evaluate_line(board: &Board, pos: Pos, dir: (i32, i32), color: Stone) -> i32 {
    let line = line_through(board, pos, dir, color);
    line_score(line.count, line.block)
}

/// Evaluate placing `color` at the empty cell `pos`.
///
/// # Arguments
/// * `board` - The current board state
/// * `pos` - An empty cell; the placement is hypothetical
/// * `color` - The color whose prospects are scored
///
/// # Returns
/// Sum of the four direction scores, `0` when no line of two or more forms
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, color: Stone) -> i32 {
    debug_assert!(board.is_empty(pos), "evaluated cell {pos} is occupied");
    DIRECTIONS
        .iter()
        .map(|&dir| evaluate_line(board, pos, dir, color))
        .sum()
}
