//! Directional line scanning shared by win detection and evaluation
//!
//! Both consumers walk outward from a cell along one of the four line
//! directions, at most [`REACH`] steps per side, and stop at the first cell
//! that does not hold their color. They only differ in what they do with
//! the result: the win check sums run lengths, the evaluator also looks at
//! how each side ended.

use super::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Maximum number of steps scanned on each side of the origin
pub const REACH: i32 = 4;

/// How a one-sided scan terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayEnd {
    /// Stopped on an empty cell
    Open,
    /// Stopped on the board edge or an opposing stone
    Blocked,
    /// Every scanned cell matched; ran out of reach
    Exhausted,
}

/// Result of scanning one side of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ray {
    /// Matching stones found, origin excluded
    pub run: u8,
    pub end: RayEnd,
}

impl Ray {
    #[inline]
    pub fn is_blocked(self) -> bool {
        self.end == RayEnd::Blocked
    }
}

/// Both sides of a line through a cell, origin counted once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    /// Run length including the origin
    pub count: u8,
    /// Number of blocked ends (0-2)
    pub block: u8,
}

/// Walk from `origin` along `dir` while cells hold `color`.
///
/// The origin itself is never read, so this works both for a stone that has
/// just been placed and for a hypothetical placement on an empty cell.
pub fn scan_ray(board: &Board, origin: Pos, dir: (i32, i32), color: Stone) -> Ray {
    let mut run = 0;
    for step in 1..=REACH {
        let Some(pos) = origin.offset(dir, step) else {
            return Ray {
                run,
                end: RayEnd::Blocked,
            };
        };
        match board.get(pos) {
            stone if stone == color => run += 1,
            Stone::Empty => {
                return Ray {
                    run,
                    end: RayEnd::Open,
                }
            }
            _ => {
                return Ray {
                    run,
                    end: RayEnd::Blocked,
                }
            }
        }
    }
    Ray {
        run,
        end: RayEnd::Exhausted,
    }
}

/// Scan forward and backward along `dir` and combine both sides.
pub fn line_through(board: &Board, origin: Pos, dir: (i32, i32), color: Stone) -> LineScan {
    let forward = scan_ray(board, origin, dir, color);
    let backward = scan_ray(board, origin, (-dir.0, -dir.1), color);
    LineScan {
        count: 1 + forward.run + backward.run,
        block: forward.is_blocked() as u8 + backward.is_blocked() as u8,
    }
}
