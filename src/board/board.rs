//! Fixed 15x15 occupancy grid

use super::{Move, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::MoveError;

/// Game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Stone; BOARD_SIZE]; BOARD_SIZE],
    /// Number of occupied cells
    stones: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE],
            stones: 0,
        }
    }

    /// Rebuild a board by replaying moves onto an empty grid.
    ///
    /// Fails on the first move that would not be legal on the partially
    /// rebuilt board (occupied cell or an `Empty` stone).
    pub fn from_moves(moves: &[Move]) -> Result<Self, MoveError> {
        let mut board = Self::new();
        for mv in moves {
            board.set(mv.pos, mv.stone)?;
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone on an empty cell.
    ///
    /// The board is left untouched when the cell is off the grid or occupied,
    /// or when asked to place `Stone::Empty`.
    pub fn set(&mut self, pos: Pos, stone: Stone) -> Result<(), MoveError> {
        if !Pos::is_valid(pos.row as i32, pos.col as i32) {
            return Err(MoveError::OutOfBounds {
                row: pos.row as usize,
                col: pos.col as usize,
            });
        }
        if stone == Stone::Empty {
            return Err(MoveError::EmptyStone);
        }
        let occupant = self.get(pos);
        if occupant != Stone::Empty {
            return Err(MoveError::Occupied { pos, occupant });
        }
        self.cells[pos.row as usize][pos.col as usize] = stone;
        self.stones += 1;
        Ok(())
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(move |&pos| self.is_empty(pos))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == TOTAL_CELLS
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
