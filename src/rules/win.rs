//! Win condition checking
//!
//! A game is won by five or more stones of one color in a row. Overlines
//! count. Only the lines through the most recent stone need checking, since
//! any earlier five would already have ended the game.

use crate::board::{line_through, scan_ray, Board, Pos, Stone, DIRECTIONS};

/// Fast five-in-a-row check at a specific position.
///
/// Assumes the stone at `pos` has already been placed; its color decides
/// which runs count. Returns `false` for an empty cell.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos) -> bool {
    let color = board.get(pos);
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| line_through(board, pos, dir, color).count >= 5)
}

/// Find five contiguous winning stones through `pos`, if any.
///
/// The returned stones are ordered along the line, starting from the far end
/// of the backward side.
pub fn find_five_line(board: &Board, pos: Pos) -> Option<[Pos; 5]> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }

    for &dir in &DIRECTIONS {
        let backward = scan_ray(board, pos, (-dir.0, -dir.1), color);
        let forward = scan_ray(board, pos, dir, color);
        if 1 + backward.run + forward.run < 5 {
            continue;
        }

        let start = -(backward.run as i32);
        let mut line = [pos; 5];
        for (i, slot) in line.iter_mut().enumerate() {
            // Every cell in the run is on the board, scan_ray just saw it
            *slot = pos.offset(dir, start + i as i32)?;
        }
        return Some(line);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, cells: &[(u8, u8)], stone: Stone) {
        for &(r, c) in cells {
            board.set(Pos::new(r, c), stone).unwrap();
        }
    }

    #[test]
    fn test_single_stone_is_not_a_win() {
        let mut board = Board::new();
        board.set(Pos::new(7, 7), Stone::Black).unwrap();
        assert!(!has_five_at_pos(&board, Pos::new(7, 7)));
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        place_all(&mut board, &[(9, 0), (9, 1), (9, 2), (9, 3), (9, 4)], Stone::Black);
        for c in 0..5 {
            assert!(has_five_at_pos(&board, Pos::new(9, c)));
        }
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        place_all(&mut board, &[(10, 14), (11, 14), (12, 14), (13, 14), (14, 14)], Stone::White);
        assert!(has_five_at_pos(&board, Pos::new(14, 14)));
        assert!(has_five_at_pos(&board, Pos::new(12, 14)));
    }

    #[test]
    fn test_five_in_row_diagonal_se() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)], Stone::Black);
        assert!(has_five_at_pos(&board, Pos::new(2, 2)));
    }

    #[test]
    fn test_five_in_row_diagonal_sw() {
        let mut board = Board::new();
        place_all(&mut board, &[(3, 10), (4, 9), (5, 8), (6, 7), (7, 6)], Stone::White);
        assert!(has_five_at_pos(&board, Pos::new(3, 10)));
        assert!(has_five_at_pos(&board, Pos::new(7, 6)));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(9, 0), (9, 1), (9, 2), (9, 3)], Stone::Black);
        assert!(!has_five_at_pos(&board, Pos::new(9, 3)));
    }

    #[test]
    fn test_overline_wins() {
        let mut board = Board::new();
        place_all(&mut board, &[(5, 2), (5, 3), (5, 4), (5, 6), (5, 7), (5, 8)], Stone::Black);
        board.set(Pos::new(5, 5), Stone::Black).unwrap();
        assert!(has_five_at_pos(&board, Pos::new(5, 5)));
    }

    #[test]
    fn test_gap_breaks_the_run() {
        let mut board = Board::new();
        place_all(&mut board, &[(5, 2), (5, 3), (5, 5), (5, 6), (5, 7)], Stone::Black);
        assert!(!has_five_at_pos(&board, Pos::new(5, 5)));
    }

    #[test]
    fn test_opponent_stone_breaks_the_run() {
        let mut board = Board::new();
        place_all(&mut board, &[(5, 2), (5, 3), (5, 5), (5, 6)], Stone::Black);
        board.set(Pos::new(5, 4), Stone::White).unwrap();
        assert!(!has_five_at_pos(&board, Pos::new(5, 4)));
        assert!(!has_five_at_pos(&board, Pos::new(5, 5)));
    }

    #[test]
    fn test_other_color_five_elsewhere_does_not_count() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], Stone::White);
        board.set(Pos::new(7, 7), Stone::Black).unwrap();
        assert!(!has_five_at_pos(&board, Pos::new(7, 7)));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert!(!has_five_at_pos(&board, Pos::new(7, 7)));
        assert_eq!(find_five_line(&board, Pos::new(7, 7)), None);
    }

    #[test]
    fn test_find_five_line_from_middle() {
        let mut board = Board::new();
        place_all(&mut board, &[(2, 6), (3, 5), (4, 4), (5, 3), (6, 2)], Stone::Black);

        let line = find_five_line(&board, Pos::new(4, 4)).unwrap();
        assert_eq!(
            line,
            [Pos::new(2, 6), Pos::new(3, 5), Pos::new(4, 4), Pos::new(5, 3), Pos::new(6, 2)]
        );
    }

    #[test]
    fn test_find_five_line_none_for_four() {
        let mut board = Board::new();
        place_all(&mut board, &[(9, 0), (9, 1), (9, 2), (9, 3)], Stone::Black);
        assert_eq!(find_five_line(&board, Pos::new(9, 1)), None);
    }
}
