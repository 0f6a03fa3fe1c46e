//! Game session: turn order, history, undo and game over
//!
//! A [`GameSession`] owns the board and the move history. The board is only
//! ever changed through [`GameSession::apply_move`], so replaying the history
//! on an empty board always reproduces it; undo relies on that.
//!
//! The human plays Black and moves first. After every human move that does
//! not end the game, the computer (White) answers immediately inside the same
//! call.

use crate::board::{Board, Move, Pos, Stone};
use crate::config::GameConfig;
use crate::engine::{AIEngine, Difficulty, MoveResult};
use crate::error::MoveError;
use crate::rules::{find_five_line, has_five_at_pos};

/// Color played by the human
pub const HUMAN: Stone = Stone::Black;
/// Color played by the computer
pub const COMPUTER: Stone = Stone::White;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Stone),
    /// Board filled without five in a row
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Over(GameOutcome),
}

/// What happened during one human turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// The computer's answer, if the game was still on after the human move
    pub reply: Option<Pos>,
    /// Set when the turn ended the game
    pub outcome: Option<GameOutcome>,
}

/// One game against the computer
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    history: Vec<Move>,
    current_turn: Stone,
    status: GameStatus,
    difficulty: Difficulty,
    engine: AIEngine,
    last_ai_result: Option<MoveResult>,
    winning_line: Option<[Pos; 5]>,
}

impl GameSession {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_engine(difficulty, AIEngine::new())
    }

    pub fn with_engine(difficulty: Difficulty, engine: AIEngine) -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            current_turn: HUMAN,
            status: GameStatus::InProgress,
            difficulty,
            engine,
            last_ai_result: None,
            winning_line: None,
        }
    }

    /// Session using the configured difficulty and, if set, a fixed seed
    pub fn from_config(config: &GameConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => AIEngine::with_seed(seed),
            None => AIEngine::new(),
        };
        Self::with_engine(config.difficulty, engine)
    }

    /// Read-only view of the board for rendering
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Over(outcome) => Some(outcome),
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }

    #[inline]
    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.current_turn == HUMAN
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Takes effect from the computer's next move
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            tracing::info!(from = %self.difficulty, to = %difficulty, "difficulty changed");
            self.difficulty = difficulty;
        }
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|mv| mv.pos)
    }

    /// Five winning stones, once the game has been won
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        self.winning_line
    }

    /// Statistics of the computer's most recent move selection
    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Place `stone` at `pos` for the player whose turn it is.
    ///
    /// Rejected moves leave the session untouched. On success returns the
    /// outcome if this move ended the game.
    pub fn apply_move(&mut self, pos: Pos, stone: Stone) -> Result<Option<GameOutcome>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !Pos::is_valid(pos.row as i32, pos.col as i32) {
            return Err(MoveError::OutOfBounds {
                row: pos.row as usize,
                col: pos.col as usize,
            });
        }
        if stone != self.current_turn {
            return Err(MoveError::NotYourTurn {
                expected: self.current_turn,
                got: stone,
            });
        }

        self.board.set(pos, stone)?;
        self.history.push(Move::new(pos, stone));
        tracing::debug!(%pos, %stone, moves = self.history.len(), "move applied");

        if has_five_at_pos(&self.board, pos) {
            self.winning_line = find_five_line(&self.board, pos);
            return Ok(Some(self.finish(GameOutcome::Winner(stone))));
        }
        if self.board.is_full() {
            return Ok(Some(self.finish(GameOutcome::Draw)));
        }

        self.current_turn = stone.opponent();
        Ok(None)
    }

    /// Play the human's move and, if the game goes on, the computer's reply.
    pub fn apply_human_move(&mut self, pos: Pos) -> Result<TurnReport, MoveError> {
        if let Some(outcome) = self.apply_move(pos, HUMAN)? {
            return Ok(TurnReport {
                reply: None,
                outcome: Some(outcome),
            });
        }

        let result = self
            .engine
            .get_move_with_stats(&self.board, self.difficulty, COMPUTER);
        let reply = result.best_move;
        self.last_ai_result = Some(result);

        let outcome = match reply {
            Some(reply) => self.apply_move(reply, COMPUTER)?,
            // apply_move already ends a game on a full board
            None => Some(self.finish(GameOutcome::Draw)),
        };
        Ok(TurnReport { reply, outcome })
    }

    /// Take back the last human move and the computer's reply.
    ///
    /// Returns `false` without changing anything when fewer than two moves
    /// have been played or the game is over.
    pub fn undo(&mut self) -> bool {
        if self.history.len() < 2 || self.is_over() {
            return false;
        }
        debug_assert!(
            self.history.len() % 2 == 0,
            "odd history length {} while in progress",
            self.history.len()
        );

        let keep = self.history.len() - 2;
        let board = match Board::from_moves(&self.history[..keep]) {
            Ok(board) => board,
            Err(err) => {
                tracing::error!(%err, "history does not replay, undo skipped");
                return false;
            }
        };

        self.history.truncate(keep);
        self.board = board;
        self.current_turn = HUMAN;
        tracing::info!(moves = keep, "undo");
        true
    }

    /// Start over with an empty board. Difficulty is kept.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.current_turn = HUMAN;
        self.status = GameStatus::InProgress;
        self.last_ai_result = None;
        self.winning_line = None;
        tracing::info!("new game");
    }

    fn finish(&mut self, outcome: GameOutcome) -> GameOutcome {
        self.status = GameStatus::Over(outcome);
        match outcome {
            GameOutcome::Winner(stone) => {
                tracing::info!(winner = %stone, moves = self.history.len(), "game over")
            }
            GameOutcome::Draw => tracing::info!(moves = self.history.len(), "game over, draw"),
        }
        outcome
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(difficulty: Difficulty) -> GameSession {
        GameSession::with_engine(difficulty, AIEngine::with_seed(11))
    }

    #[test]
    fn test_new_session() {
        let s = GameSession::default();
        assert_eq!(s.current_turn(), Stone::Black);
        assert_eq!(s.status(), GameStatus::InProgress);
        assert_eq!(s.difficulty(), Difficulty::Medium);
        assert!(s.history().is_empty());
        assert!(s.board().is_board_empty());
        assert!(s.is_human_turn());
    }

    #[test]
    fn test_apply_move_toggles_turn() {
        let mut s = session(Difficulty::Medium);
        assert_eq!(s.apply_move(Pos::new(7, 7), Stone::Black), Ok(None));
        assert_eq!(s.current_turn(), Stone::White);
        assert_eq!(s.board().get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(s.history(), &[Move::new(Pos::new(7, 7), Stone::Black)]);
        assert!(!has_five_at_pos(s.board(), Pos::new(7, 7)));
    }

    #[test]
    fn test_out_of_turn_is_rejected() {
        let mut s = session(Difficulty::Medium);
        let err = s.apply_move(Pos::new(7, 7), Stone::White).unwrap_err();
        assert_eq!(
            err,
            MoveError::NotYourTurn {
                expected: Stone::Black,
                got: Stone::White
            }
        );
        assert!(s.board().is_board_empty());
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut s = session(Difficulty::Medium);
        s.apply_move(Pos::new(7, 7), Stone::Black).unwrap();
        let before = s.clone();

        let err = s.apply_move(Pos::new(7, 7), Stone::White).unwrap_err();
        assert!(matches!(err, MoveError::Occupied { .. }));
        assert_eq!(s.board(), before.board());
        assert_eq!(s.history(), before.history());
        assert_eq!(s.current_turn(), Stone::White);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut s = session(Difficulty::Medium);
        let err = s.apply_human_move(Pos { row: 3, col: 15 }).unwrap_err();
        assert_eq!(err, MoveError::OutOfBounds { row: 3, col: 15 });
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_human_move_gets_reply() {
        let mut s = session(Difficulty::Hard);
        let report = s.apply_human_move(Pos::new(7, 7)).unwrap();

        let reply = report.reply.unwrap();
        assert_eq!(report.outcome, None);
        assert_eq!(s.board().get(reply), Stone::White);
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.current_turn(), Stone::Black);
        assert_eq!(s.last_move(), Some(reply));
        assert!(s.last_ai_result().is_some());
    }

    #[test]
    fn test_five_ends_game() {
        let mut s = session(Difficulty::Medium);
        for c in 0..4 {
            s.apply_move(Pos::new(0, c), Stone::Black).unwrap();
            s.apply_move(Pos::new(14, c * 2), Stone::White).unwrap();
        }
        let outcome = s.apply_move(Pos::new(0, 4), Stone::Black).unwrap();

        assert_eq!(outcome, Some(GameOutcome::Winner(Stone::Black)));
        assert_eq!(s.status(), GameStatus::Over(GameOutcome::Winner(Stone::Black)));
        assert_eq!(
            s.winning_line(),
            Some([Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 3), Pos::new(0, 4)])
        );
        // Winner keeps the turn marker
        assert_eq!(s.current_turn(), Stone::Black);
    }

    #[test]
    fn test_human_win_skips_reply() {
        let mut s = session(Difficulty::Medium);
        for c in 0..4 {
            s.apply_move(Pos::new(0, c), Stone::Black).unwrap();
            s.apply_move(Pos::new(14, c * 2), Stone::White).unwrap();
        }
        let report = s.apply_human_move(Pos::new(0, 4)).unwrap();
        assert_eq!(
            report,
            TurnReport {
                reply: None,
                outcome: Some(GameOutcome::Winner(Stone::Black))
            }
        );
        assert_eq!(s.history().len(), 9);
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut s = session(Difficulty::Medium);
        for c in 0..4 {
            s.apply_move(Pos::new(0, c), Stone::Black).unwrap();
            s.apply_move(Pos::new(14, c * 2), Stone::White).unwrap();
        }
        s.apply_move(Pos::new(0, 4), Stone::Black).unwrap();

        assert_eq!(s.apply_human_move(Pos::new(7, 7)), Err(MoveError::GameOver));
        assert_eq!(s.apply_move(Pos::new(7, 7), Stone::White), Err(MoveError::GameOver));
        assert_eq!(s.history().len(), 9);
    }

    #[test]
    fn test_computer_win() {
        // White has an open four; whatever Black does elsewhere, White completes it
        let mut s = session(Difficulty::Medium);
        let whites = [(7, 3), (7, 4), (7, 5), (7, 6)];
        let blacks = [(0, 0), (0, 2), (0, 4), (0, 6)];
        for (b, w) in blacks.iter().zip(whites.iter()) {
            s.apply_move(Pos::new(b.0, b.1), Stone::Black).unwrap();
            s.apply_move(Pos::new(w.0, w.1), Stone::White).unwrap();
        }

        let report = s.apply_human_move(Pos::new(14, 14)).unwrap();
        assert_eq!(report.reply, Some(Pos::new(7, 2)));
        assert_eq!(report.outcome, Some(GameOutcome::Winner(Stone::White)));
        assert!(s.is_over());
        assert!(!s.is_human_turn());
    }

    #[test]
    fn test_undo_restores_previous_position() {
        let mut s = session(Difficulty::Medium);
        s.apply_human_move(Pos::new(7, 7)).unwrap();
        let board = s.board().clone();
        let history = s.history().to_vec();

        s.apply_human_move(Pos::new(3, 3)).unwrap();
        assert!(s.undo());

        assert_eq!(s.board(), &board);
        assert_eq!(s.history(), history.as_slice());
        assert_eq!(s.current_turn(), Stone::Black);
    }

    #[test]
    fn test_undo_needs_two_moves() {
        let mut s = session(Difficulty::Medium);
        assert!(!s.undo());

        s.apply_move(Pos::new(7, 7), Stone::Black).unwrap();
        assert!(!s.undo());
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.current_turn(), Stone::White);
    }

    #[test]
    fn test_undo_after_game_over_is_noop() {
        let mut s = session(Difficulty::Medium);
        for c in 0..4 {
            s.apply_move(Pos::new(0, c), Stone::Black).unwrap();
            s.apply_move(Pos::new(14, c * 2), Stone::White).unwrap();
        }
        s.apply_move(Pos::new(0, 4), Stone::Black).unwrap();

        assert!(!s.undo());
        assert!(s.is_over());
        assert_eq!(s.history().len(), 9);
    }

    #[test]
    fn test_restart() {
        let mut s = session(Difficulty::Hard);
        s.apply_human_move(Pos::new(7, 7)).unwrap();
        s.restart();

        assert!(s.board().is_board_empty());
        assert!(s.history().is_empty());
        assert_eq!(s.current_turn(), Stone::Black);
        assert_eq!(s.status(), GameStatus::InProgress);
        assert_eq!(s.difficulty(), Difficulty::Hard);
        assert!(s.last_ai_result().is_none());
    }

    #[test]
    fn test_difficulty_applies_to_next_reply() {
        let mut s = session(Difficulty::Medium);
        s.set_difficulty(Difficulty::Easy);
        assert_eq!(s.difficulty(), Difficulty::Easy);

        s.apply_human_move(Pos::new(7, 7)).unwrap();
        let result = s.last_ai_result().unwrap();
        assert_eq!(result.strategy, crate::engine::Strategy::Random);
    }
}
