//! Gomoku against a single-ply heuristic opponent
//!
//! Freestyle Gomoku on a 15x15 board:
//! - Black (the human) moves first
//! - Five or more in a row wins (overlines allowed)
//! - A full board without a five is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board representation and the shared directional scan
//! - [`rules`]: Win detection
//! - [`eval`]: Heuristic score of a hypothetical move
//! - [`engine`]: Opponent move selection by difficulty
//! - [`session`]: Turn order, history, undo and game over
//! - [`config`]: TOML configuration
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Difficulty, GameSession, Pos};
//!
//! let mut session = GameSession::with_engine(Difficulty::Hard, AIEngine::with_seed(1));
//!
//! let report = session.apply_human_move(Pos::new(7, 7)).unwrap();
//! if let Some(reply) = report.reply {
//!     println!("Computer plays at ({}, {})", reply.row, reply.col);
//! }
//! assert_eq!(session.history().len(), 2);
//! ```
//!
//! # Opponent
//!
//! The opponent does not search. It scores every empty cell once for itself
//! and once for the human and plays the best weighted sum; see [`engine`].

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Pos, Stone, BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{AIEngine, Difficulty, MoveResult, Strategy};
pub use error::{ConfigError, MoveError};
pub use session::{GameOutcome, GameSession, GameStatus, TurnReport};
