use std::path::PathBuf;

use crate::board::{Pos, Stone};

/// Reasons a move is rejected. A rejected move never mutates the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("position {pos} is already occupied by {occupant}")]
    Occupied { pos: Pos, occupant: Stone },

    #[error("it is {expected}'s turn, not {got}'s")]
    NotYourTurn { expected: Stone, got: Stone },

    #[error("game already over")]
    GameOver,

    #[error("cannot place an empty stone")]
    EmptyStone,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::Occupied {
            pos: Pos::new(3, 4),
            occupant: Stone::White,
        };
        assert_eq!(err.to_string(), "position (3, 4) is already occupied by white");

        let err = MoveError::NotYourTurn {
            expected: Stone::Black,
            got: Stone::White,
        };
        assert_eq!(err.to_string(), "it is black's turn, not white's");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("window width must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: window width must be > 0"
        );
    }
}
