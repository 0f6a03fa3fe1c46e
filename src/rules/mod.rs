//! Game rules for Gomoku
//!
//! Freestyle rules: five or more in a row wins, no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{find_five_line, has_five_at_pos};
