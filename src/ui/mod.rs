//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. It only reads
//! the session for drawing and forwards clicks and buttons to it.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
