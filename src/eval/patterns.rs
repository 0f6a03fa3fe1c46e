//! Pattern scores for Gomoku evaluation
//!
//! One score per (run length, blocked ends) shape. A line blocked at both
//! ends can never become five and is worth nothing unless it already is.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row, regardless of ends
    pub const FIVE: i32 = 100_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: i32 = 1_000;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 1_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i32 = 100;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 100;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i32 = 10;
}

/// Score a single line shape.
///
/// # Arguments
/// * `count` - Run length including the evaluated cell
/// * `block` - Number of ends stopped by the edge or an opposing stone
#[inline]
#[must_use]
pub fn line_score(count: u8, block: u8) -> i32 {
    match (count, block) {
        (5.., _) => PatternScore::FIVE,
        (_, 2..) => 0,
        (4, 0) => PatternScore::OPEN_FOUR,
        (4, _) => PatternScore::CLOSED_FOUR,
        (3, 0) => PatternScore::OPEN_THREE,
        (3, _) => PatternScore::CLOSED_THREE,
        (2, 0) => PatternScore::OPEN_TWO,
        (2, _) => PatternScore::CLOSED_TWO,
        _ => 0,
    }
}
