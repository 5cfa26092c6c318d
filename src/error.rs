//! Error types for board construction and move legality.

use thiserror::Error;

/// Rejected board construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid board size {0}: must be 9, 13 or 19")]
    InvalidSize(usize),
}

/// Reason a placement was rejected.
///
/// Variants are listed in the order the legality checks run; the first
/// failing check wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Point is outside the grid
    #[error("illegal move: point not on board")]
    OffBoard,
    /// Point is not empty
    #[error("illegal move: point not empty")]
    Occupied,
    /// Move retakes a ko
    #[error("illegal move: retakes ko")]
    Ko,
    /// Placed group would have no liberties and captures nothing
    #[error("illegal move: suicide")]
    Suicide,
}
