//! Board sizes, special moves, and engine defaults.
//!
//! The early-termination thresholds live here as well. They are not Go rules:
//! they bound the length of automated games and can be overridden per board
//! through [`crate::board::TerminationPolicy`].

// =============================================================================
// Board Geometry
// =============================================================================

/// Board sizes accepted by [`crate::board::Board::new`].
pub const VALID_SIZES: [usize; 3] = [9, 13, 19];

/// Default board size for the command line driver.
pub const DEFAULT_SIZE: usize = 9;

// =============================================================================
// Special Move Values
// =============================================================================

/// Pass sentinel coordinate, understood by the board and every caller.
pub const PASS: (i32, i32) = (-1, -1);

// =============================================================================
// Scoring and Search
// =============================================================================

/// Komi added to White's score.
pub const DEFAULT_KOMI: f64 = 6.5;

/// Default search depth (plies, counting the root move).
pub const DEFAULT_DEPTH: usize = 2;

/// Weight of the capture difference in the liberty evaluator.
pub const LIBERTY_CAPTURE_WEIGHT: f64 = 3.0;

// =============================================================================
// Early Termination Heuristic
// =============================================================================

/// Consecutive passes that end the game.
pub const PASSES_TO_END: u32 = 2;

/// Dominance is only checked once stones cover `1 / DOMINANCE_FILL_DIVISOR` of the board.
pub const DOMINANCE_FILL_DIVISOR: usize = 3;

/// Share of placed stones one color must exceed to be dominant.
pub const DOMINANCE_STONE_SHARE: f64 = 0.60;

/// Factor by which the dominant color's territory must exceed the opponent's.
pub const DOMINANCE_TERRITORY_RATIO: f64 = 1.5;

/// Games end once the history grows past `size * size / MOVE_LIMIT_DIVISOR`.
pub const MOVE_LIMIT_DIVISOR: usize = 2;
