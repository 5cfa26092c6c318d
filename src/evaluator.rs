//! Static evaluation of board positions.
//!
//! Each evaluator scores a board from the perspective of the color it was
//! built for: higher is better for that color. Evaluators hold no state
//! besides the two colors and never mutate the board.

use crate::board::{Board, Color};
use crate::constants::LIBERTY_CAPTURE_WEIGHT;

/// A leaf scoring function for search.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> f64;

    fn name(&self) -> &str;
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn evaluate(&self, board: &Board) -> f64 {
        (**self).evaluate(board)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Stones on the board plus captures, own minus opponent's.
#[derive(Debug, Clone, Copy)]
pub struct StoneCountEvaluator {
    player: Color,
    opponent: Color,
}

impl StoneCountEvaluator {
    pub fn new(player: Color) -> Self {
        Self {
            player,
            opponent: player.opponent(),
        }
    }
}

impl Evaluator for StoneCountEvaluator {
    fn evaluate(&self, board: &Board) -> f64 {
        let stones = board.count_stones();
        let captures = board.captured_stones();
        let own = stones.get(self.player) + captures.get(self.player);
        let theirs = stones.get(self.opponent) + captures.get(self.opponent);
        own as f64 - theirs as f64
    }

    fn name(&self) -> &str {
        "stone-count"
    }
}

/// Group liberties, own minus opponent's, plus weighted capture difference.
///
/// Every group contributes its liberty count exactly once.
#[derive(Debug, Clone, Copy)]
pub struct LibertyCountEvaluator {
    player: Color,
    opponent: Color,
}

impl LibertyCountEvaluator {
    pub fn new(player: Color) -> Self {
        Self {
            player,
            opponent: player.opponent(),
        }
    }
}

impl Evaluator for LibertyCountEvaluator {
    fn evaluate(&self, board: &Board) -> f64 {
        let size = board.size();
        let mut counted = vec![false; size * size];
        let mut own_liberties = 0usize;
        let mut their_liberties = 0usize;

        for x in 0..size {
            for y in 0..size {
                let Some(color) = board.get(x, y) else {
                    continue;
                };
                if counted[x * size + y] {
                    continue;
                }
                for (gx, gy) in board.get_group(x, y) {
                    counted[gx * size + gy] = true;
                }
                let liberties = board.count_liberties(x, y);
                if color == self.player {
                    own_liberties += liberties;
                } else {
                    their_liberties += liberties;
                }
            }
        }

        let captures = board.captured_stones();
        let capture_diff =
            captures.get(self.player) as f64 - captures.get(self.opponent) as f64;
        (own_liberties as f64 - their_liberties as f64) + LIBERTY_CAPTURE_WEIGHT * capture_diff
    }

    fn name(&self) -> &str {
        "liberty-count"
    }
}

/// Estimated territory, own minus opponent's.
#[derive(Debug, Clone, Copy)]
pub struct TerritoryEvaluator {
    player: Color,
    opponent: Color,
}

impl TerritoryEvaluator {
    pub fn new(player: Color) -> Self {
        Self {
            player,
            opponent: player.opponent(),
        }
    }
}

impl Evaluator for TerritoryEvaluator {
    fn evaluate(&self, board: &Board) -> f64 {
        let territory = board.count_territory();
        territory.get(self.player) as f64 - territory.get(self.opponent) as f64
    }

    fn name(&self) -> &str {
        "territory"
    }
}
