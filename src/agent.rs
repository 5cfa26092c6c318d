//! Move-choosing agents.
//!
//! An [`Agent`] plays one color. Asked for a move on the other color's turn
//! it returns `None`, and the caller must leave the board alone. When the
//! side to move has no legal placement the agent answers [`Move::Pass`].

use crate::board::{Board, Color, Move};
use crate::evaluator::{LibertyCountEvaluator, StoneCountEvaluator, TerritoryEvaluator};
use crate::search::MinimaxAgent;

pub trait Agent {
    fn color(&self) -> Color;

    fn name(&self) -> &str;

    /// Choose a move for the live board without mutating it.
    fn select_move(&mut self, board: &Board) -> Option<Move>;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn color(&self) -> Color {
        (**self).color()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn select_move(&mut self, board: &Board) -> Option<Move> {
        (**self).select_move(board)
    }
}

/// Plays a uniformly random legal move. Used as a baseline.
pub struct RandomAgent {
    color: Color,
    name: String,
    rng: fastrand::Rng,
}

impl RandomAgent {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            name: AgentKind::Random.display_name().to_string(),
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }
}

impl Agent for RandomAgent {
    fn color(&self) -> Color {
        self.color
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, board: &Board) -> Option<Move> {
        if board.current_player() != self.color {
            return None;
        }
        let moves = board.get_valid_moves();
        if moves.is_empty() {
            return Some(Move::Pass);
        }
        Some(Move::Play(moves[self.rng.usize(..moves.len())]))
    }
}

/// Agent pairings selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum AgentKind {
    /// Minimax over stone count plus captures
    StoneCount,
    /// Minimax over group liberties plus weighted captures
    LibertyCount,
    /// Minimax over estimated territory
    Territory,
    /// Uniformly random legal moves
    Random,
}

impl AgentKind {
    pub fn display_name(self) -> &'static str {
        match self {
            AgentKind::StoneCount => "Stone Count Agent",
            AgentKind::LibertyCount => "Liberty Count Agent",
            AgentKind::Territory => "Territory Agent",
            AgentKind::Random => "Random Agent",
        }
    }

    /// Build an agent of this kind. `depth` is ignored by the random agent.
    pub fn build(self, color: Color, depth: usize, seed: Option<u64>) -> Box<dyn Agent> {
        let minimax = |agent: MinimaxAgent| {
            let agent = agent.with_name(self.display_name());
            match seed {
                Some(seed) => agent.with_seed(seed),
                None => agent,
            }
        };
        match self {
            AgentKind::StoneCount => Box::new(minimax(MinimaxAgent::new(
                color,
                Box::new(StoneCountEvaluator::new(color)),
                depth,
            ))),
            AgentKind::LibertyCount => Box::new(minimax(MinimaxAgent::new(
                color,
                Box::new(LibertyCountEvaluator::new(color)),
                depth,
            ))),
            AgentKind::Territory => Box::new(minimax(MinimaxAgent::new(
                color,
                Box::new(TerritoryEvaluator::new(color)),
                depth,
            ))),
            AgentKind::Random => {
                let agent = RandomAgent::new(color);
                Box::new(match seed {
                    Some(seed) => agent.with_seed(seed),
                    None => agent,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_wrong_turn() {
        let board = Board::new(9).unwrap();
        let mut agent = RandomAgent::new(Color::White).with_seed(1);
        assert_eq!(agent.select_move(&board), None);
    }

    #[test]
    fn test_random_agent_plays_legal_moves() {
        let mut board = Board::new(9).unwrap();
        let mut black = RandomAgent::new(Color::Black).with_seed(7);
        let mut white = RandomAgent::new(Color::White).with_seed(8);
        for _ in 0..30 {
            let agent: &mut RandomAgent = match board.current_player() {
                Color::Black => &mut black,
                Color::White => &mut white,
            };
            let mv = agent.select_move(&board).unwrap();
            assert!(board.try_play(mv).is_ok(), "{mv} should be legal");
        }
    }

    #[test]
    fn test_random_agent_is_reproducible() {
        let board = Board::new(13).unwrap();
        let a = RandomAgent::new(Color::Black).with_seed(42).select_move(&board);
        let b = RandomAgent::new(Color::Black).with_seed(42).select_move(&board);
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_names_and_colors() {
        for kind in [
            AgentKind::StoneCount,
            AgentKind::LibertyCount,
            AgentKind::Territory,
            AgentKind::Random,
        ] {
            let agent = kind.build(Color::White, 1, Some(3));
            assert_eq!(agent.name(), kind.display_name());
            assert_eq!(agent.color(), Color::White);
        }
    }
}
