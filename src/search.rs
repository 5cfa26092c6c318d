//! Depth-limited minimax with alpha-beta pruning.
//!
//! The root move list is shuffled with the agent's own random source, then
//! every candidate is scored by a full minimax search of the remaining
//! depth. Ties keep the earlier candidate in shuffled order, so the seed is
//! part of the observable behavior: the same seed, evaluator and board always
//! give the same move.
//!
//! Internal nodes enumerate moves in board order without reshuffling. A side
//! with no legal placement passes and the search continues one ply deeper.
//!
//! The live board is cloned once per decision. Below the root, moves are
//! played and reverted in place on that copy with [`Board::apply`] and
//! [`Board::undo`], so each child sees the same position a fresh copy would.

use log::{debug, trace};

use crate::agent::Agent;
use crate::board::{Board, Color, Move, Point};
use crate::evaluator::Evaluator;

/// Minimax agent scoring leaves with an [`Evaluator`].
pub struct MinimaxAgent {
    color: Color,
    name: String,
    evaluator: Box<dyn Evaluator>,
    search_depth: usize,
    pruning: bool,
    rng: fastrand::Rng,
    nodes: u64,
}

impl MinimaxAgent {
    /// Create an agent searching `search_depth` plies (at least one).
    pub fn new(color: Color, evaluator: Box<dyn Evaluator>, search_depth: usize) -> Self {
        Self {
            color,
            name: format!("Minimax Agent ({})", evaluator.name()),
            evaluator,
            search_depth: search_depth.max(1),
            pruning: true,
            rng: fastrand::Rng::new(),
            nodes: 0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Seed the root shuffle.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    pub fn with_rng(mut self, rng: fastrand::Rng) -> Self {
        self.rng = rng;
        self
    }

    /// Toggle alpha-beta cutoffs. Without them the search is plain minimax
    /// and returns the same values while visiting more nodes.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn search_depth(&self) -> usize {
        self.search_depth
    }

    pub fn evaluator(&self) -> &dyn Evaluator {
        self.evaluator.as_ref()
    }

    /// Search nodes visited by the last decision.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    /// Pick the best root move and its minimax value.
    ///
    /// Returns `None` when it is not this agent's turn. The value is
    /// negative infinity for a pass forced by an empty move list.
    pub fn search(&mut self, board: &Board) -> Option<(Move, f64)> {
        if board.current_player() != self.color {
            return None;
        }
        self.nodes = 0;

        let mut moves = board.get_valid_moves();
        if moves.is_empty() {
            return Some((Move::Pass, f64::NEG_INFINITY));
        }
        self.rng.shuffle(&mut moves);

        let mut scratch = board.clone();
        let mut best_score = f64::NEG_INFINITY;
        let mut best_move: Option<Point> = None;

        for &pt in &moves {
            let Ok(undo) = scratch.apply(Move::Play(pt)) else {
                continue;
            };
            let score = self.min_value(&mut scratch, 1, f64::NEG_INFINITY, f64::INFINITY);
            scratch.undo(undo);

            trace!("{}: candidate {:?} scored {score}", self.name, pt);
            if score > best_score {
                best_score = score;
                best_move = Some(pt);
            }
        }

        let chosen = match best_move {
            Some(pt) => pt,
            None => moves[self.rng.usize(..moves.len())],
        };
        debug!(
            "{}: chose {:?} (score {best_score}, {} candidates, {} nodes)",
            self.name,
            chosen,
            moves.len(),
            self.nodes
        );
        Some((Move::Play(chosen), best_score))
    }

    fn max_value(&mut self, board: &mut Board, depth: usize, mut alpha: f64, beta: f64) -> f64 {
        self.nodes += 1;
        if board.is_game_over() || depth >= self.search_depth {
            return self.evaluator.evaluate(board);
        }

        let moves = board.get_valid_moves();
        if moves.is_empty() {
            let undo = board.pass();
            let score = self.min_value(board, depth + 1, alpha, beta);
            board.undo(undo);
            return score;
        }

        let mut best = f64::NEG_INFINITY;
        for pt in moves {
            let Ok(undo) = board.apply(Move::Play(pt)) else {
                continue;
            };
            let score = self.min_value(board, depth + 1, alpha, beta);
            board.undo(undo);

            best = best.max(score);
            alpha = alpha.max(best);
            if self.pruning && beta <= alpha {
                break;
            }
        }
        best
    }

    fn min_value(&mut self, board: &mut Board, depth: usize, alpha: f64, mut beta: f64) -> f64 {
        self.nodes += 1;
        if board.is_game_over() || depth >= self.search_depth {
            return self.evaluator.evaluate(board);
        }

        let moves = board.get_valid_moves();
        if moves.is_empty() {
            let undo = board.pass();
            let score = self.max_value(board, depth + 1, alpha, beta);
            board.undo(undo);
            return score;
        }

        let mut best = f64::INFINITY;
        for pt in moves {
            let Ok(undo) = board.apply(Move::Play(pt)) else {
                continue;
            };
            let score = self.max_value(board, depth + 1, alpha, beta);
            board.undo(undo);

            best = best.min(score);
            beta = beta.min(best);
            if self.pruning && beta <= alpha {
                break;
            }
        }
        best
    }
}

impl Agent for MinimaxAgent {
    fn color(&self) -> Color {
        self.color
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, board: &Board) -> Option<Move> {
        self.search(board).map(|(mv, _)| mv)
    }
}
