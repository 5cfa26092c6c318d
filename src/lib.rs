//! Go-Minimax: Go rules and depth-limited adversarial search.
//!
//! This crate provides a Go board on 9x9, 13x13 or 19x19 grids with capture,
//! ko and suicide rules, heuristic scoring, and agents that choose moves with
//! minimax search and alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`constants`] - Board sizes, pass sentinel, defaults and termination thresholds
//! - [`error`] - Construction and move legality errors
//! - [`board`] - Core game logic (board state, moves, captures, scoring)
//! - [`evaluator`] - Static evaluation functions for search leaves
//! - [`search`] - Minimax with alpha-beta pruning
//! - [`agent`] - Agent trait, random baseline agent and agent factory
//! - [`metrics`] - Per-decision time and memory accounting
//! - [`analytics`] - Aggregated game results per agent
//! - [`game`] - Game loop and match runner
//!
//! ## Example
//!
//! ```
//! use go_minimax::agent::Agent;
//! use go_minimax::board::{Board, Color};
//! use go_minimax::evaluator::StoneCountEvaluator;
//! use go_minimax::search::MinimaxAgent;
//!
//! // Create a new game and play a move
//! let mut board = Board::new(9).unwrap();
//! assert!(board.play_move(4, 4));
//!
//! // Let a seeded depth-2 search answer for White
//! let evaluator = Box::new(StoneCountEvaluator::new(Color::White));
//! let mut white = MinimaxAgent::new(Color::White, evaluator, 2).with_seed(7);
//! let reply = white.select_move(&board).unwrap();
//! println!("White plays {reply}");
//! ```

pub mod agent;
pub mod analytics;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluator;
pub mod game;
pub mod metrics;
pub mod search;
