//! Game loop and match running.
//!
//! A game asks the agent whose color is to move for a move, plays it, and
//! repeats until [`Board::is_game_over`]. Agents that break their contract
//! (no move on their own turn, or an illegal move) are logged and forced to
//! pass, so every game terminates.

use log::{info, warn};

use crate::agent::{Agent, AgentKind};
use crate::analytics::GameAnalytics;
use crate::board::{Board, Color, Move};
use crate::constants::{DEFAULT_DEPTH, DEFAULT_KOMI, DEFAULT_SIZE};
use crate::error::BoardError;
use crate::metrics::Metered;

/// Outcome of one finished game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub winner: Option<Color>,
    pub black_score: f64,
    pub white_score: f64,
    /// Moves played, passes included
    pub moves: usize,
}

/// Settings shared by every game of a match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    pub board_size: usize,
    pub depth: usize,
    pub komi: f64,
    pub games: u32,
    /// Seeds the agents' random sources; Black gets `seed`, White `seed + 1`
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_SIZE,
            depth: DEFAULT_DEPTH,
            komi: DEFAULT_KOMI,
            games: 10,
            seed: None,
        }
    }
}

/// Play `board` to the end and score it.
pub fn play_game(
    board: &mut Board,
    black: &mut dyn Agent,
    white: &mut dyn Agent,
    komi: f64,
) -> GameRecord {
    while !board.is_game_over() {
        let to_move = board.current_player();
        let agent: &mut dyn Agent = match to_move {
            Color::Black => &mut *black,
            Color::White => &mut *white,
        };

        let mv = match agent.select_move(board) {
            Some(mv) => mv,
            None => {
                warn!("{} returned no move on its own turn; passing", agent.name());
                Move::Pass
            }
        };
        if let Err(e) = board.try_play(mv) {
            warn!("{} chose {mv}: {e}; passing", agent.name());
            board.pass();
        }
    }

    let (black_score, white_score) = board.get_score(komi);
    GameRecord {
        winner: board.get_winner(komi),
        black_score,
        white_score,
        moves: board.move_history().len(),
    }
}

/// Play `config.games` games between two agent kinds.
pub fn run_match(
    config: &MatchConfig,
    black: AgentKind,
    white: AgentKind,
) -> Result<GameAnalytics, BoardError> {
    run_match_with(config, black, white, |_, _, _| {})
}

/// Like [`run_match`], calling `observer(game_index, final_board, record)`
/// after every game.
pub fn run_match_with(
    config: &MatchConfig,
    black: AgentKind,
    white: AgentKind,
    mut observer: impl FnMut(u32, &Board, &GameRecord),
) -> Result<GameAnalytics, BoardError> {
    let mut board = Board::new(config.board_size)?;
    let mut black_agent = Metered::new(black.build(Color::Black, config.depth, config.seed));
    let mut white_agent = Metered::new(white.build(
        Color::White,
        config.depth,
        config.seed.map(|s| s.wrapping_add(1)),
    ));
    let mut analytics = GameAnalytics::new();

    for game in 0..config.games {
        board.reset();
        black_agent.reset();
        white_agent.reset();

        let record = play_game(&mut board, &mut black_agent, &mut white_agent, config.komi);
        info!(
            "game {}/{} on {}x{}: {} vs {} -> {} ({:.1} - {:.1}, {} moves)",
            game + 1,
            config.games,
            config.board_size,
            config.board_size,
            black_agent.name(),
            white_agent.name(),
            record.winner.map_or("draw".to_string(), |c| c.to_string()),
            record.black_score,
            record.white_score,
            record.moves
        );

        analytics.record_game(record.winner, &[black_agent.report(), white_agent.report()]);
        observer(game, &board, &record);
    }
    Ok(analytics)
}

/// Play `first` against `second` with both color assignments and merge the
/// results, `config.games` games each way.
pub fn run_pairing(
    config: &MatchConfig,
    first: AgentKind,
    second: AgentKind,
) -> Result<GameAnalytics, BoardError> {
    let mut analytics = run_match(config, first, second)?;
    analytics.merge(&run_match(config, second, first)?);
    Ok(analytics)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent(Color);

    impl Agent for Silent {
        fn color(&self) -> Color {
            self.0
        }

        fn name(&self) -> &str {
            "Silent"
        }

        fn select_move(&mut self, _board: &Board) -> Option<Move> {
            None
        }
    }

    struct Stubborn(Color);

    impl Agent for Stubborn {
        fn color(&self) -> Color {
            self.0
        }

        fn name(&self) -> &str {
            "Stubborn"
        }

        fn select_move(&mut self, _board: &Board) -> Option<Move> {
            Some(Move::Play((4, 4)))
        }
    }

    #[test]
    fn test_silent_agents_pass_out() {
        let mut board = Board::new(9).unwrap();
        let record = play_game(&mut board, &mut Silent(Color::Black), &mut Silent(Color::White), 6.5);
        assert_eq!(record.moves, 2);
        assert_eq!(record.winner, Some(Color::White));
        assert_eq!((record.black_score, record.white_score), (0.0, 6.5));
    }

    #[test]
    fn test_illegal_repeat_becomes_pass() {
        let mut board = Board::new(9).unwrap();
        let record = play_game(
            &mut board,
            &mut Stubborn(Color::Black),
            &mut Stubborn(Color::White),
            0.5,
        );
        // Black takes (4,4); White's repeat is rejected and passes, Black's
        // repeat is rejected too, and two passes end the game.
        assert_eq!(
            board.move_history(),
            &[Move::Play((4, 4)), Move::Pass, Move::Pass]
        );
        assert_eq!(record.winner, Some(Color::Black));
    }

    #[test]
    fn test_run_match_counts_games() {
        let config = MatchConfig {
            board_size: 9,
            depth: 1,
            games: 2,
            seed: Some(9),
            ..MatchConfig::default()
        };
        let analytics = run_match(&config, AgentKind::Random, AgentKind::StoneCount).unwrap();
        assert_eq!(analytics.total_games(), 2);
        let decided = analytics.wins("Random Agent") + analytics.wins("Stone Count Agent");
        assert_eq!(decided + analytics.draws(), 2);
    }

    #[test]
    fn test_run_match_rejects_bad_size() {
        let config = MatchConfig {
            board_size: 10,
            ..MatchConfig::default()
        };
        assert_eq!(
            run_match(&config, AgentKind::Random, AgentKind::Random),
            Err(BoardError::InvalidSize(10))
        );
    }

    #[test]
    fn test_seeded_match_is_reproducible() {
        let config = MatchConfig {
            depth: 1,
            games: 1,
            seed: Some(21),
            ..MatchConfig::default()
        };
        let mut first = Vec::new();
        run_match_with(&config, AgentKind::Random, AgentKind::Random, |_, board, _| {
            first = board.move_history().to_vec();
        })
        .unwrap();
        let mut second = Vec::new();
        run_match_with(&config, AgentKind::Random, AgentKind::Random, |_, board, _| {
            second = board.move_history().to_vec();
        })
        .unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
