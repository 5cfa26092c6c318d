//! Go board state and rules.
//!
//! The board owns the grid, the side to move, the ko point, the move history,
//! capture counters and the consecutive pass counter. All rule logic (groups,
//! liberties, captures, ko, suicide, scoring and termination) lives here.
//!
//! Coordinates are `(x, y)` pairs with `x, y` in `0..size`. The grid is stored
//! row-major with `x` as the row, so [`Board::get_valid_moves`] enumerates
//! `x` in the outer loop and `y` in the inner loop.
//!
//! Lookahead uses [`Board::apply`] and [`Board::undo`]: `apply` performs exactly
//! the mutation of [`Board::play_move`] and returns an [`Undo`] record that
//! reverts it.

use std::fmt;

use crate::constants::{
    DOMINANCE_FILL_DIVISOR, DOMINANCE_STONE_SHARE, DOMINANCE_TERRITORY_RATIO, MOVE_LIMIT_DIVISOR,
    PASS, PASSES_TO_END, VALID_SIZES,
};
use crate::error::{BoardError, MoveError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

pub type Point = (usize, usize);

/// A move: a stone placement or a pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Play(Point),
    Pass,
}

impl Move {
    /// Convert signed caller coordinates into a move.
    ///
    /// `(-1, -1)` is the pass sentinel. Any other negative coordinate cannot
    /// name a point and yields `None`.
    pub fn from_coords(x: i32, y: i32) -> Option<Self> {
        if (x, y) == PASS {
            return Some(Move::Pass);
        }
        if x < 0 || y < 0 {
            return None;
        }
        Some(Move::Play((x as usize, y as usize)))
    }

    /// Signed coordinates of this move, `(-1, -1)` for a pass.
    pub fn coords(self) -> (i32, i32) {
        match self {
            Move::Play((x, y)) => (x as i32, y as i32),
            Move::Pass => PASS,
        }
    }

    pub fn is_pass(self) -> bool {
        self == Move::Pass
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play((x, y)) => write!(f, "({x}, {y})"),
            Move::Pass => write!(f, "pass"),
        }
    }
}

/// A per-color tally (stones, territory or captures).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorCounts {
    pub black: usize,
    pub white: usize,
}

impl ColorCounts {
    pub fn get(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn total(&self) -> usize {
        self.black + self.white
    }

    fn add(&mut self, color: Color, count: usize) {
        match color {
            Color::Black => self.black += count,
            Color::White => self.white += count,
        }
    }

    fn sub(&mut self, color: Color, count: usize) {
        match color {
            Color::Black => self.black -= count,
            Color::White => self.white -= count,
        }
    }
}

/// Thresholds for [`Board::is_game_over`].
///
/// Only `passes_to_end` corresponds to a real Go rule. The dominance check and
/// the move limit cut automated games short and are tunable policy.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminationPolicy {
    /// Consecutive passes that end the game
    pub passes_to_end: u32,
    /// Dominance is checked once stones cover at least `1 / fill_divisor` of the board
    pub fill_divisor: usize,
    /// Share of placed stones the dominant color must exceed
    pub stone_share: f64,
    /// Factor by which the dominant color's territory must exceed the opponent's
    pub territory_ratio: f64,
    /// Game ends once the history is longer than `size * size / move_limit_divisor`
    pub move_limit_divisor: usize,
}

impl Default for TerminationPolicy {
    fn default() -> Self {
        Self {
            passes_to_end: PASSES_TO_END,
            fill_divisor: DOMINANCE_FILL_DIVISOR,
            stone_share: DOMINANCE_STONE_SHARE,
            territory_ratio: DOMINANCE_TERRITORY_RATIO,
            move_limit_divisor: MOVE_LIMIT_DIVISOR,
        }
    }
}

/// Everything needed to revert one [`Board::apply`].
///
/// Undo records must be replayed in reverse order of application.
#[derive(Debug, Clone)]
pub struct Undo {
    mv: Move,
    captured: Vec<Point>,
    ko_point: Option<Point>,
    pass_count: u32,
}

impl Undo {
    /// Stones removed by the move.
    pub fn captured(&self) -> &[Point] {
        &self.captured
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
    current_player: Color,
    ko_point: Option<Point>,
    move_history: Vec<Move>,
    captured_stones: ColorCounts,
    pass_count: u32,
    policy: TerminationPolicy,
}

impl Board {
    /// Create an empty board. Only 9, 13 and 19 are accepted.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Self::with_policy(size, TerminationPolicy::default())
    }

    pub fn with_policy(size: usize, policy: TerminationPolicy) -> Result<Self, BoardError> {
        if !VALID_SIZES.contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
            current_player: Color::Black,
            ko_point: None,
            move_history: Vec::new(),
            captured_stones: ColorCounts::default(),
            pass_count: 0,
            policy,
        })
    }

    /// Return to the initial empty position, keeping size and policy.
    pub fn reset(&mut self) {
        self.cells.fill(None);
        self.current_player = Color::Black;
        self.ko_point = None;
        self.move_history.clear();
        self.captured_stones = ColorCounts::default();
        self.pass_count = 0;
    }

    // -- Accessors --

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn ko_point(&self) -> Option<Point> {
        self.ko_point
    }

    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    pub fn captured_stones(&self) -> ColorCounts {
        self.captured_stones
    }

    pub fn pass_count(&self) -> u32 {
        self.pass_count
    }

    pub fn policy(&self) -> &TerminationPolicy {
        &self.policy
    }

    /// Read-only grid snapshot, indexed `x * size + y`.
    pub fn cells(&self) -> &[Option<Color>] {
        &self.cells
    }

    /// Stone at `(x, y)`; `None` for empty or off-board points.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.in_bounds(x, y), "({x}, {y}) is off a {} board", self.size);
        x * self.size + y
    }

    fn cell(&self, (x, y): Point) -> Option<Color> {
        self.cells[self.idx(x, y)]
    }

    fn set(&mut self, (x, y): Point, value: Option<Color>) {
        let i = self.idx(x, y);
        self.cells[i] = value;
    }

    fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    // -- Geometry and groups --

    /// Bounds check on signed coordinates.
    pub fn is_on_board(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.in_bounds(x as usize, y as usize)
    }

    /// In-bounds orthogonal neighbors, always in the order
    /// `(x, y+1)`, `(x+1, y)`, `(x, y-1)`, `(x-1, y)`.
    pub fn get_adjacent_points(&self, x: usize, y: usize) -> Vec<Point> {
        let mut v = Vec::with_capacity(4);
        if y + 1 < self.size {
            v.push((x, y + 1));
        }
        if x + 1 < self.size {
            v.push((x + 1, y));
        }
        if y > 0 {
            v.push((x, y - 1));
        }
        if x > 0 {
            v.push((x - 1, y));
        }
        v
    }

    /// The maximal 4-connected group containing `(x, y)`; empty for an empty
    /// or off-board point.
    pub fn get_group(&self, x: usize, y: usize) -> Vec<Point> {
        self.group_and_liberties(x, y).0
    }

    /// Distinct empty points adjacent to the group at `(x, y)`.
    pub fn get_liberties(&self, x: usize, y: usize) -> Vec<Point> {
        self.group_and_liberties(x, y).1
    }

    pub fn count_liberties(&self, x: usize, y: usize) -> usize {
        self.get_liberties(x, y).len()
    }

    /// Flood fill over same-color stones, collecting the group and its liberties.
    fn group_and_liberties(&self, x: usize, y: usize) -> (Vec<Point>, Vec<Point>) {
        let Some(color) = self.get(x, y) else {
            return (Vec::new(), Vec::new());
        };
        let mut visited = vec![false; self.cells.len()];
        let mut liberty_seen = vec![false; self.cells.len()];
        let mut group = Vec::new();
        let mut liberties = Vec::new();
        let mut stack = vec![(x, y)];
        visited[self.idx(x, y)] = true;

        while let Some(pt) = stack.pop() {
            group.push(pt);
            for n in self.get_adjacent_points(pt.0, pt.1) {
                let ni = self.idx(n.0, n.1);
                match self.cells[ni] {
                    None => {
                        if !liberty_seen[ni] {
                            liberty_seen[ni] = true;
                            liberties.push(n);
                        }
                    }
                    Some(c) if c == color && !visited[ni] => {
                        visited[ni] = true;
                        stack.push(n);
                    }
                    _ => {}
                }
            }
        }
        (group, liberties)
    }

    /// Clear every stone of the group at `(x, y)`; returns how many were removed.
    pub fn remove_group(&mut self, x: usize, y: usize) -> usize {
        let group = self.get_group(x, y);
        for &pt in &group {
            self.set(pt, None);
        }
        group.len()
    }

    // -- Legality --

    /// Whether placing `color` at the empty point `(x, y)` would be suicide.
    ///
    /// The placed stone survives if its merged group keeps a liberty other than
    /// `(x, y)`, or if some adjacent opponent group has `(x, y)` as its only
    /// liberty (capturing takes precedence over suicide).
    pub fn would_be_suicide(&self, x: usize, y: usize, color: Color) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        for n in self.get_adjacent_points(x, y) {
            match self.cell(n) {
                None => return false,
                Some(c) if c == color => {
                    if self.get_liberties(n.0, n.1).iter().any(|&l| l != (x, y)) {
                        return false;
                    }
                }
                Some(_) => {
                    if self.get_liberties(n.0, n.1).iter().all(|&l| l == (x, y)) {
                        return false;
                    }
                }
            }
        }
        true
    }

    pub fn is_ko(&self, x: usize, y: usize) -> bool {
        self.ko_point == Some((x, y))
    }

    /// On board, empty, not the ko point and not suicide, checked in that order.
    pub fn check_move(&self, x: usize, y: usize) -> Result<(), MoveError> {
        if !self.in_bounds(x, y) {
            return Err(MoveError::OffBoard);
        }
        if self.cell((x, y)).is_some() {
            return Err(MoveError::Occupied);
        }
        if self.is_ko(x, y) {
            return Err(MoveError::Ko);
        }
        if self.would_be_suicide(x, y, self.current_player) {
            return Err(MoveError::Suicide);
        }
        Ok(())
    }

    pub fn is_valid_move(&self, x: usize, y: usize) -> bool {
        self.check_move(x, y).is_ok()
    }

    /// All legal placements for the side to move, in row-major order.
    pub fn get_valid_moves(&self) -> Vec<Point> {
        let mut moves = Vec::new();
        for x in 0..self.size {
            for y in 0..self.size {
                if self.is_valid_move(x, y) {
                    moves.push((x, y));
                }
            }
        }
        moves
    }

    // -- State transitions --

    /// Play a move given as signed coordinates, `(-1, -1)` meaning pass.
    ///
    /// Returns `false` and leaves the board untouched when the move is illegal.
    pub fn play_move(&mut self, x: i32, y: i32) -> bool {
        match Move::from_coords(x, y) {
            Some(mv) => self.try_play(mv).is_ok(),
            None => false,
        }
    }

    /// Play a move, reporting why an illegal one was rejected.
    pub fn try_play(&mut self, mv: Move) -> Result<(), MoveError> {
        self.apply(mv).map(|_| ())
    }

    /// Play a move and return the record that reverts it.
    pub fn apply(&mut self, mv: Move) -> Result<Undo, MoveError> {
        let (x, y) = match mv {
            Move::Pass => return Ok(self.pass()),
            Move::Play(pt) => pt,
        };
        self.check_move(x, y)?;

        let undo_ko = self.ko_point;
        let undo_passes = self.pass_count;
        let me = self.current_player;
        let opp = me.opponent();

        self.pass_count = 0;
        self.set((x, y), Some(me));
        self.move_history.push(mv);

        let mut captured: Vec<Point> = Vec::new();
        let mut ko_candidate = None;
        for (nx, ny) in self.get_adjacent_points(x, y) {
            // A group reached from two sides is already gone on the second visit.
            if self.cell((nx, ny)) != Some(opp) || self.count_liberties(nx, ny) != 0 {
                continue;
            }
            let group = self.get_group(nx, ny);
            if group.len() == 1 {
                ko_candidate = Some((nx, ny));
            }
            for &pt in &group {
                self.set(pt, None);
            }
            captured.extend(group);
        }
        self.captured_stones.add(me, captured.len());

        self.ko_point = match ko_candidate {
            Some(ko) if captured.len() == 1 && self.count_liberties(x, y) == 1 => Some(ko),
            _ => None,
        };
        self.current_player = opp;

        Ok(Undo {
            mv,
            captured,
            ko_point: undo_ko,
            pass_count: undo_passes,
        })
    }

    /// Pass: always legal. Clears the ko point and counts towards game end.
    pub fn pass(&mut self) -> Undo {
        let undo = Undo {
            mv: Move::Pass,
            captured: Vec::new(),
            ko_point: self.ko_point,
            pass_count: self.pass_count,
        };
        self.pass_count += 1;
        self.move_history.push(Move::Pass);
        self.ko_point = None;
        self.current_player = self.current_player.opponent();
        undo
    }

    /// Revert the most recent [`Board::apply`] or [`Board::pass`].
    pub fn undo(&mut self, undo: Undo) {
        let mover = self.current_player.opponent();
        self.current_player = mover;
        self.move_history.pop();
        self.ko_point = undo.ko_point;
        self.pass_count = undo.pass_count;

        if let Move::Play(pt) = undo.mv {
            self.set(pt, None);
            let opp = mover.opponent();
            for &stone in &undo.captured {
                self.set(stone, Some(opp));
            }
            self.captured_stones.sub(mover, undo.captured.len());
        }
    }

    // -- Termination and scoring --

    /// Whether the game should stop.
    ///
    /// Two consecutive passes end the game as in real Go. The other two
    /// conditions come from [`TerminationPolicy`] and exist only to keep
    /// automated games short: a decisive-looking position (see
    /// [`Board::is_decided`]) or a history longer than `size² / 2`.
    pub fn is_game_over(&self) -> bool {
        if self.pass_count >= self.policy.passes_to_end {
            return true;
        }
        if self.is_decided() {
            return true;
        }
        self.move_history.len() > self.size * self.size / self.policy.move_limit_divisor
    }

    /// Early-stop heuristic: enough of the board is covered, both colors are
    /// present, one color holds more than the policy share of the stones, and
    /// its estimated territory beats the opponent's by the policy ratio.
    pub fn is_decided(&self) -> bool {
        let stones = self.count_stones();
        let total = stones.total();
        if total * self.policy.fill_divisor < self.size * self.size {
            return false;
        }
        if stones.black == 0 || stones.white == 0 {
            return false;
        }

        let black_share = stones.black as f64 / total as f64;
        let white_share = stones.white as f64 / total as f64;
        let share = self.policy.stone_share;
        if black_share <= share && white_share <= share {
            return false;
        }

        let territory = self.count_territory();
        let ratio = self.policy.territory_ratio;
        (black_share > share && territory.black as f64 > territory.white as f64 * ratio)
            || (white_share > share && territory.white as f64 > territory.black as f64 * ratio)
    }

    pub fn count_stones(&self) -> ColorCounts {
        let mut counts = ColorCounts::default();
        for &c in self.cells.iter().flatten() {
            counts.add(c, 1);
        }
        counts
    }

    /// Estimate territory by flood-filling empty regions.
    ///
    /// A region is credited to a color only when every stone bordering it has
    /// that color. Regions with mixed borders, or no bordering stones at all,
    /// count for nobody. Dead stones and seki are not recognized.
    pub fn count_territory(&self) -> ColorCounts {
        let mut territory = ColorCounts::default();
        let mut visited = vec![false; self.cells.len()];

        for start in 0..self.cells.len() {
            if self.cells[start].is_some() || visited[start] {
                continue;
            }
            let mut region = 0;
            let mut borders_black = false;
            let mut borders_white = false;
            let mut stack = vec![(start / self.size, start % self.size)];
            visited[start] = true;

            while let Some((x, y)) = stack.pop() {
                region += 1;
                for n in self.get_adjacent_points(x, y) {
                    let ni = self.idx(n.0, n.1);
                    match self.cells[ni] {
                        None if !visited[ni] => {
                            visited[ni] = true;
                            stack.push(n);
                        }
                        None => {}
                        Some(Color::Black) => borders_black = true,
                        Some(Color::White) => borders_white = true,
                    }
                }
            }

            match (borders_black, borders_white) {
                (true, false) => territory.add(Color::Black, region),
                (false, true) => territory.add(Color::White, region),
                _ => {}
            }
        }
        territory
    }

    /// `(black, white)` area score: stones plus territory, komi to White.
    pub fn get_score(&self, komi: f64) -> (f64, f64) {
        let stones = self.count_stones();
        let territory = self.count_territory();
        let black = (stones.black + territory.black) as f64;
        let white = (stones.white + territory.white) as f64 + komi;
        (black, white)
    }

    /// Higher score wins; `None` on an exact tie.
    pub fn get_winner(&self, komi: f64) -> Option<Color> {
        let (black, white) = self.get_score(komi);
        if black > white {
            Some(Color::Black)
        } else if white > black {
            Some(Color::White)
        } else {
            None
        }
    }
}

/// Column label, skipping `I` as Go boards do.
fn column_letter(i: usize) -> char {
    let c = (b'A' + i as u8) as char;
    if c >= 'I' { (c as u8 + 1) as char } else { c }
}

impl Board {
    fn write_column_letters(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for y in 0..self.size {
            write!(f, "{} ", column_letter(y))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_column_letters(f)?;
        for x in 0..self.size {
            write!(f, "{:2} ", self.size - x)?;
            for y in 0..self.size {
                let ch = match self.cell((x, y)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f, "{}", self.size - x)?;
        }
        self.write_column_letters(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(board: &mut Board, moves: &[(i32, i32)]) {
        for &(x, y) in moves {
            assert!(board.play_move(x, y), "move ({x}, {y}) should be legal");
        }
    }

    #[test]
    fn test_rejects_invalid_sizes() {
        for size in [0, 1, 8, 10, 18, 21] {
            assert_eq!(Board::new(size), Err(BoardError::InvalidSize(size)));
        }
        for size in VALID_SIZES {
            assert_eq!(Board::new(size).unwrap().size(), size);
        }
    }

    #[test]
    fn test_adjacent_points_corner_edge_center() {
        let board = Board::new(9).unwrap();
        assert_eq!(board.get_adjacent_points(0, 0), vec![(0, 1), (1, 0)]);
        assert_eq!(board.get_adjacent_points(8, 4), vec![(8, 5), (8, 3), (7, 4)]);
        assert_eq!(
            board.get_adjacent_points(4, 4),
            vec![(4, 5), (5, 4), (4, 3), (3, 4)]
        );
    }

    #[test]
    fn test_is_on_board() {
        let board = Board::new(9).unwrap();
        assert!(board.is_on_board(0, 0));
        assert!(board.is_on_board(8, 8));
        assert!(!board.is_on_board(9, 0));
        assert!(!board.is_on_board(-1, 3));
        assert!(!board.is_on_board(-1, -1));
    }

    #[test]
    fn test_group_and_liberties() {
        let mut board = Board::new(9).unwrap();
        // Black (4,4), (4,5); White (8,8), (0,0)
        play_all(&mut board, &[(4, 4), (8, 8), (4, 5), (0, 0)]);

        let mut group = board.get_group(4, 4);
        group.sort();
        assert_eq!(group, vec![(4, 4), (4, 5)]);
        assert_eq!(board.count_liberties(4, 5), 6);
        assert_eq!(board.count_liberties(0, 0), 2);
        assert!(board.get_group(2, 2).is_empty());
        assert!(board.get_liberties(2, 2).is_empty());
        assert!(board.get_group(20, 20).is_empty());
    }

    #[test]
    fn test_remove_group_counts_stones() {
        let mut board = Board::new(9).unwrap();
        play_all(&mut board, &[(4, 4), (0, 0), (4, 5), (0, 8), (4, 6)]);
        assert_eq!(board.remove_group(4, 5), 3);
        assert_eq!(board.count_stones(), ColorCounts { black: 0, white: 2 });
        assert_eq!(board.remove_group(3, 3), 0);
    }

    #[test]
    fn test_illegal_move_leaves_state_untouched() {
        let mut board = Board::new(9).unwrap();
        play_all(&mut board, &[(4, 4), (-1, -1)]);
        let before = board.clone();

        assert_eq!(board.try_play(Move::Play((4, 4))), Err(MoveError::Occupied));
        assert_eq!(board.try_play(Move::Play((9, 0))), Err(MoveError::OffBoard));
        assert!(!board.play_move(-3, 2));
        assert_eq!(board, before);
        assert_eq!(board.pass_count(), 1);
    }

    #[test]
    fn test_pass_flips_player_and_clears_ko() {
        let mut board = Board::new(9).unwrap();
        assert!(board.play_move(-1, -1));
        assert_eq!(board.current_player(), Color::White);
        assert_eq!(board.pass_count(), 1);
        assert_eq!(board.move_history(), &[Move::Pass]);
        assert!(board.play_move(3, 3));
        assert_eq!(board.pass_count(), 0);
    }

    #[test]
    fn test_undo_restores_capture() {
        let mut board = Board::new(9).unwrap();
        // White (4,4) gets surrounded; Black's last stone at (4,5) captures it.
        play_all(
            &mut board,
            &[(3, 4), (4, 4), (5, 4), (0, 0), (4, 3), (0, 8)],
        );
        let before = board.clone();

        let undo = board.apply(Move::Play((4, 5))).unwrap();
        assert_eq!(undo.captured(), &[(4, 4)]);
        assert_eq!(board.get(4, 4), None);
        assert_eq!(board.captured_stones().black, 1);

        board.undo(undo);
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_restores_pass() {
        let mut board = Board::new(9).unwrap();
        play_all(&mut board, &[(2, 2)]);
        let before = board.clone();
        let undo = board.pass();
        board.undo(undo);
        assert_eq!(board, before);
    }

    #[test]
    fn test_territory_single_color_region() {
        let mut board = Board::new(9).unwrap();
        // A black wall along y = 2 splits the board into two black-only regions.
        for x in 0..9 {
            assert!(board.play_move(x, 2));
            assert!(board.play_move(-1, -1));
        }
        let territory = board.count_territory();
        assert_eq!(territory.black, 18 + 54);
        assert_eq!(territory.white, 0);

        assert_eq!(board.count_stones().black, 9);
        assert_eq!(board.get_score(6.5), (81.0, 6.5));
        assert_eq!(board.get_winner(6.5), Some(Color::Black));
    }

    #[test]
    fn test_territory_mixed_and_empty_regions() {
        let board = Board::new(9).unwrap();
        assert_eq!(board.count_territory(), ColorCounts::default());

        let mut board = Board::new(9).unwrap();
        play_all(&mut board, &[(4, 4), (4, 6)]);
        assert_eq!(board.count_territory(), ColorCounts::default());
    }

    #[test]
    fn test_winner_tie_is_none() {
        let board = Board::new(9).unwrap();
        assert_eq!(board.get_score(0.0), (0.0, 0.0));
        assert_eq!(board.get_winner(0.0), None);
        assert_eq!(board.get_winner(6.5), Some(Color::White));
    }

    #[test]
    fn test_move_limit_ends_game() {
        let mut board = Board::new(9).unwrap();
        // 81 / 2 = 40 moves are allowed. Black fills even-parity points from
        // the top, White mirrors from the bottom, so nothing is ever captured.
        for i in 0..40 {
            let (x, y) = ((i / 9) as i32, (i % 9) as i32);
            let (x, y) = if i % 2 == 0 { (x, y) } else { (8 - x, 8 - y) };
            assert!(board.play_move(x, y));
            assert!(!board.is_game_over());
        }
        assert!(board.play_move(-1, -1));
        assert_eq!(board.move_history().len(), 41);
        assert!(board.is_game_over());
    }

    #[test]
    fn test_reset() {
        let mut board = Board::new(13).unwrap();
        play_all(&mut board, &[(6, 6), (-1, -1), (1, 1)]);
        board.reset();
        assert_eq!(board, Board::new(13).unwrap());
    }

    #[test]
    fn test_display_skips_i() {
        let mut board = Board::new(9).unwrap();
        play_all(&mut board, &[(0, 0), (8, 8)]);
        let text = board.to_string();
        let header = text.lines().next().unwrap();
        assert_eq!(header.trim(), "A B C D E F G H J");
        assert!(text.lines().nth(1).unwrap().starts_with(" 9 X"));
        assert!(text.lines().nth(9).unwrap().contains("O 1"));
    }

    #[test]
    fn test_display_letters_below_board() {
        let board = Board::new(13).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[14], lines[0]);
        assert_eq!(lines[14].trim(), "A B C D E F G H J K L M N");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_move_coords() {
        assert_eq!(Move::from_coords(-1, -1), Some(Move::Pass));
        assert_eq!(Move::from_coords(2, 3), Some(Move::Play((2, 3))));
        assert_eq!(Move::from_coords(-1, 3), None);
        assert_eq!(Move::Pass.coords(), PASS);
        assert_eq!(Move::Play((4, 5)).coords(), (4, 5));
    }
}
