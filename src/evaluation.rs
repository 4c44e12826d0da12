//! Static evaluation of non-terminal positions
//!
//! Every run of [`CONNECT`] cells along the four line families (a window) is
//! classified on its own. Windows holding tokens of both players can never
//! become a line and are ignored. The remaining windows are counted by shape
//! and weighted, plus a bonus for tokens in the center column, which takes
//! part in the most windows.

use crate::{
    board::{Board, Cell, Player},
    terminal::Direction,
    CONNECT, HEIGHT, WIDTH,
};

/// Weights of the evaluation terms
///
/// All weights are positive magnitudes, the sign is decided by whose tokens
/// make up the pattern. `block_three` is the weight of an opponent's open
/// three and is kept above `open_three` so the evaluation leans to defence.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Weights {
    /// per token in the center column
    pub center: i32,
    /// a complete line inside the horizon
    pub four: i32,
    /// three own tokens and an empty cell
    pub open_three: i32,
    /// two tokens and two empty cells, either side
    pub open_two: i32,
    /// three opponent tokens and an empty cell
    pub block_three: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            center: 3,
            four: 1000,
            open_three: 50,
            open_two: 10,
            block_three: 80,
        }
    }
}

impl Weights {
    /// Weights scoring both players' threes alike, which makes the
    /// evaluation exactly antisymmetric in the owners
    pub fn symmetric() -> Self {
        let weights = Self::default();
        Self {
            block_three: weights.open_three,
            ..weights
        }
    }
}

/// Window shapes found along one direction, seen from one player
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub struct WindowCounts {
    pub fours: i32,
    pub open_threes: i32,
    pub open_twos: i32,
    pub opponent_fours: i32,
    pub opponent_threes: i32,
    pub opponent_twos: i32,
}

impl WindowCounts {
    fn add(&mut self, other: WindowCounts) {
        self.fours += other.fours;
        self.open_threes += other.open_threes;
        self.open_twos += other.open_twos;
        self.opponent_fours += other.opponent_fours;
        self.opponent_threes += other.opponent_threes;
        self.opponent_twos += other.opponent_twos;
    }

    fn score(&self, weights: &Weights) -> i32 {
        weights.four * (self.fours - self.opponent_fours)
            + weights.open_three * self.open_threes
            - weights.block_three * self.opponent_threes
            + weights.open_two * (self.open_twos - self.opponent_twos)
    }
}

/// Counts the window shapes of `player` along `direction`
pub fn count_windows(board: &Board, player: Player, direction: Direction) -> WindowCounts {
    let (dr, dc) = direction.step();
    let span = CONNECT as i32 - 1;
    let mut counts = WindowCounts::default();

    for row in 0..HEIGHT as i32 {
        for column in 0..WIDTH as i32 {
            let (end_row, end_column) = (row + dr * span, column + dc * span);
            if end_row < 0 || end_row >= HEIGHT as i32 || end_column < 0 || end_column >= WIDTH as i32 {
                continue;
            }

            let (mut own, mut other) = (0usize, 0usize);
            for i in 0..CONNECT as i32 {
                let cell = board.cell((row + dr * i) as usize, (column + dc * i) as usize);
                match cell.owner() {
                    Some(owner) if owner == player => own += 1,
                    Some(_) => other += 1,
                    None => {}
                }
            }

            match (own, other) {
                (n, 0) if n == CONNECT => counts.fours += 1,
                (n, 0) if n == CONNECT - 1 => counts.open_threes += 1,
                (n, 0) if n == CONNECT - 2 => counts.open_twos += 1,
                (0, n) if n == CONNECT => counts.opponent_fours += 1,
                (0, n) if n == CONNECT - 1 => counts.opponent_threes += 1,
                (0, n) if n == CONNECT - 2 => counts.opponent_twos += 1,
                // mixed windows and single tokens
                _ => {}
            }
        }
    }
    counts
}

/// Scores `board` for `player`, positive values favour `player`
pub fn evaluate(board: &Board, player: Player, weights: &Weights) -> i32 {
    let center = WIDTH / 2;
    let mut score = 0;
    for row in 0..HEIGHT {
        match board.cell(row, center) {
            Cell::Empty => {}
            cell if cell == player.cell() => score += weights.center,
            _ => score -= weights.center,
        }
    }

    let mut counts = WindowCounts::default();
    for &direction in Direction::ALL.iter() {
        counts.add(count_windows(board, player, direction));
    }
    score + counts.score(weights)
}
