//! Win and draw detection

use crate::{
    board::{Board, Move, Player, Position},
    CONNECT, HEIGHT, WIDTH,
};

/// The four line families a win can be made along
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// top-left to bottom-right
    DiagonalDown,
    /// bottom-left to top-right
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// The unit step (row, column) of the direction, rows growing downwards
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }
}

/// How a game stands after a move
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Verdict {
    InProgress,
    /// `cells` holds the winning line in board order, at least [`CONNECT`] long
    Win {
        player: Player,
        cells: Vec<Position>,
    },
    Draw,
}

impl Verdict {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::InProgress)
    }
}

fn in_bounds(row: i32, column: i32) -> bool {
    row >= 0 && row < HEIGHT as i32 && column >= 0 && column < WIDTH as i32
}

/// Walks from (row, column) by (dr, dc) while the cells belong to `player`,
/// not including the starting cell
fn run(board: &Board, row: usize, column: usize, (dr, dc): (i32, i32), player: Player) -> Vec<Position> {
    let mut cells = Vec::new();
    let mut r = row as i32 + dr;
    let mut c = column as i32 + dc;
    while in_bounds(r, c) && board.cell(r as usize, c as usize) == player.cell() {
        cells.push(Position::new(r as usize, c as usize));
        r += dr;
        c += dc;
    }
    cells
}

/// Checks whether the token of `player` at (row, column) is part of a line
/// of at least [`CONNECT`] tokens
///
/// Returns the cells of the first such line found, ordered along the line.
pub fn find_winning_line(
    board: &Board,
    row: usize,
    column: usize,
    player: Player,
) -> Option<Vec<Position>> {
    if board.cell(row, column) != player.cell() {
        return None;
    }
    for direction in Direction::ALL.iter() {
        let (dr, dc) = direction.step();
        let forward = run(board, row, column, (dr, dc), player);
        let backward = run(board, row, column, (-dr, -dc), player);

        if forward.len() + backward.len() + 1 >= CONNECT {
            let mut line: Vec<Position> = backward.into_iter().rev().collect();
            line.push(Position::new(row, column));
            line.extend(forward);
            return Some(line);
        }
    }
    None
}

/// Finds any line of `player` by checking every one of their tokens
pub fn winning_line(board: &Board, player: Player) -> Option<Vec<Position>> {
    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            if board.cell(row, column) != player.cell() {
                continue;
            }
            if let Some(line) = find_winning_line(board, row, column, player) {
                return Some(line);
            }
        }
    }
    None
}

pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Whether either player has a line anywhere on the board
pub fn is_any_win(board: &Board) -> bool {
    (0..HEIGHT).any(|row| {
        (0..WIDTH).any(|column| match board.cell(row, column).owner() {
            Some(player) => find_winning_line(board, row, column, player).is_some(),
            None => false,
        })
    })
}

/// Judges the board, seeding the win check at `last` when it is known
pub fn verdict(board: &Board, last: Option<Move>) -> Verdict {
    let win = match last {
        Some(last) => find_winning_line(board, last.row, last.column, last.player)
            .map(|cells| (last.player, cells)),
        None => [Player::Human, Player::Computer]
            .iter()
            .find_map(|&player| winning_line(board, player).map(|cells| (player, cells))),
    };

    match win {
        Some((player, cells)) => Verdict::Win { player, cells },
        None if board.is_full() => Verdict::Draw,
        None => Verdict::InProgress,
    }
}
