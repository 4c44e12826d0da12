use std::fmt;

use crate::{error::BoardError, terminal, HEIGHT, WIDTH};

/// The two sides of a game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// The cell state of a token owned by this player
    pub fn cell(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Computer => Cell::Computer,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Computer => write!(f, "Computer"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Computer => Some(Player::Computer),
        }
    }

    fn swapped(self) -> Self {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Human => Cell::Computer,
            Cell::Computer => Cell::Human,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// A cell coordinate, row 0 is the top row
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// The record of a successful drop
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// Returns the columns ordered from the middle outwards, as
/// the middle columns are often better moves
pub const fn move_order() -> [usize; WIDTH] {
    let mut move_order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        move_order[i] = (WIDTH / 2) + (i % 2) * (i / 2 + 1) - (1 - i % 2) * (i / 2);
        i += 1;
    }
    move_order
}

/// A 7x6 Connect 4 board
///
/// Tokens only ever enter the board through [`Board::drop_token`], so a
/// token always rests on the bottom row or on another token. Search code
/// works on clones and never touches the caller's board.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    // cells are stored top-to-bottom, left-to-right
    cells: [[Cell; WIDTH]; HEIGHT],
    num_moves: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
            num_moves: 0,
        }
    }

    /// Builds a board from a string of 1-indexed columns, players alternating
    /// starting with `first`. Only the final move may complete a line.
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Player) -> Result<Self, BoardError> {
        let mut board = Self::new();
        let mut player = first;
        let total = moves.as_ref().chars().count();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    let placed = board.drop_token(column - 1, player)?;
                    // abort if the position is won at any point before the end
                    if terminal::find_winning_line(&board, placed.row, placed.column, player)
                        .is_some()
                        && board.num_moves < total
                    {
                        return Err(BoardError::GameOver);
                    }
                    player = player.opponent();
                }
                _ => return Err(BoardError::ParseMove(column_char)),
            }
        }
        Ok(board)
    }

    /// Builds a board from a snapshot of cells, rejecting floating tokens
    pub fn from_cells(cells: [[Cell; WIDTH]; HEIGHT]) -> Result<Self, BoardError> {
        let mut num_moves = 0;
        for column in 0..WIDTH {
            for row in 0..HEIGHT {
                if cells[row][column].is_empty() {
                    continue;
                }
                num_moves += 1;
                if row + 1 < HEIGHT && cells[row + 1][column].is_empty() {
                    return Err(BoardError::Floating { row, column });
                }
            }
        }
        Ok(Self { cells, num_moves })
    }

    pub fn cells(&self) -> &[[Cell; WIDTH]; HEIGHT] {
        &self.cells
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// Whether a token can still be dropped into `column`
    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    /// Returns the row a token dropped into `column` would land on
    fn landing_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT).rev().find(|&row| self.cells[row][column].is_empty())
    }

    /// Drops a token for `player` into `column`
    ///
    /// The token falls to the lowest empty cell. Fails with
    /// [`BoardError::ColumnFull`] and leaves the board untouched if there is
    /// none.
    pub fn drop_token(&mut self, column: usize, player: Player) -> Result<Move, BoardError> {
        if column >= WIDTH {
            return Err(BoardError::InvalidColumn { column });
        }
        let row = self
            .landing_row(column)
            .ok_or(BoardError::ColumnFull { column })?;
        self.cells[row][column] = player.cell();
        self.num_moves += 1;
        Ok(Move {
            row,
            column,
            player,
        })
    }

    /// Takes back the most recent token of a column
    pub(crate) fn undo(&mut self, last: Move) {
        debug_assert_eq!(self.cells[last.row][last.column], last.player.cell());
        debug_assert!(last.row == 0 || self.cells[last.row - 1][last.column].is_empty());
        self.cells[last.row][last.column] = Cell::Empty;
        self.num_moves -= 1;
    }

    /// Whether every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    /// The legal columns, center column first then fanning outwards
    pub fn valid_columns(&self) -> Vec<usize> {
        move_order()
            .iter()
            .copied()
            .filter(|&column| self.playable(column))
            .collect()
    }

    /// The same position with the owners of all tokens exchanged
    pub fn swapped(&self) -> Self {
        let mut board = self.clone();
        for row in board.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = cell.swapped();
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        writeln!(f, "{}", cols)?;
        for row in self.cells.iter() {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Human => 'X',
                    Cell::Computer => 'O',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
