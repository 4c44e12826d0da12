//! A computer opponent for the board game 'Connect 4'
//!
//! The engine keeps a plain board representation, detects wins and draws,
//! scores positions with a windowed heuristic and picks computer moves with a
//! depth-limited minimax search using alpha-beta pruning. How deep (and
//! whether) the computer searches is decided by a [`Difficulty`] tier.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{Board, Difficulty, Player, Policy, PolicyConfig};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // the human has three tokens stacked in the center column, the
//! // computer two in the leftmost one
//! let board = Board::from_moves("41414", Player::Human)?;
//! let mut policy = Policy::new(Difficulty::Hard, PolicyConfig::default());
//!
//! // column 3 is the 0-indexed center column, the computer must block it
//! assert_eq!(policy.choose_column(&board, Player::Computer)?, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod terminal;

pub mod evaluation;

pub mod search;

pub mod difficulty;

pub mod game;


pub use board::{Board, Cell, Move, Player, Position};
pub use difficulty::{Difficulty, Policy, PolicyConfig};
pub use error::BoardError;
pub use evaluation::Weights;
pub use game::{Game, Scoreboard};
pub use search::Searcher;
pub use terminal::Verdict;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const CONNECT: usize = 4;

// a winning line has to fit on the board in every direction
const_assert!(WIDTH >= CONNECT);
const_assert!(HEIGHT >= CONNECT);
