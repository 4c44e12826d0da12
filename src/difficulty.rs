//! Difficulty tiers and the strategies behind them

use std::{fmt, str::FromStr};

use log::{debug, warn};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{
    board::{Board, Player},
    error::BoardError,
    evaluation::Weights,
    search::{winning_column, Searcher},
};

/// How strong the computer plays
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Difficulty {
    /// random legal moves
    Easy,
    /// immediate wins and blocks, otherwise a shallow search
    Medium,
    /// a deep alpha-beta search
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("unknown difficulty '{}', expected easy, medium or hard", s)),
        }
    }
}

/// A way of choosing the computer's column
pub trait Strategy: Send {
    /// Picks a column for `player`, `None` if the strategy has no answer
    fn choose_column(&mut self, board: &Board, player: Player, rng: &mut StdRng) -> Option<usize>;

    fn difficulty(&self) -> Difficulty;

    fn name(&self) -> &'static str;
}

/// Picks uniformly among the legal columns
#[derive(Copy, Clone, Default, Debug)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose_column(&mut self, board: &Board, _player: Player, rng: &mut StdRng) -> Option<usize> {
        board.valid_columns().choose(rng).copied()
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Takes a winning column, else blocks the opponent's winning column, else
/// falls back to a shallow search
#[derive(Clone, Debug)]
pub struct TacticalStrategy {
    pub depth: usize,
    pub weights: Weights,
}

impl Strategy for TacticalStrategy {
    fn choose_column(&mut self, board: &Board, player: Player, _rng: &mut StdRng) -> Option<usize> {
        if let Some(column) = winning_column(board, player) {
            debug!("{} wins in column {}", player, column + 1);
            return Some(column);
        }
        if let Some(column) = winning_column(board, player.opponent()) {
            debug!("{} blocks column {}", player, column + 1);
            return Some(column);
        }
        Searcher::new(player)
            .with_weights(self.weights)
            .best_column(board, self.depth)
            .ok()
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Medium
    }

    fn name(&self) -> &'static str {
        "tactical"
    }
}

/// Plays the best column of a deep minimax search
#[derive(Clone, Debug)]
pub struct MinimaxStrategy {
    pub depth: usize,
    pub weights: Weights,
}

impl Strategy for MinimaxStrategy {
    fn choose_column(&mut self, board: &Board, player: Player, _rng: &mut StdRng) -> Option<usize> {
        Searcher::new(player)
            .with_weights(self.weights)
            .best_column(board, self.depth)
            .ok()
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Hard
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

/// Settings shared by all tiers
#[derive(Clone, Debug)]
pub struct PolicyConfig {
    /// search depth in plies behind the medium tier's tactical checks
    pub medium_depth: usize,
    pub hard_depth: usize,
    pub weights: Weights,
    /// seeds the random tier and the random fallback, entropy if `None`
    pub seed: Option<u64>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            medium_depth: 2,
            hard_depth: 5,
            weights: Weights::default(),
            seed: None,
        }
    }
}

/// Creates the strategy behind a difficulty tier
pub fn create_strategy(difficulty: Difficulty, config: &PolicyConfig) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomStrategy),
        Difficulty::Medium => Box::new(TacticalStrategy {
            depth: config.medium_depth,
            weights: config.weights,
        }),
        Difficulty::Hard => Box::new(MinimaxStrategy {
            depth: config.hard_depth,
            weights: config.weights,
        }),
    }
}

/// Chooses computer moves at a difficulty tier
///
/// A strategy that comes up empty is replaced by a random legal column, so a
/// move is always produced while the board has room.
pub struct Policy {
    difficulty: Difficulty,
    strategy: Box<dyn Strategy>,
    rng: StdRng,
}

impl Policy {
    pub fn new(difficulty: Difficulty, config: PolicyConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_strategy(difficulty, create_strategy(difficulty, &config), rng)
    }

    /// Creates a `Policy` around a custom strategy
    pub fn with_strategy(difficulty: Difficulty, strategy: Box<dyn Strategy>, rng: StdRng) -> Self {
        Self {
            difficulty,
            strategy,
            rng,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the column `player` should drop into
    ///
    /// Fails with [`BoardError::NoLegalMoves`] only if the board is full.
    pub fn choose_column(&mut self, board: &Board, player: Player) -> Result<usize, BoardError> {
        if board.is_full() {
            return Err(BoardError::NoLegalMoves);
        }

        match self.strategy.choose_column(board, player, &mut self.rng) {
            Some(column) if board.playable(column) => Ok(column),
            chosen => {
                warn!(
                    "{} strategy gave {:?}, falling back to a random column",
                    self.strategy.name(),
                    chosen
                );
                RandomStrategy
                    .choose_column(board, player, &mut self.rng)
                    .ok_or(BoardError::NoLegalMoves)
            }
        }
    }
}
