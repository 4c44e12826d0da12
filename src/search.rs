//! Depth-limited minimax search with alpha-beta pruning

use log::{debug, trace};

use crate::{
    board::{Board, Move, Player},
    error::BoardError,
    evaluation::{evaluate, Weights},
    terminal::{find_winning_line, has_won},
};

/// The score of a position won by the searching player, before the bonus
/// for the remaining depth
pub const WIN_SCORE: i32 = 1_000_000;

/// Returns the first column (center first) where `player` completes a line
/// with a single drop
pub fn winning_column(board: &Board, player: Player) -> Option<usize> {
    let mut scratch = board.clone();
    for column in board.valid_columns() {
        if let Ok(placed) = scratch.drop_token(column, player) {
            let wins =
                find_winning_line(&scratch, placed.row, placed.column, player).is_some();
            scratch.undo(placed);
            if wins {
                return Some(column);
            }
        }
    }
    None
}

/// A minimax searcher playing for one side
///
/// # Notes
/// The searching player is always the maximizing side, its opponent the
/// minimizing side. Scores are from the searching player's point of view:
/// a won position scores [`WIN_SCORE`] plus the depth still remaining, so
/// quicker wins (and slower losses) are preferred. Positions at the depth
/// horizon are scored with [`evaluate`], a full board without a line scores 0.
///
/// Every branch drops a token on a private scratch board and takes it back
/// before the next sibling is tried, the caller's board is never modified.
#[derive(Clone, Debug)]
pub struct Searcher {
    player: Player,
    weights: Weights,
    pruning: bool,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` choosing moves for `player`
    pub fn new(player: Player) -> Self {
        Self {
            player,
            weights: Weights::default(),
            pruning: true,
            node_count: 0,
        }
    }

    /// Replaces the evaluation weights of an existing `Searcher`
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Turns off alpha-beta cutoffs, searching the full tree
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    /// Computes the minimax value of `board` with `depth` plies to go
    ///
    /// `maximizing` is true when the searching player is to move. Lines
    /// already on the board are found with a full scan.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        maximizing: bool,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        let mut scratch = board.clone();
        self.search(&mut scratch, None, depth, maximizing, alpha, beta)
    }

    /// Scores every legal column after a drop of the searching player,
    /// in the order the columns are tried (center first)
    pub fn column_scores(&mut self, board: &Board, depth: usize) -> Vec<(usize, i32)> {
        let mut scratch = board.clone();
        let mut scores = Vec::new();

        for column in board.valid_columns() {
            let placed = match scratch.drop_token(column, self.player) {
                Ok(placed) => placed,
                Err(_) => continue,
            };
            // every column is searched with the full window, so the scores are exact
            let score = self.search(
                &mut scratch,
                Some(placed),
                depth.saturating_sub(1),
                false,
                i32::MIN,
                i32::MAX,
            );
            scratch.undo(placed);
            trace!("{}: column {} scores {}", self.player, column + 1, score);
            scores.push((column, score));
        }
        scores
    }

    /// Returns the column with the best minimax score, ties going to the
    /// column tried first
    pub fn best_column(&mut self, board: &Board, depth: usize) -> Result<usize, BoardError> {
        let start = self.node_count;
        let mut best: Option<(usize, i32)> = None;
        for (column, score) in self.column_scores(board, depth) {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((column, score)),
            }
        }

        let (column, score) = best.ok_or(BoardError::NoLegalMoves)?;
        debug!(
            "{} picks column {} at depth {} (score {}, {} nodes)",
            self.player,
            column + 1,
            depth,
            score,
            self.node_count - start
        );
        Ok(column)
    }

    /// Scores a board with a line on it, `None` if there is none
    fn terminal_score(&self, board: &Board, last: Option<Move>, depth: usize) -> Option<i32> {
        let winner = match last {
            // only the last token can have completed a line
            Some(last) => find_winning_line(board, last.row, last.column, last.player)
                .map(|_| last.player),
            None if has_won(board, self.player) => Some(self.player),
            None if has_won(board, self.player.opponent()) => Some(self.player.opponent()),
            None => None,
        }?;

        let score = WIN_SCORE + depth as i32;
        Some(if winner == self.player { score } else { -score })
    }

    fn search(
        &mut self,
        board: &mut Board,
        last: Option<Move>,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.node_count += 1;

        if let Some(score) = self.terminal_score(board, last, depth) {
            return score;
        }
        let columns = board.valid_columns();
        if columns.is_empty() {
            // draw
            return 0;
        }
        if depth == 0 {
            return evaluate(board, self.player, &self.weights);
        }

        let mover = if maximizing {
            self.player
        } else {
            self.player.opponent()
        };
        let mut value = if maximizing { i32::MIN } else { i32::MAX };

        for column in columns {
            let placed = match board.drop_token(column, mover) {
                Ok(placed) => placed,
                Err(_) => continue,
            };
            let score = self.search(board, Some(placed), depth - 1, !maximizing, alpha, beta);
            board.undo(placed);

            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                beta = beta.min(value);
            }
            // the other player will never allow this branch
            if self.pruning && alpha >= beta {
                break;
            }
        }
        value
    }
}
