//! A game session: turns, move history and the running score

use log::info;

use crate::{
    board::{Board, Move, Player},
    error::BoardError,
    terminal::{verdict, Verdict},
};

/// Results over all games of a session
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub struct Scoreboard {
    pub human: u32,
    pub computer: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::Human => self.human,
            Player::Computer => self.computer,
        }
    }

    fn record(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::Win {
                player: Player::Human,
                ..
            } => self.human += 1,
            Verdict::Win {
                player: Player::Computer,
                ..
            } => self.computer += 1,
            Verdict::Draw => self.draws += 1,
            Verdict::InProgress => {}
        }
    }
}

/// The canonical board of a game together with whose turn it is
///
/// Both human and computer moves go through [`Game::play`], the computer's
/// column comes from a [`Policy`](crate::Policy) working on the board
/// returned by [`Game::board`].
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    first: Player,
    current: Player,
    history: Vec<Move>,
    verdict: Verdict,
    scoreboard: Scoreboard,
}

impl Game {
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            first,
            current: first,
            history: Vec::new(),
            verdict: Verdict::InProgress,
            scoreboard: Scoreboard::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move
    pub fn current(&self) -> Player {
        self.current
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn is_over(&self) -> bool {
        self.verdict.is_terminal()
    }

    /// Drops a token for the player to move and judges the result
    ///
    /// On an error nothing changes: the turn stays with the same player.
    pub fn play(&mut self, column: usize) -> Result<Verdict, BoardError> {
        if self.is_over() {
            return Err(BoardError::GameOver);
        }

        let placed = self.board.drop_token(column, self.current)?;
        self.history.push(placed);
        self.verdict = verdict(&self.board, Some(placed));

        match &self.verdict {
            Verdict::InProgress => self.current = self.current.opponent(),
            Verdict::Win { player, cells } => {
                info!("{} wins after {} moves with {:?}", player, self.history.len(), cells);
                self.scoreboard.record(&self.verdict);
            }
            Verdict::Draw => {
                info!("draw after {} moves", self.history.len());
                self.scoreboard.record(&self.verdict);
            }
        }
        Ok(self.verdict.clone())
    }

    /// Takes back the last move and gives the turn back to its player
    ///
    /// Refused (returns `None`) when there is no move or the game is over.
    pub fn undo(&mut self) -> Option<Move> {
        if self.is_over() {
            return None;
        }
        let last = self.history.pop()?;
        self.board.undo(last);
        self.current = last.player;
        Some(last)
    }

    /// Starts a new game with the same starting player, keeping the score
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current = self.first;
        self.history.clear();
        self.verdict = Verdict::InProgress;
    }
}
