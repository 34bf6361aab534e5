//! High-level game management

use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::{
    board::{BoardState, Player},
    lines::WinningLine,
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Where a game stands after the latest move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won(WinningLine),
    Draw,
}

impl GameStatus {
    /// Whether the game accepts no further moves
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(line) => Some(line.player),
            _ => None,
        }
    }

    fn of(board: &BoardState) -> Self {
        if let Some(line) = board.evaluate_win() {
            GameStatus::Won(line)
        } else if board.is_draw() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "Game in progress"),
            GameStatus::Won(line) => write!(f, "{} is the winner", line.player),
            GameStatus::Draw => write!(f, "It's a draw"),
        }
    }
}

/// What a single accepted move did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    #[serde(rename = "move")]
    pub mv: Move,
    pub board: BoardState,
    pub status: GameStatus,
}

impl MoveReport {
    /// Winning marker when this move ended the game with a line
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }
}

/// A tic-tac-toe game with history.
///
/// The engine is authoritative about legality: occupied slots, out-of-range
/// indices and moves after the game ends are rejected without touching any
/// state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: BoardState,
    moves: Vec<Move>,
    status: GameStatus,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Game {
            board: BoardState::new(),
            moves: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player whose marker goes down next
    pub fn to_move(&self) -> Player {
        self.board.to_move
    }

    /// Boolean turn flag: `true` while O is next, as on a fresh board
    pub fn turn_flag(&self) -> bool {
        self.board.to_move == Player::FIRST
    }

    /// Place the current marker at `position`.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::GameOver`] once the game is won or drawn
    /// - [`crate::Error::InvalidPosition`] for indices outside 0-8
    /// - [`crate::Error::InvalidMove`] for an occupied slot
    pub fn apply_move(&mut self, position: usize) -> Result<MoveReport, crate::Error> {
        if self.status.is_over() {
            return Err(crate::Error::GameOver);
        }

        let player = self.board.to_move;
        let next = self.board.make_move(position)?;
        let mv = Move { position, player };

        self.board = next;
        self.moves.push(mv);
        self.status = GameStatus::of(&next);
        debug!("{player} placed at {position} ({})", next.encode());

        match self.status {
            GameStatus::Won(line) => info!("{} wins on line {:?}", line.player, line.line),
            GameStatus::Draw => info!("board filled with no line, game drawn"),
            GameStatus::InProgress => {}
        }

        Ok(MoveReport {
            mv,
            board: next,
            status: self.status,
        })
    }

    /// Evaluate the current board against the winning-line table
    pub fn evaluate_win(&self) -> Option<WinningLine> {
        self.board.evaluate_win()
    }

    /// Clear every slot and hand the first move back to O
    pub fn reset(&mut self) {
        info!("board reset after {} moves", self.moves.len());
        *self = Game::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
