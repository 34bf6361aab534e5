//! Two small games with their rules kept apart from any front end
//!
//! This crate provides:
//! - A tic-tac-toe engine that rejects illegal moves and reports wins and draws
//! - A stone-paper-scissor resolver with an injectable opponent and a running tally
//! - A terminal front end for both (`parlor` binary)

pub mod adapters;
pub mod cli;
pub mod error;
pub mod ports;
pub mod rps;
pub mod tictactoe;

pub use error::{Error, Result};
pub use rps::{Choice, Resolver, Round, RoundOutcome, Scoreboard};
pub use tictactoe::{BoardState, Game, GameStatus, MoveReport, Player};
