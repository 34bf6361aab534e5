//! Subcommands of the `parlor` binary

pub mod rps;
pub mod tictactoe;
