//! Terminal front end for both games
//!
//! Each session reads one command per line and renders the result, standing
//! in for the click handlers of a graphical board.

pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
