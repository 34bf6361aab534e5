//! Rock-paper-scissors (stone-paper-scissor) against a random opponent

pub mod choice;
pub mod resolver;
pub mod round;

pub use choice::Choice;
pub use resolver::Resolver;
pub use round::{Round, RoundOutcome, Scoreboard, resolve};
