//! Choice source port - where the opponent's throws come from
//!
//! The resolver never touches a random number generator directly. It asks a
//! `ChoiceSource` for the opponent's throw, so tests and demos can script the
//! opponent while the binary uses a seeded or entropy-backed RNG.

use crate::rps::Choice;

/// Supplies the opponent's throw for each round
///
/// # Examples
///
/// ```
/// use parlor::{ports::ChoiceSource, rps::Choice};
///
/// struct AlwaysPaper;
///
/// impl ChoiceSource for AlwaysPaper {
///     fn draw(&mut self) -> Choice {
///         Choice::Paper
///     }
/// }
///
/// assert_eq!(AlwaysPaper.draw(), Choice::Paper);
/// ```
pub trait ChoiceSource {
    /// Produce the next throw. Called exactly once per round.
    fn draw(&mut self) -> Choice;

    /// Short label for logs and session banners
    fn name(&self) -> &str {
        "custom"
    }
}

impl<S: ChoiceSource + ?Sized> ChoiceSource for Box<S> {
    fn draw(&mut self) -> Choice {
        (**self).draw()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
