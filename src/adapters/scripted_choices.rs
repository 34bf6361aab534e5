//! Opponent that replays a fixed list of throws.

use crate::{Result, error::Error, ports::ChoiceSource, rps::Choice};

/// Replays its script in order, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedChoices {
    script: Vec<Choice>,
    cursor: usize,
}

impl ScriptedChoices {
    /// # Errors
    ///
    /// Returns [`Error::EmptyScript`] when `script` yields nothing.
    pub fn new(script: impl IntoIterator<Item = Choice>) -> Result<Self> {
        let script: Vec<Choice> = script.into_iter().collect();
        if script.is_empty() {
            return Err(Error::EmptyScript);
        }
        Ok(Self { script, cursor: 0 })
    }

    /// A source that always throws `choice`
    pub fn always(choice: Choice) -> Self {
        Self {
            script: vec![choice],
            cursor: 0,
        }
    }
}

impl ChoiceSource for ScriptedChoices {
    fn draw(&mut self) -> Choice {
        let choice = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        choice
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_cycles() {
        let mut source = ScriptedChoices::new([Choice::Paper, Choice::Stone]).unwrap();
        let drawn: Vec<Choice> = (0..5).map(|_| source.draw()).collect();
        assert_eq!(
            drawn,
            [
                Choice::Paper,
                Choice::Stone,
                Choice::Paper,
                Choice::Stone,
                Choice::Paper
            ]
        );
    }

    #[test]
    fn test_empty_script_is_rejected() {
        assert!(matches!(
            ScriptedChoices::new(Vec::new()),
            Err(Error::EmptyScript)
        ));
    }
}
