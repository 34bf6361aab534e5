//! The three throws and the cyclic beats-relation between them

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A throw in stone-paper-scissor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Stone,
    Paper,
    Scissor,
}

impl Choice {
    /// Every throw, in the order the opponent draws from
    pub const ALL: [Choice; 3] = [Choice::Stone, Choice::Paper, Choice::Scissor];

    /// The throw this one defeats
    pub fn beats(self) -> Choice {
        match self {
            Choice::Stone => Choice::Scissor,
            Choice::Scissor => Choice::Paper,
            Choice::Paper => Choice::Stone,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Choice::Stone => "stone",
            Choice::Paper => "paper",
            Choice::Scissor => "scissor",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stone" | "rock" | "r" => Ok(Choice::Stone),
            "paper" | "p" => Ok(Choice::Paper),
            "scissor" | "scissors" | "s" => Ok(Choice::Scissor),
            _ => Err(crate::Error::InvalidChoice {
                input: s.to_string(),
            }),
        }
    }
}
