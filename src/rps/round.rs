//! Outcome of a single round and the running score

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Choice;

/// Result of one round from the user's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    Tie,
    UserWin,
    OpponentWin,
}

/// Decide a round from both throws
pub fn resolve(user: Choice, opponent: Choice) -> RoundOutcome {
    if user == opponent {
        RoundOutcome::Tie
    } else if user.beats() == opponent {
        RoundOutcome::UserWin
    } else {
        RoundOutcome::OpponentWin
    }
}

/// Wins per side. Ties count for nobody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub user: u32,
    pub opponent: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit the winner of a round
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Tie => {}
            RoundOutcome::UserWin => self.user = self.user.saturating_add(1),
            RoundOutcome::OpponentWin => self.opponent = self.opponent.saturating_add(1),
        }
    }

    /// Rounds that produced a winner
    pub fn decided(&self) -> u32 {
        self.user.saturating_add(self.opponent)
    }
}

/// A played round: both throws, the outcome and the score after it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub user: Choice,
    pub opponent: Choice,
    pub outcome: RoundOutcome,
    pub scores: Scoreboard,
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = match self.outcome {
            RoundOutcome::Tie => "It's a tie!",
            RoundOutcome::UserWin => "You win!",
            RoundOutcome::OpponentWin => "Computer wins!",
        };
        write!(
            f,
            "You chose {} and computer chose {}. {verdict}",
            self.user, self.opponent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_full_table() {
        for user in Choice::ALL {
            for opponent in Choice::ALL {
                let expected = if user == opponent {
                    RoundOutcome::Tie
                } else if user.beats() == opponent {
                    RoundOutcome::UserWin
                } else {
                    assert_eq!(opponent.beats(), user);
                    RoundOutcome::OpponentWin
                };
                assert_eq!(resolve(user, opponent), expected, "{user} vs {opponent}");
            }
        }
    }

    #[test]
    fn test_named_matchups() {
        assert_eq!(resolve(Choice::Stone, Choice::Scissor), RoundOutcome::UserWin);
        assert_eq!(resolve(Choice::Paper, Choice::Stone), RoundOutcome::UserWin);
        assert_eq!(resolve(Choice::Scissor, Choice::Paper), RoundOutcome::UserWin);
        assert_eq!(resolve(Choice::Scissor, Choice::Stone), RoundOutcome::OpponentWin);
        assert_eq!(resolve(Choice::Paper, Choice::Paper), RoundOutcome::Tie);
    }

    #[test]
    fn test_scoreboard_records_only_winners() {
        let mut scores = Scoreboard::new();
        scores.record(RoundOutcome::Tie);
        assert_eq!(scores, Scoreboard::default());

        scores.record(RoundOutcome::UserWin);
        scores.record(RoundOutcome::OpponentWin);
        scores.record(RoundOutcome::UserWin);
        assert_eq!(scores.user, 2);
        assert_eq!(scores.opponent, 1);
        assert_eq!(scores.decided(), 3);
    }

    #[test]
    fn test_decided_saturates_at_max() {
        let mut scores = Scoreboard {
            user: u32::MAX,
            opponent: 0,
        };
        scores.record(RoundOutcome::UserWin);
        scores.record(RoundOutcome::OpponentWin);

        assert_eq!(scores.user, u32::MAX);
        assert_eq!(scores.opponent, 1);
        assert_eq!(scores.decided(), u32::MAX);
    }

    #[test]
    fn test_round_sentence() {
        let round = Round {
            user: Choice::Stone,
            opponent: Choice::Scissor,
            outcome: RoundOutcome::UserWin,
            scores: Scoreboard { user: 1, opponent: 0 },
        };
        assert_eq!(
            round.to_string(),
            "You chose stone and computer chose scissor. You win!"
        );
    }
}
