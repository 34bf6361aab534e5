//! Round-by-round play with a running tally

use log::debug;

use super::{Choice, Round, Scoreboard, resolve};
use crate::{adapters::RandomChoices, ports::ChoiceSource};

/// Plays rounds against an opponent drawn from `S`.
///
/// The tally only grows; a fresh resolver is the only way to start over.
pub struct Resolver<S = RandomChoices> {
    source: S,
    scores: Scoreboard,
    rounds: u32,
}

impl Resolver<RandomChoices> {
    /// Resolver against a uniformly random opponent
    pub fn random(seed: Option<u64>) -> Self {
        Self::new(RandomChoices::from_seed(seed))
    }
}

impl<S: ChoiceSource> Resolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            scores: Scoreboard::new(),
            rounds: 0,
        }
    }

    /// Draw the opponent's throw, decide the round and update the tally.
    pub fn play(&mut self, user: Choice) -> Round {
        let opponent = self.source.draw();
        let outcome = resolve(user, opponent);
        self.scores.record(outcome);
        self.rounds = self.rounds.saturating_add(1);

        debug!(
            "round {}: user={user} opponent={opponent} -> {outcome:?}",
            self.rounds
        );

        Round {
            user,
            opponent,
            outcome,
            scores: self.scores,
        }
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Rounds played so far, ties included
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapters::ScriptedChoices, rps::RoundOutcome};

    #[test]
    fn test_stone_beats_forced_scissor() {
        let mut resolver = Resolver::new(ScriptedChoices::always(Choice::Scissor));
        let round = resolver.play(Choice::Stone);

        assert_eq!(round.opponent, Choice::Scissor);
        assert_eq!(round.outcome, RoundOutcome::UserWin);
        assert_eq!(round.scores, Scoreboard { user: 1, opponent: 0 });
    }

    #[test]
    fn test_paper_ties_forced_paper() {
        let mut resolver = Resolver::new(ScriptedChoices::always(Choice::Paper));
        let round = resolver.play(Choice::Paper);

        assert_eq!(round.outcome, RoundOutcome::Tie);
        assert_eq!(resolver.scores(), Scoreboard::default());
        assert_eq!(resolver.rounds(), 1);
    }

    #[test]
    fn test_opponent_win_credits_opponent() {
        let mut resolver = Resolver::new(ScriptedChoices::always(Choice::Paper));
        let round = resolver.play(Choice::Stone);

        assert_eq!(round.outcome, RoundOutcome::OpponentWin);
        assert_eq!(round.scores, Scoreboard { user: 0, opponent: 1 });
        assert_eq!(
            round.to_string(),
            "You chose stone and computer chose paper. Computer wins!"
        );
    }

    #[test]
    fn test_seeded_resolvers_agree() {
        let mut a = Resolver::random(Some(9));
        let mut b = Resolver::random(Some(9));
        for user in Choice::ALL.iter().cycle().take(30) {
            assert_eq!(a.play(*user), b.play(*user));
        }
        assert_eq!(a.source().name(), "random");
    }
}
