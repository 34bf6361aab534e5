//! Uniformly random opponent backed by `rand`'s `StdRng`.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{ports::ChoiceSource, rps::Choice};

/// Draws each throw uniformly and independently.
///
/// Seed it for reproducible sessions; otherwise it is seeded from the
/// operating system.
///
/// # Examples
///
/// ```
/// use parlor::{adapters::RandomChoices, ports::ChoiceSource};
///
/// let mut a = RandomChoices::with_seed(7);
/// let mut b = RandomChoices::with_seed(7);
/// assert_eq!(a.draw(), b.draw());
/// ```
pub struct RandomChoices {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomChoices {
    /// Create a source seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Create a deterministic source
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Seeded when `seed` is given, entropy-backed otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for RandomChoices {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoiceSource for RandomChoices {
    fn draw(&mut self) -> Choice {
        Choice::ALL[self.rng.random_range(0..Choice::ALL.len())]
    }

    fn name(&self) -> &str {
        "random"
    }
}
