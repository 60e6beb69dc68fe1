use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

/// Source of the random draws behind the AI's coin flips.
///
/// Every draw carries a short reason so scripted test runs can be traced.
pub trait RandomSource {
    fn next_random(&mut self, reason: &str) -> u16;
}

/// Random source backed by a seedable PRNG.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when a seed is given, OS entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_random(&mut self, reason: &str) -> u16 {
        let value: u16 = self.rng.random();
        trace!(value, reason, "rng draw");
        value
    }
}

/// Replays a fixed list of outcomes. Panics once the list runs out so a test
/// that consumes more draws than it scripted fails loudly.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    outcomes: Vec<u16>,
    index: usize,
}

impl ScriptedRandom {
    pub fn new_for_test(outcomes: Vec<u16>) -> Self {
        Self { outcomes, index: 0 }
    }

    /// Number of outcomes consumed so far.
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl RandomSource for ScriptedRandom {
    fn next_random(&mut self, reason: &str) -> u16 {
        let Some(&outcome) = self.outcomes.get(self.index) else {
            panic!(
                "ScriptedRandom exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        };
        trace!(outcome, reason, "scripted rng draw");
        self.index += 1;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        let first: Vec<u16> = (0..8).map(|_| a.next_random("test")).collect();
        let second: Vec<u16> = (0..8).map(|_| b.next_random("test")).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scripted_random_replays_in_order() {
        let mut rng = ScriptedRandom::new_for_test(vec![3, 1, 4]);
        assert_eq!(rng.next_random("a"), 3);
        assert_eq!(rng.next_random("b"), 1);
        assert_eq!(rng.next_random("c"), 4);
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    #[should_panic(expected = "ScriptedRandom exhausted")]
    fn test_scripted_random_panics_when_exhausted() {
        let mut rng = ScriptedRandom::new_for_test(vec![]);
        rng.next_random("nothing scripted");
    }
}
