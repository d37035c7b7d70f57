use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for a single game session, so bot matches can be replayed
/// from the seed alone.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(42);
        let mut b = SessionRng::new(42);

        for _ in 0..20 {
            assert_eq!(
                a.random_range(0..1000usize),
                b.random_range(0..1000usize)
            );
        }
    }

    #[test]
    fn test_seed_is_exposed() {
        let rng = SessionRng::new(7);
        assert_eq!(rng.seed(), 7);
    }
}
