use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of randomness for reply selection and typing delays.
pub trait RandomSource: Send {
    /// Uniform index in `0..upper`. `upper` is never zero.
    fn index(&mut self, upper: usize) -> usize;

    /// Uniform value in the inclusive range `min..=max`.
    fn between(&mut self, min: u64, max: u64) -> u64;
}

impl dyn RandomSource + '_ {
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        match items.len() {
            0 => None,
            len => items.get(self.index(len)),
        }
    }
}

pub struct ThreadRandom {
    rng: StdRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }

    fn between(&mut self, min: u64, max: u64) -> u64 {
        self.rng.random_range(min..=max)
    }
}

/// Always picks the same position.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRandom {
    pub index: usize,
}

#[cfg(test)]
impl RandomSource for FixedRandom {
    fn index(&mut self, upper: usize) -> usize {
        self.index.min(upper - 1)
    }

    fn between(&mut self, min: u64, _max: u64) -> u64 {
        min
    }
}
