use rand::{Rng, SeedableRng, rngs::StdRng};

/// Where the sampler gets its indices from.
pub trait RandomSource {
    /// Uniform index in `0..upper`. Callers never pass `upper == 0`.
    fn index(&mut self, upper: usize) -> usize;

    /// Called once before every draw.
    fn reseed(&mut self) {}
}

/// Production source: a fresh `StdRng` per draw, seeded from the
/// thread-local OS-seeded generator.
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }

    fn reseed(&mut self) {
        self.rng = StdRng::from_rng(&mut rand::rng());
    }
}

/// Reproducible source. Seeded once; `reseed` is a no-op so the whole run
/// follows from the seed.
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn index(&mut self, upper: usize) -> usize {
        (**self).index(upper)
    }

    fn reseed(&mut self) {
        (**self).reseed()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn index(&mut self, upper: usize) -> usize {
        (**self).index(upper)
    }

    fn reseed(&mut self) {
        (**self).reseed()
    }
}
