use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bounded noise source used for the power-on drift offset.
///
/// sample(bound_g) returns a value in [-bound_g, +bound_g] grams.
pub trait Noise {
    fn sample(&mut self, bound_g: f32) -> f32;
}

/// Default uniform noise source, optionally seeded for reproducible runs.
#[derive(Debug, Clone)]
pub struct UniformNoise {
    rng: StdRng,
}

impl UniformNoise {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl Noise for UniformNoise {
    fn sample(&mut self, bound_g: f32) -> f32 {
        if !(bound_g.is_finite() && bound_g > 0.0) {
            return 0.0;
        }
        self.rng.gen_range(-bound_g..=bound_g)
    }
}

/// Noise source that always returns the same value; for deterministic tests
/// and scripted runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedNoise(pub f32);

impl Noise for FixedNoise {
    fn sample(&mut self, bound_g: f32) -> f32 {
        self.0.clamp(-bound_g.abs(), bound_g.abs())
    }
}
