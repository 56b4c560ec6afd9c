//! Deterministic random number generation for perturbation studies.
//!
//! RULE: Nothing in the engine may call any platform RNG.
//! All randomness flows through StudyRng instances derived from one
//! master seed. Each scenario gets its own stream, seeded from
//! (master_seed XOR scaled stream index), so adding a scenario never
//! changes the draws of the scenarios before it.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A deterministic RNG stream for one study.
pub struct StudyRng {
    inner: Pcg64Mcg,
}

impl StudyRng {
    pub fn new(master_seed: u64, stream_index: u64) -> Self {
        let derived_seed = master_seed ^ (stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a float in [-magnitude, magnitude).
    pub fn symmetric(&mut self, magnitude: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * magnitude
    }
}
