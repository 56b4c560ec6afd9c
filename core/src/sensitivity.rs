//! How close an outcome is to flipping.
//!
//! Two views:
//!   1. Stability margin: for each equilibrium, how much each player would
//!      lose by deviating. Zero means the player is indifferent.
//!   2. Perturbation study: seeded random noise on every cell, counting how
//!      often the set of equilibrium cells survives.

use crate::{
    rng::StudyRng,
    solver::{find_pure_equilibria, EquilibriumResult},
    types::{PayoffMatrix, StrategyIndex, STRATEGY_COUNT},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityMargin {
    pub us_index:    StrategyIndex,
    pub india_index: StrategyIndex,
    pub us:          f64,
    pub india:       f64,
}

impl StabilityMargin {
    /// The smaller of the two players' margins.
    pub fn min(&self) -> f64 {
        self.us.min(self.india)
    }
}

/// Payoff of each player at `eq` minus its best alternative payoff.
pub fn stability_margin(
    us: &PayoffMatrix,
    india: &PayoffMatrix,
    eq: &EquilibriumResult,
) -> StabilityMargin {
    let (i, j) = eq.position();

    let us_alt = (0..STRATEGY_COUNT)
        .filter(|&k| k != i)
        .map(|k| us.get(k, j))
        .fold(f64::NEG_INFINITY, f64::max);
    let india_alt = (0..STRATEGY_COUNT)
        .filter(|&k| k != j)
        .map(|k| india.get(i, k))
        .fold(f64::NEG_INFINITY, f64::max);

    StabilityMargin {
        us_index:    i,
        india_index: j,
        us:          us.get(i, j) - us_alt,
        india:       india.get(i, j) - india_alt,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerturbationStudy {
    pub trials:    u32,
    /// Half-width of the uniform noise added to each cell. Sign is ignored.
    pub magnitude: f64,
    pub seed:      u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerturbationOutcome {
    pub trials:          u32,
    pub preserved:       u32,
    pub preserved_share: f64,
}

impl PerturbationStudy {
    pub fn new(trials: u32, magnitude: f64, seed: u64) -> Self {
        Self { trials, magnitude, seed }
    }

    /// Run the study on one pair of matrices. `stream` selects the RNG
    /// stream; use the scenario's position so results do not depend on
    /// which other scenarios ran.
    pub fn run(&self, us: &PayoffMatrix, india: &PayoffMatrix, stream: u64) -> PerturbationOutcome {
        let reference = positions(&find_pure_equilibria(us, india));
        let magnitude = self.magnitude.abs();
        let mut rng = StudyRng::new(self.seed, stream);

        let mut preserved = 0;
        for _ in 0..self.trials {
            let us_noisy = perturb(us, magnitude, &mut rng);
            let india_noisy = perturb(india, magnitude, &mut rng);
            if positions(&find_pure_equilibria(&us_noisy, &india_noisy)) == reference {
                preserved += 1;
            }
        }

        let preserved_share = if self.trials == 0 {
            1.0
        } else {
            preserved as f64 / self.trials as f64
        };
        log::debug!(
            "perturbation stream={stream} magnitude={magnitude:.3}: {preserved}/{} preserved",
            self.trials
        );

        PerturbationOutcome { trials: self.trials, preserved, preserved_share }
    }
}

fn perturb(matrix: &PayoffMatrix, magnitude: f64, rng: &mut StudyRng) -> PayoffMatrix {
    let mut noise = PayoffMatrix::zeros();
    for i in 0..STRATEGY_COUNT {
        for j in 0..STRATEGY_COUNT {
            noise.add(i, j, rng.symmetric(magnitude));
        }
    }
    matrix.plus(&noise)
}

fn positions(equilibria: &[EquilibriumResult]) -> Vec<(StrategyIndex, StrategyIndex)> {
    equilibria.iter().map(EquilibriumResult::position).collect()
}
