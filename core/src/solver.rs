//! Equilibrium and dominance checks over 2×2 payoff matrices.
//!
//! Everything here is a pure function of its inputs. Comparisons are exact:
//! a deviation with an equal payoff does not disqualify a best response.

use crate::types::{PayoffMatrix, Player, StrategyIndex, STRATEGY_COUNT};
use serde::{Deserialize, Serialize};

/// One pure-strategy Nash equilibrium cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumResult {
    pub us_index:     StrategyIndex,
    pub india_index:  StrategyIndex,
    pub us_payoff:    f64,
    pub india_payoff: f64,
}

impl EquilibriumResult {
    pub fn position(&self) -> (StrategyIndex, StrategyIndex) {
        (self.us_index, self.india_index)
    }
}

/// Dominant strategy per player, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DominanceResult {
    pub us:    Option<StrategyIndex>,
    pub india: Option<StrategyIndex>,
}

/// A fully mixed equilibrium of a 2×2 game.
/// `us_mix[k]` is the probability the US plays strategy k; same for India.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixedEquilibrium {
    pub us_mix:       [f64; STRATEGY_COUNT],
    pub india_mix:    [f64; STRATEGY_COUNT],
    pub us_value:     f64,
    pub india_value:  f64,
}

/// All pure-strategy Nash equilibria, in row-major scan order.
pub fn find_pure_equilibria(us: &PayoffMatrix, india: &PayoffMatrix) -> Vec<EquilibriumResult> {
    let mut equilibria = Vec::new();
    for i in 0..STRATEGY_COUNT {
        for j in 0..STRATEGY_COUNT {
            let us_val = us.get(i, j);
            let india_val = india.get(i, j);

            let us_br = (0..STRATEGY_COUNT).all(|k| us.get(k, j) <= us_val);
            let india_br = (0..STRATEGY_COUNT).all(|k| india.get(i, k) <= india_val);

            if us_br && india_br {
                equilibria.push(EquilibriumResult {
                    us_index:     i,
                    india_index:  j,
                    us_payoff:    us_val,
                    india_payoff: india_val,
                });
            }
        }
    }
    equilibria
}

/// Every strategy of `player` that maximizes its payoff against `opponent`.
pub fn best_response(
    matrix: &PayoffMatrix,
    player: Player,
    opponent: StrategyIndex,
) -> Vec<StrategyIndex> {
    let best = (0..STRATEGY_COUNT)
        .map(|s| matrix.payoff_for(player, s, opponent))
        .fold(f64::NEG_INFINITY, f64::max);
    (0..STRATEGY_COUNT)
        .filter(|&s| matrix.payoff_for(player, s, opponent) >= best)
        .collect()
}

/// `s` dominates `alt`: never worse, strictly better at least once.
fn dominates(matrix: &PayoffMatrix, player: Player, s: StrategyIndex, alt: StrategyIndex) -> bool {
    let mut strictly_better = false;
    for opp in 0..STRATEGY_COUNT {
        let mine = matrix.payoff_for(player, s, opp);
        let theirs = matrix.payoff_for(player, alt, opp);
        if mine < theirs {
            return false;
        }
        strictly_better |= mine > theirs;
    }
    strictly_better
}

/// First strategy of `player` that dominates every alternative.
pub fn find_dominant_strategy(matrix: &PayoffMatrix, player: Player) -> Option<StrategyIndex> {
    (0..STRATEGY_COUNT).find(|&s| {
        (0..STRATEGY_COUNT)
            .filter(|&alt| alt != s)
            .all(|alt| dominates(matrix, player, s, alt))
    })
}

pub fn dominance(us: &PayoffMatrix, india: &PayoffMatrix) -> DominanceResult {
    DominanceResult {
        us:    find_dominant_strategy(us, Player::Us),
        india: find_dominant_strategy(india, Player::India),
    }
}

/// Solve the two indifference conditions of a 2×2 game.
///
/// The US mix makes India indifferent between its columns and India's mix
/// makes the US indifferent between its rows. Returns `None` when either
/// condition is degenerate or a probability falls outside [0, 1].
pub fn find_mixed_equilibrium(us: &PayoffMatrix, india: &PayoffMatrix) -> Option<MixedEquilibrium> {
    let u = us.rows();
    let b = india.rows();

    let us_denom = u[0][0] - u[0][1] - u[1][0] + u[1][1];
    let india_denom = b[0][0] - b[1][0] - b[0][1] + b[1][1];
    if us_denom.abs() < f64::EPSILON || india_denom.abs() < f64::EPSILON {
        return None;
    }

    // q: India plays column 0. p: US plays row 0.
    let q = (u[1][1] - u[0][1]) / us_denom;
    let p = (b[1][1] - b[1][0]) / india_denom;
    if !(0.0..=1.0).contains(&p) || !(0.0..=1.0).contains(&q) {
        return None;
    }

    Some(MixedEquilibrium {
        us_mix:      [p, 1.0 - p],
        india_mix:   [q, 1.0 - q],
        us_value:    q * u[0][0] + (1.0 - q) * u[0][1],
        india_value: p * b[0][0] + (1.0 - p) * b[1][0],
    })
}
