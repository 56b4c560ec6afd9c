//! Shared primitive types used across the game engine.

use serde::{Deserialize, Serialize};

/// Index of a strategy in a player's label list.
pub type StrategyIndex = usize;

/// Every player has exactly this many strategies.
pub const STRATEGY_COUNT: usize = 2;

/// The two players. The US picks the row, India picks the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    Us,
    India,
}

impl Player {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Us    => "US",
            Self::India => "India",
        }
    }
}

/// A 2×2 payoff grid for one player, indexed (US strategy, India strategy).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayoffMatrix(pub [[f64; STRATEGY_COUNT]; STRATEGY_COUNT]);

impl PayoffMatrix {
    pub const fn new(cells: [[f64; STRATEGY_COUNT]; STRATEGY_COUNT]) -> Self {
        Self(cells)
    }

    pub const fn zeros() -> Self {
        Self([[0.0; STRATEGY_COUNT]; STRATEGY_COUNT])
    }

    pub fn get(&self, us: StrategyIndex, india: StrategyIndex) -> f64 {
        self.0[us][india]
    }

    pub fn add(&mut self, us: StrategyIndex, india: StrategyIndex, delta: f64) {
        self.0[us][india] += delta;
    }

    /// Cell-wise sum, returned as a new matrix.
    pub fn plus(&self, other: &PayoffMatrix) -> PayoffMatrix {
        let mut out = *self;
        for (us, row) in other.0.iter().enumerate() {
            for (india, delta) in row.iter().enumerate() {
                out.0[us][india] += delta;
            }
        }
        out
    }

    /// Payoff seen by `player` when it plays `own` and the opponent plays `other`.
    pub fn payoff_for(&self, player: Player, own: StrategyIndex, other: StrategyIndex) -> f64 {
        match player {
            Player::Us    => self.0[own][other],
            Player::India => self.0[other][own],
        }
    }

    pub fn rows(&self) -> &[[f64; STRATEGY_COUNT]; STRATEGY_COUNT] {
        &self.0
    }
}
