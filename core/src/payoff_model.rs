//! Baseline payoffs for the US / India currency game.
//!
//! Values are in trillions of USD. Rows are US strategies, columns are
//! India strategies, for both players' matrices.

use crate::{
    config::GameConfig,
    error::{GameError, GameResult},
    types::{PayoffMatrix, Player, StrategyIndex, STRATEGY_COUNT},
};
use serde::{Deserialize, Serialize};

pub const US_STRATEGIES: [&str; STRATEGY_COUNT] = ["Aggressive Tariffs", "Cooperative Trade"];
pub const INDIA_STRATEGIES: [&str; STRATEGY_COUNT] =
    ["Accelerate De-dollarization", "Maintain Status Quo"];

pub const BASE_US_PAYOFFS: PayoffMatrix = PayoffMatrix::new([
    [-3.2, 0.1], // Aggressive Tariffs
    [-0.8, 1.5], // Cooperative Trade
]);

pub const BASE_INDIA_PAYOFFS: PayoffMatrix = PayoffMatrix::new([
    [2.5, -0.125], // US Aggressive
    [0.8, 0.5],    // US Cooperative
]);

/// US row strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsStrategy {
    AggressiveTariffs = 0,
    CooperativeTrade  = 1,
}

impl UsStrategy {
    pub fn index(self) -> StrategyIndex {
        self as StrategyIndex
    }
}

/// India column strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndiaStrategy {
    Accelerate        = 0,
    MaintainStatusQuo = 1,
}

impl IndiaStrategy {
    pub fn index(self) -> StrategyIndex {
        self as StrategyIndex
    }
}

/// Immutable baseline matrices and strategy labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffModel {
    us_payoffs:       PayoffMatrix,
    india_payoffs:    PayoffMatrix,
    us_strategies:    [String; STRATEGY_COUNT],
    india_strategies: [String; STRATEGY_COUNT],
}

impl PayoffModel {
    pub fn new() -> Self {
        Self {
            us_payoffs:       BASE_US_PAYOFFS,
            india_payoffs:    BASE_INDIA_PAYOFFS,
            us_strategies:    US_STRATEGIES.map(String::from),
            india_strategies: INDIA_STRATEGIES.map(String::from),
        }
    }

    /// Build the baseline from a loaded config. Fails on non-2×2 matrices.
    pub fn from_config(config: &GameConfig) -> GameResult<Self> {
        Ok(Self {
            us_payoffs:       config.us_matrix()?,
            india_payoffs:    config.india_matrix()?,
            us_strategies:    config.us_strategies.clone(),
            india_strategies: config.india_strategies.clone(),
        })
    }

    pub fn us_payoffs(&self) -> &PayoffMatrix {
        &self.us_payoffs
    }

    pub fn india_payoffs(&self) -> &PayoffMatrix {
        &self.india_payoffs
    }

    pub fn baseline(&self, player: Player) -> &PayoffMatrix {
        match player {
            Player::Us    => &self.us_payoffs,
            Player::India => &self.india_payoffs,
        }
    }

    pub fn strategies(&self, player: Player) -> &[String; STRATEGY_COUNT] {
        match player {
            Player::Us    => &self.us_strategies,
            Player::India => &self.india_strategies,
        }
    }

    pub fn strategy_label(&self, player: Player, index: StrategyIndex) -> GameResult<&str> {
        self.strategies(player)
            .get(index)
            .map(String::as_str)
            .ok_or(GameError::PlayerIndexOutOfRange {
                player,
                index,
                count: STRATEGY_COUNT,
            })
    }
}

impl Default for PayoffModel {
    fn default() -> Self { Self::new() }
}
