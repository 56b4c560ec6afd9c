//! Policy interventions and the engine that applies them.
//!
//! RULES:
//!   - The baseline is never mutated. Every apply() returns fresh copies.
//!   - Deltas for all active flags are summed into a per-cell accumulator
//!     in canonical flag order, then added to the baseline once. The result
//!     is identical for any ordering of the same flag set.

use crate::{
    error::{GameError, GameResult},
    payoff_model::{IndiaStrategy, PayoffModel, UsStrategy},
    types::{PayoffMatrix, Player, StrategyIndex, STRATEGY_COUNT},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A discrete policy lever. Ordering is the canonical application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionFlag {
    Incentives,
    Retaliation,
    Fragmentation,
    DigitalDollar,
}

/// The set of active interventions for one call.
pub type InterventionSet = BTreeSet<InterventionFlag>;

impl InterventionFlag {
    pub const ALL: [InterventionFlag; 4] = [
        Self::Incentives,
        Self::Retaliation,
        Self::Fragmentation,
        Self::DigitalDollar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Incentives    => "incentives",
            Self::Retaliation   => "retaliation",
            Self::Fragmentation => "fragmentation",
            Self::DigitalDollar => "digital_dollar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Incentives    => "Positive Incentives",
            Self::Retaliation   => "Credible Retaliation",
            Self::Fragmentation => "BRICS Fragmentation",
            Self::DigitalDollar => "Digital Dollar",
        }
    }

    /// Built-in cell adjustments for this flag.
    pub fn default_deltas(&self) -> Vec<CellDelta> {
        use IndiaStrategy::*;
        use UsStrategy::*;
        match self {
            // Tech and defense access make the status quo pay under cooperation.
            Self::Incentives => vec![CellDelta::india(CooperativeTrade, MaintainStatusQuo, 0.4)],
            Self::Retaliation => vec![CellDelta::india(CooperativeTrade, Accelerate, -0.3)],
            // Less collective power behind de-dollarization.
            Self::Fragmentation => vec![
                CellDelta::india(AggressiveTariffs, Accelerate, -0.5),
                CellDelta::india(CooperativeTrade, Accelerate, -0.3),
            ],
            // Higher transition cost out of the dollar, whatever the US does.
            Self::DigitalDollar => vec![
                CellDelta::india(AggressiveTariffs, Accelerate, -0.3),
                CellDelta::india(CooperativeTrade, Accelerate, -0.3),
            ],
        }
    }
}

/// An additive adjustment to one cell of one player's matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellDelta {
    pub player: Player,
    pub row:    StrategyIndex,
    pub col:    StrategyIndex,
    pub delta:  f64,
}

impl CellDelta {
    pub fn india(row: UsStrategy, col: IndiaStrategy, delta: f64) -> Self {
        Self { player: Player::India, row: row.index(), col: col.index(), delta }
    }

    pub(crate) fn validate(&self) -> GameResult<()> {
        for (player, index) in [(Player::Us, self.row), (Player::India, self.col)] {
            if index >= STRATEGY_COUNT {
                return Err(GameError::PlayerIndexOutOfRange {
                    player,
                    index,
                    count: STRATEGY_COUNT,
                });
            }
        }
        Ok(())
    }
}

/// Applies intervention sets to a baseline model.
#[derive(Debug, Clone)]
pub struct InterventionEngine {
    model:  PayoffModel,
    deltas: BTreeMap<InterventionFlag, Vec<CellDelta>>,
}

impl InterventionEngine {
    /// Engine over `model` with the built-in delta table.
    pub fn new(model: PayoffModel) -> Self {
        let deltas = InterventionFlag::ALL
            .iter()
            .map(|flag| (*flag, flag.default_deltas()))
            .collect();
        Self { model, deltas }
    }

    /// Engine with a caller-supplied delta table. Flags missing from the
    /// table have no effect.
    pub fn with_deltas(
        model: PayoffModel,
        deltas: BTreeMap<InterventionFlag, Vec<CellDelta>>,
    ) -> GameResult<Self> {
        for delta in deltas.values().flatten() {
            delta.validate()?;
        }
        Ok(Self { model, deltas })
    }

    pub fn model(&self) -> &PayoffModel {
        &self.model
    }

    pub fn deltas_for(&self, flag: InterventionFlag) -> &[CellDelta] {
        self.deltas.get(&flag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Summed deltas for `flags`, as (US, India) accumulator matrices.
    pub fn accumulate(&self, flags: &InterventionSet) -> (PayoffMatrix, PayoffMatrix) {
        let mut us_acc = PayoffMatrix::zeros();
        let mut india_acc = PayoffMatrix::zeros();

        for flag in flags {
            for d in self.deltas_for(*flag) {
                let acc = match d.player {
                    Player::Us    => &mut us_acc,
                    Player::India => &mut india_acc,
                };
                acc.add(d.row, d.col, d.delta);
            }
        }
        (us_acc, india_acc)
    }

    /// Adjusted (US, India) matrices for `flags`.
    pub fn apply(&self, flags: &InterventionSet) -> (PayoffMatrix, PayoffMatrix) {
        if flags.is_empty() {
            return (*self.model.us_payoffs(), *self.model.india_payoffs());
        }

        let (us_acc, india_acc) = self.accumulate(flags);
        log::debug!(
            "interventions {:?}: us_acc={:?} india_acc={:?}",
            flags.iter().map(|f| f.name()).collect::<Vec<_>>(),
            us_acc.rows(),
            india_acc.rows()
        );

        (
            self.model.us_payoffs().plus(&us_acc),
            self.model.india_payoffs().plus(&india_acc),
        )
    }
}

impl Default for InterventionEngine {
    fn default() -> Self { Self::new(PayoffModel::new()) }
}
