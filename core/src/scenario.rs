//! Scenario runner — interventions in, structured records out.
//!
//! A record carries everything the reporter needs and nothing it has to
//! recompute. No formatting or printing happens here.

use crate::{
    config::GameConfig,
    error::{GameError, GameResult},
    intervention::{InterventionEngine, InterventionFlag, InterventionSet},
    payoff_model::PayoffModel,
    sensitivity::{stability_margin, StabilityMargin},
    solver::{dominance, find_mixed_equilibrium, find_pure_equilibria, EquilibriumResult, MixedEquilibrium},
    types::{PayoffMatrix, Player, StrategyIndex},
};
use serde::{Deserialize, Serialize};

/// A named, fixed combination of interventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name:  String,
    pub flags: InterventionSet,
}

impl Scenario {
    pub fn new(name: impl Into<String>, flags: impl IntoIterator<Item = InterventionFlag>) -> Self {
        Self { name: name.into(), flags: flags.into_iter().collect() }
    }

    pub fn baseline() -> Self {
        Self::new("Baseline", InterventionSet::new())
    }
}

/// Baseline, each intervention alone, then all four together.
pub fn standard_scenarios() -> Vec<Scenario> {
    let mut scenarios = vec![Scenario::baseline()];
    scenarios.extend(
        InterventionFlag::ALL
            .iter()
            .map(|flag| Scenario::new(format!("+ {}", flag.label()), [*flag])),
    );
    scenarios.push(Scenario::new("Full Strategy Package", InterventionFlag::ALL));
    scenarios
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub scenario_name:     String,
    pub flags:             InterventionSet,
    pub us_matrix:         PayoffMatrix,
    pub india_matrix:      PayoffMatrix,
    pub equilibria:        Vec<EquilibriumResult>,
    pub dominant_us:       Option<String>,
    pub dominant_india:    Option<String>,
    pub mixed_equilibrium: Option<MixedEquilibrium>,
    /// One entry per equilibrium, same order.
    pub stability:         Vec<StabilityMargin>,
}

impl ScenarioRecord {
    pub fn has_unique_equilibrium(&self) -> bool {
        self.equilibria.len() == 1
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: InterventionEngine,
}

impl ScenarioRunner {
    pub fn new(engine: InterventionEngine) -> Self {
        Self { engine }
    }

    /// Model and delta table both taken from `config`.
    pub fn from_config(config: &GameConfig) -> GameResult<Self> {
        let model = PayoffModel::from_config(config)?;
        let engine = InterventionEngine::with_deltas(model, config.delta_table()?)?;
        Ok(Self::new(engine))
    }

    pub fn engine(&self) -> &InterventionEngine {
        &self.engine
    }

    pub fn run(&self, scenario: &Scenario) -> ScenarioRecord {
        let (us, india) = self.engine.apply(&scenario.flags);
        let equilibria = find_pure_equilibria(&us, &india);
        let dominant = dominance(&us, &india);
        let stability = equilibria
            .iter()
            .map(|eq| stability_margin(&us, &india, eq))
            .collect();

        match equilibria.len() {
            0 => log::warn!("scenario '{}': no pure equilibrium", scenario.name),
            1 => log::debug!("scenario '{}': equilibrium {:?}", scenario.name, equilibria[0]),
            n => log::warn!("scenario '{}': {n} pure equilibria (payoff ties)", scenario.name),
        }

        ScenarioRecord {
            scenario_name:     scenario.name.clone(),
            flags:             scenario.flags.clone(),
            us_matrix:         us,
            india_matrix:      india,
            dominant_us:       self.label(Player::Us, dominant.us),
            dominant_india:    self.label(Player::India, dominant.india),
            mixed_equilibrium: find_mixed_equilibrium(&us, &india),
            equilibria,
            stability,
        }
    }

    /// One record per scenario, in input order.
    pub fn run_all(&self, scenarios: &[Scenario]) -> Vec<ScenarioRecord> {
        scenarios.iter().map(|s| self.run(s)).collect()
    }

    /// Run the scenario called `name` from `scenarios`.
    pub fn run_named(&self, scenarios: &[Scenario], name: &str) -> GameResult<ScenarioRecord> {
        scenarios
            .iter()
            .find(|s| s.name == name)
            .map(|s| self.run(s))
            .ok_or_else(|| GameError::UnknownScenario { name: name.to_string() })
    }

    fn label(&self, player: Player, index: Option<StrategyIndex>) -> Option<String> {
        index.map(|i| self.engine.model().strategies(player)[i].clone())
    }
}
