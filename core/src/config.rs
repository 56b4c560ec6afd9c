use crate::{
    error::{GameError, GameResult},
    intervention::{CellDelta, InterventionFlag},
    payoff_model::{BASE_INDIA_PAYOFFS, BASE_US_PAYOFFS, INDIA_STRATEGIES, US_STRATEGIES},
    scenario::{standard_scenarios, Scenario},
    types::{PayoffMatrix, STRATEGY_COUNT},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CONFIG_FILE: &str = "currency_game.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterventionConfig {
    pub flag:   InterventionFlag,
    pub deltas: Vec<CellDelta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name:  String,
    #[serde(default)]
    pub flags: Vec<InterventionFlag>,
}

/// Everything needed to build a model, an engine and a scenario list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub us_strategies:    [String; STRATEGY_COUNT],
    pub india_strategies: [String; STRATEGY_COUNT],
    pub us_payoffs:       Vec<Vec<f64>>,
    pub india_payoffs:    Vec<Vec<f64>>,
    pub interventions:    Vec<InterventionConfig>,
    #[serde(default)]
    pub scenarios:        Vec<ScenarioConfig>,
}

impl GameConfig {
    /// Load from the data/ directory and validate.
    /// In tests, use GameConfig::default_game().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/{CONFIG_FILE}");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = Self::from_json(&content)?;
        log::debug!(
            "loaded {path}: {} interventions, {} scenarios",
            config.interventions.len(),
            config.scenarios.len()
        );
        Ok(config)
    }

    pub fn from_json(content: &str) -> GameResult<Self> {
        let config: GameConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The built-in game: baseline constants, the four interventions and
    /// the six standard scenarios.
    pub fn default_game() -> Self {
        Self {
            us_strategies:    US_STRATEGIES.map(String::from),
            india_strategies: INDIA_STRATEGIES.map(String::from),
            us_payoffs:       to_rows(&BASE_US_PAYOFFS),
            india_payoffs:    to_rows(&BASE_INDIA_PAYOFFS),
            interventions:    InterventionFlag::ALL
                .iter()
                .map(|flag| InterventionConfig { flag: *flag, deltas: flag.default_deltas() })
                .collect(),
            scenarios:        standard_scenarios()
                .into_iter()
                .map(|s| ScenarioConfig { name: s.name, flags: s.flags.into_iter().collect() })
                .collect(),
        }
    }

    pub fn validate(&self) -> GameResult<()> {
        self.us_matrix()?;
        self.india_matrix()?;
        self.delta_table()?;
        Ok(())
    }

    pub fn us_matrix(&self) -> GameResult<PayoffMatrix> {
        to_matrix("us_payoffs", &self.us_payoffs)
    }

    pub fn india_matrix(&self) -> GameResult<PayoffMatrix> {
        to_matrix("india_payoffs", &self.india_payoffs)
    }

    /// Per-flag deltas. A flag listed twice has its deltas concatenated.
    pub fn delta_table(&self) -> GameResult<BTreeMap<InterventionFlag, Vec<CellDelta>>> {
        let mut table: BTreeMap<InterventionFlag, Vec<CellDelta>> = BTreeMap::new();
        for entry in &self.interventions {
            for delta in &entry.deltas {
                delta.validate()?;
            }
            table.entry(entry.flag).or_default().extend(entry.deltas.iter().copied());
        }
        Ok(table)
    }

    pub fn scenarios(&self) -> Vec<Scenario> {
        self.scenarios
            .iter()
            .map(|s| Scenario::new(s.name.clone(), s.flags.iter().copied()))
            .collect()
    }
}

impl Default for GameConfig {
    fn default() -> Self { Self::default_game() }
}

fn to_rows(matrix: &PayoffMatrix) -> Vec<Vec<f64>> {
    matrix.rows().iter().map(|row| row.to_vec()).collect()
}

fn to_matrix(name: &str, rows: &[Vec<f64>]) -> GameResult<PayoffMatrix> {
    let mismatch = || GameError::ShapeMismatch {
        matrix: name.to_string(),
        rows:   rows.len(),
        cols:   rows
            .iter()
            .map(Vec::len)
            .find(|&len| len != STRATEGY_COUNT)
            .unwrap_or(STRATEGY_COUNT),
    };

    if rows.len() != STRATEGY_COUNT || rows.iter().any(|r| r.len() != STRATEGY_COUNT) {
        return Err(mismatch());
    }

    let mut cells = [[0.0; STRATEGY_COUNT]; STRATEGY_COUNT];
    for (cell_row, row) in cells.iter_mut().zip(rows) {
        cell_row.copy_from_slice(row);
    }
    Ok(PayoffMatrix::new(cells))
}
