//! Config loading and validation tests.

use currency_game_core::{
    config::GameConfig,
    error::GameError,
    intervention::{InterventionEngine, InterventionFlag},
    payoff_model::PayoffModel,
    scenario::{standard_scenarios, ScenarioRunner},
    types::Player,
};

const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data");

#[test]
fn data_file_matches_builtin_game() {
    let loaded = GameConfig::load(DATA_DIR).expect("data/currency_game.json should load");
    let builtin = GameConfig::default_game();

    assert_eq!(loaded.us_payoffs, builtin.us_payoffs);
    assert_eq!(loaded.india_payoffs, builtin.india_payoffs);
    assert_eq!(loaded.us_strategies, builtin.us_strategies);
    assert_eq!(loaded.india_strategies, builtin.india_strategies);
    assert_eq!(loaded.delta_table().unwrap(), builtin.delta_table().unwrap());
    assert_eq!(loaded.scenarios(), standard_scenarios());
}

#[test]
fn runner_from_loaded_config_matches_default_runner() {
    let config = GameConfig::load(DATA_DIR).unwrap();
    let from_file = ScenarioRunner::from_config(&config).unwrap();
    let builtin = ScenarioRunner::new(InterventionEngine::new(PayoffModel::new()));

    let scenarios = config.scenarios();
    assert_eq!(from_file.run_all(&scenarios), builtin.run_all(&scenarios));
}

#[test]
fn missing_data_dir_reports_path() {
    let err = GameConfig::load("/nonexistent/dir").unwrap_err();

    assert!(err.to_string().contains("/nonexistent/dir/currency_game.json"), "{err}");
}

fn builtin_json() -> serde_json::Value {
    serde_json::to_value(GameConfig::default_game()).unwrap()
}

#[test]
fn ragged_matrix_is_a_shape_mismatch() {
    let mut json = builtin_json();
    json["india_payoffs"] = serde_json::json!([[2.5, -0.125, 1.0], [0.8, 0.5]]);

    let err = GameConfig::from_json(&json.to_string()).unwrap_err();

    assert!(
        matches!(err, GameError::ShapeMismatch { ref matrix, rows: 2, cols: 3 } if matrix == "india_payoffs"),
        "unexpected error: {err}"
    );
}

#[test]
fn extra_row_is_a_shape_mismatch() {
    let mut json = builtin_json();
    json["us_payoffs"] = serde_json::json!([[-3.2, 0.1], [-0.8, 1.5], [0.0, 0.0]]);

    let err = GameConfig::from_json(&json.to_string()).unwrap_err();

    assert!(matches!(err, GameError::ShapeMismatch { rows: 3, cols: 2, .. }), "{err}");
}

#[test]
fn delta_outside_grid_is_out_of_range() {
    let mut json = builtin_json();
    json["interventions"][0]["deltas"][0]["row"] = serde_json::json!(5);

    let err = GameConfig::from_json(&json.to_string()).unwrap_err();

    assert!(
        matches!(err, GameError::PlayerIndexOutOfRange { player: Player::Us, index: 5, count: 2 }),
        "{err}"
    );
}

#[test]
fn unknown_flag_is_a_serialization_error() {
    let mut json = builtin_json();
    json["scenarios"][0]["flags"] = serde_json::json!(["gold_standard"]);

    let err = GameConfig::from_json(&json.to_string()).unwrap_err();

    assert!(matches!(err, GameError::Serialization(_)), "{err}");
}

#[test]
fn custom_deltas_flow_through_runner() {
    let mut config = GameConfig::default_game();
    config.interventions.retain(|i| i.flag != InterventionFlag::Incentives);
    let runner = ScenarioRunner::from_config(&config).unwrap();

    let record = runner
        .run_named(&config.scenarios(), "+ Positive Incentives")
        .unwrap();

    assert_eq!(record.india_matrix, *PayoffModel::new().india_payoffs());
    assert_eq!(record.equilibria[0].position(), (1, 0));
}

#[test]
fn scenarios_default_to_empty() {
    let mut json = builtin_json();
    json.as_object_mut().unwrap().remove("scenarios");

    let config = GameConfig::from_json(&json.to_string()).unwrap();

    assert!(config.scenarios().is_empty());
}
