//! Solver tests: pure equilibria, best responses, dominance, mixed equilibria.

use currency_game_core::{
    payoff_model::{IndiaStrategy, PayoffModel, UsStrategy},
    solver::{
        best_response, dominance, find_dominant_strategy, find_mixed_equilibrium,
        find_pure_equilibria,
    },
    types::{PayoffMatrix, Player},
};

const EPS: f64 = 1e-9;

#[test]
fn baseline_has_single_equilibrium_cooperate_accelerate() {
    let model = PayoffModel::new();

    let eq = find_pure_equilibria(model.us_payoffs(), model.india_payoffs());

    assert_eq!(eq.len(), 1, "expected exactly one equilibrium, got {eq:?}");
    assert_eq!(
        eq[0].position(),
        (UsStrategy::CooperativeTrade.index(), IndiaStrategy::Accelerate.index())
    );
    assert!((eq[0].us_payoff - (-0.8)).abs() < EPS);
    assert!((eq[0].india_payoff - 0.8).abs() < EPS);
}

#[test]
fn ties_count_as_best_responses() {
    // Every cell ties for both players: all four are equilibria.
    let flat = PayoffMatrix::new([[1.0, 1.0], [1.0, 1.0]]);

    let eq = find_pure_equilibria(&flat, &flat);

    let positions: Vec<_> = eq.iter().map(|e| e.position()).collect();
    assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1)], "row-major scan order");
}

#[test]
fn matching_pennies_has_no_pure_equilibrium() {
    let us = PayoffMatrix::new([[1.0, -1.0], [-1.0, 1.0]]);
    let india = PayoffMatrix::new([[-1.0, 1.0], [1.0, -1.0]]);

    assert!(find_pure_equilibria(&us, &india).is_empty());
}

#[test]
fn coordination_game_has_two_equilibria_in_scan_order() {
    let payoffs = PayoffMatrix::new([[2.0, 0.0], [0.0, 1.0]]);

    let eq = find_pure_equilibria(&payoffs, &payoffs);

    assert_eq!(eq.len(), 2);
    assert_eq!(eq[0].position(), (0, 0));
    assert_eq!(eq[1].position(), (1, 1));
    assert_eq!(eq[1].us_payoff, 1.0);
}

#[test]
fn best_response_against_each_opponent_strategy() {
    let model = PayoffModel::new();

    assert_eq!(best_response(model.us_payoffs(), Player::Us, 0), vec![1]);
    assert_eq!(best_response(model.us_payoffs(), Player::Us, 1), vec![1]);
    assert_eq!(best_response(model.india_payoffs(), Player::India, 0), vec![0]);
    assert_eq!(best_response(model.india_payoffs(), Player::India, 1), vec![0]);

    let tied = PayoffMatrix::new([[2.5, -0.125], [0.5, 0.5]]);
    assert_eq!(best_response(&tied, Player::India, 1), vec![0, 1]);
}

#[test]
fn baseline_us_prefers_cooperation_in_both_columns() {
    // -0.8 > -3.2 against Accelerate and 1.5 > 0.1 against Status Quo.
    let model = PayoffModel::new();

    assert_eq!(
        find_dominant_strategy(model.us_payoffs(), Player::Us),
        Some(UsStrategy::CooperativeTrade.index())
    );
}

#[test]
fn baseline_india_prefers_acceleration_in_both_rows() {
    let model = PayoffModel::new();

    assert_eq!(
        find_dominant_strategy(model.india_payoffs(), Player::India),
        Some(IndiaStrategy::Accelerate.index())
    );
}

#[test]
fn no_dominant_strategy_when_preferences_cross() {
    let us = PayoffMatrix::new([[3.0, 0.0], [0.0, 3.0]]);

    assert_eq!(find_dominant_strategy(&us, Player::Us), None);
    assert_eq!(find_dominant_strategy(&us, Player::India), None);
}

#[test]
fn identical_strategies_dominate_nothing() {
    let flat = PayoffMatrix::new([[1.0, 1.0], [1.0, 1.0]]);

    assert_eq!(dominance(&flat, &flat).us, None);
    assert_eq!(dominance(&flat, &flat).india, None);
}

#[test]
fn weak_dominance_with_one_strict_gap_counts() {
    // India row 1 ties; row 0 strictly favors column 0.
    let india = PayoffMatrix::new([[2.5, -0.125], [0.5, 0.5]]);

    assert_eq!(find_dominant_strategy(&india, Player::India), Some(0));
}

#[test]
fn matching_pennies_mixes_evenly() {
    let us = PayoffMatrix::new([[1.0, -1.0], [-1.0, 1.0]]);
    let india = PayoffMatrix::new([[-1.0, 1.0], [1.0, -1.0]]);

    let mixed = find_mixed_equilibrium(&us, &india).expect("matching pennies has a mixed equilibrium");

    assert!((mixed.us_mix[0] - 0.5).abs() < EPS);
    assert!((mixed.india_mix[0] - 0.5).abs() < EPS);
    assert!(mixed.us_value.abs() < EPS);
    assert!(mixed.india_value.abs() < EPS);
}

#[test]
fn mixed_equilibrium_makes_opponent_indifferent() {
    let us = PayoffMatrix::new([[3.0, 0.0], [0.0, 2.0]]);
    let india = PayoffMatrix::new([[2.0, 0.0], [0.0, 3.0]]);

    let m = find_mixed_equilibrium(&us, &india).expect("battle of the sexes mixes");

    let p = m.us_mix[0];
    let q = m.india_mix[0];
    let india_col0 = p * 2.0 + (1.0 - p) * 0.0;
    let india_col1 = p * 0.0 + (1.0 - p) * 3.0;
    let us_row0 = q * 3.0 + (1.0 - q) * 0.0;
    let us_row1 = q * 0.0 + (1.0 - q) * 2.0;
    assert!((india_col0 - india_col1).abs() < EPS);
    assert!((us_row0 - us_row1).abs() < EPS);
    assert!((p - 0.6).abs() < EPS);
    assert!((q - 0.4).abs() < EPS);
}

#[test]
fn baseline_has_no_mixed_equilibrium_in_unit_interval() {
    let model = PayoffModel::new();

    assert!(find_mixed_equilibrium(model.us_payoffs(), model.india_payoffs()).is_none());
}

#[test]
fn degenerate_indifference_returns_none() {
    let flat = PayoffMatrix::new([[1.0, 1.0], [1.0, 1.0]]);

    assert!(find_mixed_equilibrium(&flat, &flat).is_none());
}
