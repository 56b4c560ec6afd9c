//! game-runner: headless scenario runner and reporter for the currency game.
//!
//! Usage:
//!   game-runner
//!   game-runner --data-dir ./data --scenario "Full Strategy Package"
//!   game-runner --json --perturb-trials 500 --perturb-magnitude 0.1 --seed 7

use anyhow::Result;
use currency_game_core::{
    config::GameConfig,
    payoff_model::PayoffModel,
    scenario::{ScenarioRecord, ScenarioRunner},
    sensitivity::{PerturbationOutcome, PerturbationStudy},
    types::{PayoffMatrix, Player},
};
use std::env;

#[derive(serde::Serialize)]
struct Report {
    report_id:    String,
    generated_at: chrono::DateTime<chrono::Utc>,
    source:       String,
    scenarios:    Vec<ReportEntry>,
}

#[derive(serde::Serialize)]
struct ReportEntry {
    #[serde(flatten)]
    record:       ScenarioRecord,
    perturbation: Option<PerturbationOutcome>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json = args.iter().any(|a| a == "--json");
    let data_dir = find_arg(&args, "--data-dir");
    let only = find_arg(&args, "--scenario");
    let trials = parse_arg(&args, "--perturb-trials", 0u32);
    let magnitude = parse_arg(&args, "--perturb-magnitude", 0.1f64);
    let seed = parse_arg(&args, "--seed", 42u64);

    let (config, source) = match data_dir {
        Some(dir) => (GameConfig::load(dir)?, dir.to_string()),
        None => (GameConfig::default_game(), "builtin".to_string()),
    };
    let runner = ScenarioRunner::from_config(&config)?;
    let scenarios = config.scenarios();
    log::info!("loaded {} scenarios from {source}", scenarios.len());

    let records = match only {
        Some(name) => vec![runner.run_named(&scenarios, name)?],
        None => runner.run_all(&scenarios),
    };

    let study = (trials > 0).then(|| PerturbationStudy::new(trials, magnitude, seed));
    let entries: Vec<ReportEntry> = records
        .into_iter()
        .map(|record| {
            // Stream by configured position so --scenario reproduces a full run.
            let stream = scenarios
                .iter()
                .position(|s| s.name == record.scenario_name)
                .unwrap_or(0) as u64;
            let perturbation = study
                .as_ref()
                .map(|s| s.run(&record.us_matrix, &record.india_matrix, stream));
            ReportEntry { record, perturbation }
        })
        .collect();

    if json {
        let report = Report {
            report_id:    uuid::Uuid::new_v4().to_string(),
            generated_at: chrono::Utc::now(),
            source,
            scenarios:    entries,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let model = runner.engine().model();
        println!("US-INDIA CURRENCY GAME: HOW STRATEGY CHANGES THE EQUILIBRIUM");
        println!("  config:    {source}");
        println!("  scenarios: {}", entries.len());
        println!();
        for entry in &entries {
            print_entry(model, entry);
        }
    }

    Ok(())
}

fn print_entry(model: &PayoffModel, entry: &ReportEntry) {
    let record = &entry.record;
    println!("=== {} ===", record.scenario_name);
    let applied: Vec<&str> = record.flags.iter().map(|f| f.label()).collect();
    if applied.is_empty() {
        println!("  applied: None (Baseline)");
    } else {
        println!("  applied: {}", applied.join(", "));
    }

    println!();
    println!("  {} payoffs (trillion USD):", Player::Us.name());
    print_matrix(model, &record.us_matrix);
    println!("  {} (BRICS) payoffs (trillion USD):", Player::India.name());
    print_matrix(model, &record.india_matrix);

    println!("  Nash equilibria:");
    if record.equilibria.is_empty() {
        println!("    none, no stable outcome");
    }
    for (n, (eq, margin)) in record.equilibria.iter().zip(&record.stability).enumerate() {
        println!("    {}. US: {} -> ${:.2}T", n + 1, model.strategies(Player::Us)[eq.us_index], eq.us_payoff);
        println!("       India: {} -> ${:.2}T", model.strategies(Player::India)[eq.india_index], eq.india_payoff);
        println!("       margin: US {:.3}, India {:.3}", margin.us, margin.india);
    }

    println!(
        "  dominant: US {}, India {}",
        record.dominant_us.as_deref().unwrap_or("none"),
        record.dominant_india.as_deref().unwrap_or("none")
    );
    match &record.mixed_equilibrium {
        Some(m) => println!(
            "  mixed: US {:.3}/{:.3}, India {:.3}/{:.3}",
            m.us_mix[0], m.us_mix[1], m.india_mix[0], m.india_mix[1]
        ),
        None => println!("  mixed: none in [0, 1]"),
    }
    if let Some(p) = &entry.perturbation {
        println!(
            "  perturbation: {}/{} trials preserved ({:.1}%)",
            p.preserved,
            p.trials,
            p.preserved_share * 100.0
        );
    }
    println!();
}

fn print_matrix(model: &PayoffModel, matrix: &PayoffMatrix) {
    let cols = model.strategies(Player::India);
    println!("    {:<22} {:>28} {:>22}", "", cols[0], cols[1]);
    for (label, row) in model.strategies(Player::Us).iter().zip(matrix.rows()) {
        println!("    {:<22} {:>28.3} {:>22.3}", label, row[0], row[1]);
    }
    println!();
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
