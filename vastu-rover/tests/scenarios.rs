//! YAML-based scenario tests
//!
//! Runs the scenario files in `tests/scenarios/`.
//!
//! ```bash
//! # Run all scenarios
//! cargo test -p vastu-rover --test scenarios -- --nocapture
//!
//! # Run a single scenario by name
//! cargo test -p vastu-rover --test scenarios test_detour
//! ```
//!
//! # Adding New Scenarios
//!
//! Create a new `.yaml` file in `tests/scenarios/` with:
//!
//! ```yaml
//! name: "my_scenario"
//! config:
//!   start: { x: 0, y: 0, orientation: NORTH }
//!   obstacles:
//!     - { x: 0, y: 2, description: "rock" }
//! commands: "f,f,r,f"
//! expect:
//!   position: { x: 1, y: 1 }
//!   orientation: EAST
//! ```

use std::path::PathBuf;

use vastu_rover::io::{run_all_scenarios, run_scenario};

fn scenario_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/scenarios")
}

/// Run a single scenario by filename (without .yaml extension)
fn run_single_scenario(name: &str) {
    env_logger::try_init().ok();

    let path = scenario_dir().join(format!("{}.yaml", name));
    let result = run_scenario(&path)
        .unwrap_or_else(|e| panic!("Failed to load scenario {}: {}", path.display(), e));

    println!("{}", result.summary());
    assert!(result.passed(), "{}", result.summary());
}

#[test]
fn test_straight_line() {
    run_single_scenario("straight_line");
}

#[test]
fn test_turn_and_move() {
    run_single_scenario("turn_and_move");
}

#[test]
fn test_unknown_token() {
    run_single_scenario("unknown_token");
}

#[test]
fn test_blocked_by_rock() {
    run_single_scenario("blocked_by_rock");
}

#[test]
fn test_detour() {
    run_single_scenario("detour");
}

#[test]
fn test_messy_stream() {
    run_single_scenario("messy_stream");
}

#[test]
fn test_all_scenarios() {
    env_logger::try_init().ok();

    let results = run_all_scenarios(scenario_dir());
    assert!(results.len() >= 6, "expected at least 6 scenarios");

    let failed: Vec<_> = results
        .iter()
        .filter_map(|(name, result)| match result {
            Ok(r) if r.passed() => None,
            Ok(r) => Some(r.summary()),
            Err(e) => Some(format!("{}: {}", name, e)),
        })
        .collect();

    assert!(failed.is_empty(), "Failed scenarios:\n{}", failed.join("\n"));
}
