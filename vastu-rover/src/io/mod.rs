//! Scenario files: load, run and check rover runs described in YAML.

mod scenario;

pub use scenario::{Expectation, Scenario, ScenarioResult, run_all_scenarios, run_scenario};
