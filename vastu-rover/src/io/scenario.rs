//! Scenario YAML parsing and execution.
//!
//! A scenario bundles a rover configuration, a command stream and the
//! expected outcome:
//!
//! ```yaml
//! name: "blocked_by_rock"
//! description: "Rock two cells ahead stops the second forward move"
//! config:
//!   start: { x: 0, y: 0, orientation: NORTH }
//!   obstacles:
//!     - { x: 0, y: 2, description: "rock" }
//! commands: "f,f"
//! expect:
//!   position: { x: 0, y: 1 }
//!   orientation: NORTH
//!   report: "rock"
//! ```
//!
//! Expectations that are left out are not checked.

use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigLoadError, RoverConfig};
use crate::core::{Orientation, Vector};
use crate::rover::Rover;

/// A rover scenario loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable scenario name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: String,

    /// Start pose and obstacles
    #[serde(default)]
    pub config: RoverConfig,

    /// Comma-separated command stream
    pub commands: String,

    /// Expected final state
    #[serde(default)]
    pub expect: Expectation,
}

/// Expected final state of a scenario
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectation {
    /// Final cell
    #[serde(default)]
    pub position: Option<Vector>,

    /// Final heading
    #[serde(default)]
    pub orientation: Option<Orientation>,

    /// Exact report text
    #[serde(default)]
    pub report: Option<String>,

    /// Number of recorded errors
    #[serde(default)]
    pub error_count: Option<usize>,
}

/// Outcome of running a scenario
#[derive(Clone, Debug)]
pub struct ScenarioResult {
    /// Scenario name
    pub name: String,
    /// Final rover snapshot
    pub rover: Rover,
    /// One line per unmet expectation
    pub mismatches: Vec<String>,
}

impl ScenarioResult {
    /// True if every expectation held
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        if self.passed() {
            format!("PASS {}: {}", self.name, self.rover)
        } else {
            format!(
                "FAIL {}: {} ({})",
                self.name,
                self.rover,
                self.mismatches.join("; ")
            )
        }
    }
}

impl Scenario {
    /// Load a scenario from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Run the command stream from the configured start and check expectations
    pub fn run(&self) -> ScenarioResult {
        let rover = self.config.to_rover().receive(&self.commands);
        let mismatches = self.expect.check(&rover);

        ScenarioResult {
            name: self.name.clone(),
            rover,
            mismatches,
        }
    }
}

impl Expectation {
    /// Compare a rover against this expectation
    pub fn check(&self, rover: &Rover) -> Vec<String> {
        let mut mismatches = Vec::new();

        if let Some(position) = self.position
            && position != rover.position()
        {
            mismatches.push(format!(
                "position: expected {}, got {}",
                position,
                rover.position()
            ));
        }

        if let Some(orientation) = self.orientation
            && orientation != rover.orientation()
        {
            mismatches.push(format!(
                "orientation: expected {}, got {}",
                orientation,
                rover.orientation()
            ));
        }

        if let Some(report) = &self.report {
            let actual = rover.report();
            if *report != actual {
                mismatches.push(format!("report: expected {:?}, got {:?}", report, actual));
            }
        }

        if let Some(count) = self.error_count
            && count != rover.errors().len()
        {
            mismatches.push(format!(
                "error_count: expected {}, got {}",
                count,
                rover.errors().len()
            ));
        }

        mismatches
    }
}

/// Run a scenario from a YAML file
pub fn run_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioResult, ConfigLoadError> {
    Ok(Scenario::load(path)?.run())
}

/// Run all YAML scenarios in a directory, in file name order.
///
/// Returns a vector of (file stem, result) tuples.
pub fn run_all_scenarios<P: AsRef<Path>>(
    dir: P,
) -> Vec<(String, Result<ScenarioResult, ConfigLoadError>)> {
    let mut results = Vec::new();

    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to read scenario directory: {}", e);
            return results;
        }
    };

    let mut yaml_files: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e == "yaml" || e == "yml"))
        .collect();

    yaml_files.sort();

    for path in yaml_files {
        let name = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let result = run_scenario(&path);
        match &result {
            Ok(r) => info!("{}", r.summary()),
            Err(e) => warn!("Scenario {} failed to load: {}", name, e),
        }

        results.push((name, result));
    }

    results
}
