//! DhruvaDrive - command-line driver for VastuRover
//!
//! Loads a rover configuration (start pose and obstacles), feeds it a
//! comma-separated command stream and prints the final rover followed by its
//! report. With `--scenario`, runs a scenario file and exits non-zero when an
//! expectation fails.

mod args;
mod error;

use std::path::Path;

use clap::Parser;
use log::info;
use vastu_rover::config::DEFAULT_CONFIG_PATH;
use vastu_rover::{Rover, RoverConfig, Scenario};

use args::Args;
use error::{DriveError, Result};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    info!("DhruvaDrive v{}", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &args.scenario {
        return run_scenario_file(path);
    }

    let commands = args
        .commands
        .as_deref()
        .ok_or_else(|| DriveError::InvalidArgument("no command stream given".to_string()))?;

    let config = load_config(args)?;
    let start = config.to_rover();
    info!("Start: {} with {} obstacle(s)", start, config.obstacles.len());

    let rover = if args.trace {
        let snapshots = start.trace(commands);
        for (step, snapshot) in snapshots.iter().enumerate() {
            println!("{:>4}  {}", step, snapshot);
        }
        snapshots.last().cloned().unwrap_or(start)
    } else {
        start.receive(commands)
    };

    print_outcome(&rover);
    Ok(())
}

/// Config file (explicit, default path, or built-in defaults) plus `--obstacle` extras
fn load_config(args: &Args) -> Result<RoverConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            RoverConfig::load(path)?
        }
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            info!("Loading configuration from {}", DEFAULT_CONFIG_PATH);
            RoverConfig::load_default()?
        }
        None => {
            info!("Using default configuration");
            RoverConfig::default()
        }
    };

    config.obstacles.extend(args.obstacles.iter().cloned());
    Ok(config)
}

fn run_scenario_file(path: &Path) -> Result<()> {
    info!("Running scenario {:?}", path);
    let scenario = Scenario::load(path)?;
    if !scenario.description.is_empty() {
        info!("{}", scenario.description);
    }

    let result = scenario.run();
    print_outcome(&result.rover);
    println!("{}", result.summary());

    if result.passed() {
        Ok(())
    } else {
        Err(DriveError::ScenarioFailed {
            name: result.name,
            details: result.mismatches.join("; "),
        })
    }
}

fn print_outcome(rover: &Rover) {
    println!("{}", rover);
    let report = rover.report();
    if !report.is_empty() {
        println!("{}", report);
    }
}
