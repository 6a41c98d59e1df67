//! # VastuRover
//!
//! Rover on an unbounded integer grid, driven by comma-separated command
//! streams.
//!
//! ## Overview
//!
//! A [`Rover`] is an immutable snapshot of position, heading, collected
//! errors and the last blocking obstacle. Feeding it commands returns a new
//! snapshot; the old one stays valid.
//!
//! | Token | Effect |
//! |-------|--------|
//! | `f` | one cell forward, unless the obstacle scanner objects |
//! | `b` | one cell backward (never scanned) |
//! | `l` / `r` | turn 90° left / right |
//! | anything else | recorded as `Could not parse [<token>] as a known command` |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vastu_rover::{ObstacleMap, Rover, Vector};
//!
//! let mut obstacles = ObstacleMap::new();
//! obstacles.insert(Vector::new(0, 2), "rock");
//!
//! let rover = Rover::with_scanner(obstacles.into_scanner()).receive("f,f,x");
//!
//! println!("{}", rover);           // Rover{position=(0, 1), orientation=NORTH}
//! println!("{}", rover.report());  // Could not parse [x] as a known command
//! ```
//!
//! ## Coordinate System
//!
//! - X: EAST positive
//! - Y: NORTH positive

#![warn(missing_docs)]

// Vector and Orientation
pub mod core;

// Command parsing and execution
pub mod command;

// Obstacle scanning
pub mod obstacle;

// The rover aggregate
pub mod rover;

// YAML configuration
pub mod config;

// Scenario files
pub mod io;

pub use command::Command;
pub use config::{ConfigLoadError, ObstacleEntry, RoverConfig};
pub use crate::core::{Orientation, ParseOrientationError, Vector};
pub use io::{Scenario, ScenarioResult};
pub use obstacle::{Obstacle, ObstacleMap, ObstacleScanner};
pub use rover::Rover;
