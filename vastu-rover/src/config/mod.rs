//! YAML configuration for a rover run.
//!
//! Every field has a default, so an empty file (or no file) gives a rover at
//! the origin facing NORTH on an empty grid.
//!
//! ## Example YAML
//!
//! ```yaml
//! start:
//!   x: 0
//!   y: 0
//!   orientation: NORTH   # NORTH/EAST/SOUTH/WEST, any case, or N/E/S/W
//!
//! obstacles:
//!   - { x: 0, y: 2, description: "rock" }
//!   - { x: 3, y: 1 }     # reported as "obstacle at (3, 1)"
//! ```
//!
//! ```rust,ignore
//! use vastu_rover::config::RoverConfig;
//!
//! let config = RoverConfig::load_default()?;
//! let rover = config.to_rover().receive("f,f,r,f");
//! println!("{}", rover.report());
//! ```

mod error;
mod obstacles;
mod rover;
mod start;

pub use error::ConfigLoadError;
pub use obstacles::{ObstacleEntry, ParseObstacleError};
pub use rover::{DEFAULT_CONFIG_PATH, RoverConfig};
pub use start::StartSection;
