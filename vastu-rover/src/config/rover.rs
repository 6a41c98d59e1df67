//! Main RoverConfig and conversion methods.

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::obstacle::ObstacleMap;
use crate::rover::Rover;

use super::error::ConfigLoadError;
use super::obstacles::ObstacleEntry;
use super::start::StartSection;

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/rover.yaml";

/// Full rover configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverConfig {
    /// Starting pose
    #[serde(default)]
    pub start: StartSection,

    /// Blocked cells
    #[serde(default)]
    pub obstacles: Vec<ObstacleEntry>,
}

impl RoverConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/rover.yaml), or defaults if absent
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Build the obstacle map. Later entries replace earlier ones on the same cell.
    pub fn obstacle_map(&self) -> ObstacleMap {
        let mut map = ObstacleMap::new();
        for entry in &self.obstacles {
            if let Some(previous) = map.insert(entry.cell(), entry.description()) {
                warn!(
                    "Obstacle at {} defined twice, replacing {:?} with {:?}",
                    entry.cell(),
                    previous,
                    entry.description()
                );
            }
        }
        map
    }

    /// Starting rover, scanning the configured obstacles
    pub fn to_rover(&self) -> Rover {
        Rover::new(self.start.position(), self.start.orientation)
            .scanning(self.obstacle_map().into_scanner())
    }
}
