//! Obstacle list section.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Vector;

/// One blocked cell
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleEntry {
    /// Cell X
    pub x: i32,

    /// Cell Y
    pub y: i32,

    /// Text reported when the rover bumps into this cell.
    /// Defaults to `obstacle at (x, y)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ObstacleEntry {
    /// Create an entry with an explicit description
    pub fn new(x: i32, y: i32, description: impl Into<String>) -> Self {
        Self {
            x,
            y,
            description: Some(description.into()),
        }
    }

    /// Blocked cell
    pub fn cell(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    /// Configured description, or a generated one naming the cell
    pub fn description(&self) -> String {
        match &self.description {
            Some(description) => description.clone(),
            None => format!("obstacle at {}", self.cell()),
        }
    }
}

/// Error returned when an `X,Y[:DESCRIPTION]` obstacle spec cannot be parsed
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid obstacle {0:?} (expected X,Y or X,Y:DESCRIPTION)")]
pub struct ParseObstacleError(pub String);

impl FromStr for ObstacleEntry {
    type Err = ParseObstacleError;

    /// Parse `X,Y` or `X,Y:DESCRIPTION`, e.g. `0,2:rock`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseObstacleError(s.to_string());

        let (coords, description) = match s.split_once(':') {
            Some((coords, description)) => (coords, Some(description.trim().to_string())),
            None => (s, None),
        };
        let (x, y) = coords.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;

        Ok(Self {
            x,
            y,
            description: description.filter(|d| !d.is_empty()),
        })
    }
}
