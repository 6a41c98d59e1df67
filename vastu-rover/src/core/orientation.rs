//! Compass heading of the rover.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Vector;

/// One of the four compass headings.
///
/// Right turns walk the cycle NORTH → EAST → SOUTH → WEST → NORTH,
/// left turns walk it backwards.
///
/// Serializes as the upper-case name. Deserializes through [`FromStr`], so
/// any case and the N/E/S/W abbreviations are accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Orientation {
    /// Facing +Y
    #[default]
    North,
    /// Facing +X
    East,
    /// Facing -Y
    South,
    /// Facing -X
    West,
}

impl Orientation {
    /// All headings in right-turn order, starting at NORTH
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Rotate 90° clockwise
    pub fn turn_right(self) -> Orientation {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    /// Rotate 90° counter-clockwise
    pub fn turn_left(self) -> Orientation {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    /// Unit step taken by a forward move with this heading
    pub fn unit_vector(self) -> Vector {
        match self {
            Orientation::North => Vector::new(0, 1),
            Orientation::East => Vector::new(1, 0),
            Orientation::South => Vector::new(0, -1),
            Orientation::West => Vector::new(-1, 0),
        }
    }

    /// Upper-case compass name
    pub fn name(self) -> &'static str {
        match self {
            Orientation::North => "NORTH",
            Orientation::East => "EAST",
            Orientation::South => "SOUTH",
            Orientation::West => "WEST",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a heading name cannot be parsed
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown orientation: {0:?} (expected NORTH, EAST, SOUTH or WEST)")]
pub struct ParseOrientationError(pub String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" | "NORTH" => Ok(Orientation::North),
            "E" | "EAST" => Ok(Orientation::East),
            "S" | "SOUTH" => Ok(Orientation::South),
            "W" | "WEST" => Ok(Orientation::West),
            _ => Err(ParseOrientationError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Orientation {
    type Error = ParseOrientationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
