//! Starting pose section.

use serde::{Deserialize, Serialize};

use crate::core::{Orientation, Vector};

/// Where the rover starts and which way it faces
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSection {
    /// Start cell X
    #[serde(default)]
    pub x: i32,

    /// Start cell Y
    #[serde(default)]
    pub y: i32,

    /// Start heading
    #[serde(default)]
    pub orientation: Orientation,
}

impl StartSection {
    /// Start cell as a vector
    pub fn position(&self) -> Vector {
        Vector::new(self.x, self.y)
    }
}
