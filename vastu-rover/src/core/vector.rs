//! Integer grid vector.

use std::fmt;
use std::ops::{Add, Neg};

use serde::{Deserialize, Serialize};

/// Integer 2D vector on the rover grid.
///
/// Used both as an absolute cell position and as a unit step.
/// Y grows to the north, X grows to the east. Arithmetic wraps at the
/// `i32` edges, so no operation can fail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector {
    /// X coordinate (east positive)
    pub x: i32,
    /// Y coordinate (north positive)
    pub y: i32,
}

impl Vector {
    /// Origin of the grid
    pub const ZERO: Vector = Vector { x: 0, y: 0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum
    #[inline]
    pub fn plus(self, other: Vector) -> Vector {
        Vector::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }

    /// Both components negated
    #[inline]
    pub fn reversed(self) -> Vector {
        Vector::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}

impl Add for Vector {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.plus(other)
    }
}

impl Neg for Vector {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.reversed()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
