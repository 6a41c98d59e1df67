//! Core value types for the rover grid.
//!
//! - [`Vector`]: integer cell coordinates and unit steps
//! - [`Orientation`]: compass heading with left/right rotation
//!
//! The grid is unbounded: +Y is NORTH, +X is EAST.

mod orientation;
mod vector;

pub use orientation::{Orientation, ParseOrientationError};
pub use vector::Vector;
