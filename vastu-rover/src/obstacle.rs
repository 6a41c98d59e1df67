//! Obstacle detection for forward moves.
//!
//! The rover does not know where obstacles are. Before every forward move it
//! asks an [`ObstacleScanner`] about its current snapshot; a `Some(description)`
//! answer halts the move and is recorded as an [`Obstacle`].
//!
//! Backward moves never consult the scanner.
//!
//! ## Scanners
//!
//! - [`ObstacleScanner::none`]: never reports anything (the default)
//! - [`ObstacleScanner::from_fn`]: any read-only closure over the rover
//! - [`ObstacleMap`]: a set of blocked cells, checked one step ahead
//!
//! ```rust,ignore
//! use vastu_rover::{ObstacleMap, Rover, Vector};
//!
//! let mut map = ObstacleMap::new();
//! map.insert(Vector::new(0, 1), "rock");
//!
//! let rover = Rover::with_scanner(map.into_scanner()).receive("f");
//! assert_eq!(rover.report(), "rock");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::core::Vector;
use crate::rover::Rover;

/// Description of whatever refused the last forward move
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Obstacle(String);

impl Obstacle {
    /// Wrap a scanner description
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    /// The description as reported by the scanner
    pub fn description(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

type ScanFn = dyn Fn(&Rover) -> Option<String> + Send + Sync;

/// Read-only query deciding whether a forward move is blocked.
///
/// Cloning is cheap: every rover snapshot derived from the same starting
/// rover shares one scanner.
#[derive(Clone)]
pub struct ObstacleScanner {
    scan_fn: Arc<ScanFn>,
}

impl ObstacleScanner {
    /// Scanner that never reports an obstacle
    pub fn none() -> Self {
        Self::from_fn(|_| None)
    }

    /// Wrap a closure. The closure must not have side effects.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Rover) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            scan_fn: Arc::new(f),
        }
    }

    /// Ask the scanner about a rover snapshot
    pub fn scan(&self, rover: &Rover) -> Option<String> {
        (self.scan_fn)(rover)
    }
}

impl Default for ObstacleScanner {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for ObstacleScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObstacleScanner").finish_non_exhaustive()
    }
}

/// Blocked grid cells with a description per cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObstacleMap {
    cells: HashMap<Vector, String>,
}

impl ObstacleMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Block a cell. Returns the previous description if the cell was
    /// already blocked.
    pub fn insert(&mut self, cell: Vector, description: impl Into<String>) -> Option<String> {
        self.cells.insert(cell, description.into())
    }

    /// Unblock a cell
    pub fn remove(&mut self, cell: Vector) -> Option<String> {
        self.cells.remove(&cell)
    }

    /// Description of a blocked cell
    pub fn get(&self, cell: Vector) -> Option<&str> {
        self.cells.get(&cell).map(String::as_str)
    }

    /// Is this cell blocked?
    pub fn is_blocked(&self, cell: Vector) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Number of blocked cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if no cell is blocked
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Report the obstacle in the cell a forward move would enter
    pub fn scan_ahead(&self, rover: &Rover) -> Option<String> {
        let ahead = rover.position() + rover.orientation().unit_vector();
        self.cells.get(&ahead).cloned()
    }

    /// Freeze the map into a scanner
    pub fn into_scanner(self) -> ObstacleScanner {
        let map = Arc::new(self);
        ObstacleScanner::from_fn(move |rover| map.scan_ahead(rover))
    }
}

impl From<ObstacleMap> for ObstacleScanner {
    fn from(map: ObstacleMap) -> Self {
        map.into_scanner()
    }
}

impl<S: Into<String>> FromIterator<(Vector, S)> for ObstacleMap {
    fn from_iter<I: IntoIterator<Item = (Vector, S)>>(iter: I) -> Self {
        let mut map = ObstacleMap::new();
        for (cell, description) in iter {
            map.insert(cell, description);
        }
        map
    }
}
