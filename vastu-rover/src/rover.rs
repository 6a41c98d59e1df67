//! The rover aggregate.
//!
//! A [`Rover`] is an immutable snapshot: position, heading, the error messages
//! collected so far, the obstacle that halted the last forward move (if any),
//! and the scanner consulted before forward moves. Every command produces a
//! new snapshot; older snapshots stay valid.
//!
//! Two rovers are equal when their position and heading are equal. Errors,
//! obstacle state and scanner do not take part in equality or hashing.

use std::fmt;
use std::hash::{Hash, Hasher};

use log::debug;

use crate::command::Command;
use crate::core::{Orientation, Vector};
use crate::obstacle::{Obstacle, ObstacleScanner};

/// Immutable rover snapshot
#[derive(Clone)]
pub struct Rover {
    position: Vector,
    orientation: Orientation,
    errors: Vec<String>,
    scanner: ObstacleScanner,
    obstacle: Option<Obstacle>,
}

impl Rover {
    /// Rover at `position` facing `orientation`, with no obstacle scanner
    pub fn new(position: Vector, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
            errors: Vec::new(),
            scanner: ObstacleScanner::none(),
            obstacle: None,
        }
    }

    /// Rover at the origin facing NORTH, consulting `scanner` before forward moves
    pub fn with_scanner(scanner: ObstacleScanner) -> Self {
        Rover::default().scanning(scanner)
    }

    /// Same snapshot with a different scanner
    pub fn scanning(&self, scanner: ObstacleScanner) -> Rover {
        Rover {
            scanner,
            ..self.clone()
        }
    }

    /// Current cell
    pub fn position(&self) -> Vector {
        self.position
    }

    /// Current heading
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Error messages in the order they were recorded
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Obstacle that halted the most recent command, if it was a blocked forward move
    pub fn obstacle(&self) -> Option<&Obstacle> {
        self.obstacle.as_ref()
    }

    /// Process a comma-separated command stream, left to right.
    ///
    /// Every segment is one token, so `"f,,f"` and a trailing comma both
    /// produce an empty token, which is recorded as an unknown command.
    pub fn receive(&self, commands: &str) -> Rover {
        Command::parse_stream(commands)
            .iter()
            .fold(self.clone(), |rover, command| rover.receive_command(command))
    }

    /// Apply a single parsed command
    pub fn receive_command(&self, command: &Command) -> Rover {
        let next = command.execute(self);
        debug!(
            "{:?}: {} {} -> {} {}",
            command, self.position, self.orientation, next.position, next.orientation
        );
        next
    }

    /// Like [`Rover::receive`], but keeps every snapshot.
    ///
    /// The first element is `self`, followed by one snapshot per token.
    pub fn trace(&self, commands: &str) -> Vec<Rover> {
        let mut snapshots = vec![self.clone()];
        for command in Command::parse_stream(commands) {
            let next = snapshots[snapshots.len() - 1].receive_command(&command);
            snapshots.push(next);
        }
        snapshots
    }

    /// Ask the scanner whether a forward move from here is blocked
    pub fn scan(&self) -> Option<String> {
        self.scanner.scan(self)
    }

    /// Collected errors followed by the current obstacle, one per line.
    ///
    /// Empty when there is nothing to report.
    pub fn report(&self) -> String {
        let mut lines: Vec<&str> = self.errors.iter().map(String::as_str).collect();
        if let Some(obstacle) = &self.obstacle {
            lines.push(obstacle.description());
        }
        lines.join("\n")
    }

    // Transitions. Each rebuilds the whole snapshot and clears the obstacle,
    // except `stopped`, which records one.

    pub(crate) fn turned(&self, orientation: Orientation) -> Rover {
        Rover {
            position: self.position,
            orientation,
            errors: self.errors.clone(),
            scanner: self.scanner.clone(),
            obstacle: None,
        }
    }

    pub(crate) fn moved(&self, position: Vector) -> Rover {
        Rover {
            position,
            orientation: self.orientation,
            errors: self.errors.clone(),
            scanner: self.scanner.clone(),
            obstacle: None,
        }
    }

    pub(crate) fn stopped(&self, description: String) -> Rover {
        Rover {
            position: self.position,
            orientation: self.orientation,
            errors: self.errors.clone(),
            scanner: self.scanner.clone(),
            obstacle: Some(Obstacle::new(description)),
        }
    }

    pub(crate) fn with_error(&self, error: String) -> Rover {
        let mut errors = self.errors.clone();
        errors.push(error);
        Rover {
            position: self.position,
            orientation: self.orientation,
            errors,
            scanner: self.scanner.clone(),
            obstacle: None,
        }
    }
}

impl Default for Rover {
    /// Origin, facing NORTH, no obstacle scanner
    fn default() -> Self {
        Rover::new(Vector::ZERO, Orientation::North)
    }
}

impl PartialEq for Rover {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.orientation == other.orientation
    }
}

impl Eq for Rover {}

impl Hash for Rover {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
        self.orientation.hash(state);
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rover{{position={}, orientation={}}}",
            self.position, self.orientation
        )
    }
}

impl fmt::Debug for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rover")
            .field("position", &self.position)
            .field("orientation", &self.orientation)
            .field("errors", &self.errors)
            .field("obstacle", &self.obstacle)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn rock_at_0_1() -> ObstacleScanner {
        ObstacleScanner::from_fn(|rover| {
            let ahead = rover.position() + rover.orientation().unit_vector();
            (ahead == Vector::new(0, 1)).then(|| "rock".to_string())
        })
    }

    #[test]
    fn test_default_rover() {
        let rover = Rover::default();
        assert_eq!(rover.position(), Vector::ZERO);
        assert_eq!(rover.orientation(), Orientation::North);
        assert!(rover.errors().is_empty());
        assert!(rover.obstacle().is_none());
        assert_eq!(rover.scan(), None);
        assert_eq!(rover.report(), "");
    }

    #[test]
    fn test_forward_three_times() {
        let rover = Rover::default().receive("f,f,f");
        assert_eq!(rover.position(), Vector::new(0, 3));
        assert_eq!(rover.orientation(), Orientation::North);
        assert_eq!(rover.report(), "");
    }

    #[test]
    fn test_turn_then_forward() {
        let turned = Rover::default().receive("r");
        assert_eq!(turned.orientation(), Orientation::East);
        assert_eq!(turned.position(), Vector::ZERO);

        let rover = Rover::default().receive("r,f");
        assert_eq!(rover.orientation(), Orientation::East);
        assert_eq!(rover.position(), Vector::new(1, 0));
    }

    #[test]
    fn test_mixed_case_stream() {
        let rover = Rover::new(Vector::new(5, 5), Orientation::South).receive("F,L,f,B,R");
        assert_eq!(rover.position(), Vector::new(5, 4));
        assert_eq!(rover.orientation(), Orientation::South);
    }

    #[test]
    fn test_unknown_token_does_not_stop_stream() {
        let rover = Rover::default().receive("x,f");
        assert_eq!(rover.report(), "Could not parse [x] as a known command");
        assert_eq!(rover.position(), Vector::new(0, 1));
    }

    #[test]
    fn test_empty_stream_is_one_unknown_token() {
        let rover = Rover::default().receive("");
        assert_eq!(rover.errors(), ["Could not parse [] as a known command"]);
        assert_eq!(rover, Rover::default());
    }

    #[test]
    fn test_trailing_and_double_commas() {
        let rover = Rover::default().receive("f,,f,");
        assert_eq!(rover.position(), Vector::new(0, 2));
        assert_eq!(rover.errors().len(), 2);
    }

    #[test]
    fn test_errors_accumulate_in_order() {
        let rover = Rover::default().receive("x,f,Y,x");
        assert_eq!(
            rover.report(),
            "Could not parse [x] as a known command\n\
             Could not parse [Y] as a known command\n\
             Could not parse [x] as a known command"
        );
    }

    #[test]
    fn test_blocked_forward() {
        let rover = Rover::with_scanner(rock_at_0_1()).receive("f");
        assert_eq!(rover.position(), Vector::ZERO);
        assert_eq!(rover.orientation(), Orientation::North);
        assert_eq!(rover.report(), "rock");
    }

    #[test]
    fn test_obstacle_cleared_by_next_command() {
        let blocked = Rover::with_scanner(rock_at_0_1()).receive("f");
        assert!(blocked.obstacle().is_some());

        for next in ["r", "l", "b", "x"] {
            let rover = blocked.receive(next);
            assert!(rover.obstacle().is_none(), "obstacle kept after {next:?}");
        }
    }

    #[test]
    fn test_obstacle_reported_after_errors() {
        let rover = Rover::with_scanner(rock_at_0_1()).receive("q,f");
        assert_eq!(rover.report(), "Could not parse [q] as a known command\nrock");
    }

    #[test]
    fn test_halted_rover_can_go_around() {
        let rover = Rover::with_scanner(rock_at_0_1()).receive("f,r,f,l,f,f");
        assert_eq!(rover.position(), Vector::new(1, 2));
        assert_eq!(rover.orientation(), Orientation::North);
        assert_eq!(rover.report(), "");
    }

    #[test]
    fn test_retry_forward_hits_again() {
        let rover = Rover::with_scanner(rock_at_0_1()).receive("f,f");
        assert_eq!(rover.position(), Vector::ZERO);
        assert_eq!(rover.report(), "rock");
    }

    #[test]
    fn test_backward_never_blocked() {
        let always = ObstacleScanner::from_fn(|_| Some("wall".to_string()));
        for o in Orientation::ALL {
            let rover = Rover::new(Vector::ZERO, o).scanning(always.clone()).receive("b");
            assert_eq!(rover.position(), o.unit_vector().reversed());
            assert!(rover.obstacle().is_none());
        }
    }

    #[test]
    fn test_scanner_carried_through_transitions() {
        let rover = Rover::with_scanner(rock_at_0_1()).receive("r,l,x,b,f");
        assert_eq!(rover.position(), Vector::ZERO);
        assert_eq!(rover.scan(), Some("rock".to_string()));
    }

    #[test]
    fn test_snapshots_stay_valid() {
        let start = Rover::default();
        let moved = start.receive("f,f");
        let again = start.receive("r");

        assert_eq!(start.position(), Vector::ZERO);
        assert_eq!(moved.position(), Vector::new(0, 2));
        assert_eq!(again.orientation(), Orientation::East);
    }

    #[test]
    fn test_equality_ignores_errors_and_obstacle() {
        let clean = Rover::default().receive("f");
        let noisy = Rover::default().receive("x,f,zz");
        assert_eq!(clean, noisy);
        assert_ne!(clean.report(), noisy.report());

        let blocked = Rover::with_scanner(rock_at_0_1()).receive("f");
        assert_eq!(blocked, Rover::default());

        let set: HashSet<Rover> = [clean, noisy, blocked].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_trace() {
        let snapshots = Rover::default().trace("f,r,f");
        let poses: Vec<_> = snapshots
            .iter()
            .map(|r| (r.position(), r.orientation()))
            .collect();

        assert_eq!(
            poses,
            vec![
                (Vector::ZERO, Orientation::North),
                (Vector::new(0, 1), Orientation::North),
                (Vector::new(0, 1), Orientation::East),
                (Vector::new(1, 1), Orientation::East),
            ]
        );
        assert_eq!(snapshots.last(), Some(&Rover::default().receive("f,r,f")));
    }

    #[test]
    fn test_moves_wrap_at_grid_edges() {
        let top = Rover::new(Vector::new(0, i32::MAX), Orientation::North).receive("f");
        assert_eq!(top.position(), Vector::new(0, i32::MIN));

        let bottom = Rover::new(Vector::new(0, i32::MIN), Orientation::North).receive("b");
        assert_eq!(bottom.position(), Vector::new(0, i32::MAX));

        let west_edge = Rover::new(Vector::new(i32::MIN, 0), Orientation::East).receive("b,f");
        assert_eq!(west_edge.position(), Vector::new(i32::MIN, 0));
        assert_eq!(west_edge.report(), "");
    }

    #[test]
    fn test_display() {
        let rover = Rover::default().receive("f,f,f");
        assert_eq!(rover.to_string(), "Rover{position=(0, 3), orientation=NORTH}");
    }
}
