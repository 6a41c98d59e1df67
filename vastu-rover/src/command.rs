//! Rover commands: parsing tokens and applying them to a rover.
//!
//! Command streams are comma-separated single-letter tokens:
//!
//! | Token | Command |
//! |-------|---------|
//! | `r` | turn right |
//! | `l` | turn left |
//! | `f` | move forward (may be blocked by an obstacle) |
//! | `b` | move backward (never blocked) |
//!
//! Letters are case-insensitive. Anything else, including the empty token,
//! parses to [`Command::Unknown`] and is recorded as an error when executed.
//! Parsing never fails.

use std::fmt;

use log::{debug, info};

use crate::rover::Rover;

/// Token separator in a command stream
pub const COMMAND_SEPARATOR: char = ',';

/// One parsed instruction
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Rotate 90° clockwise
    TurnRight,
    /// Rotate 90° counter-clockwise
    TurnLeft,
    /// Step one cell along the heading, unless the scanner objects
    Forward,
    /// Step one cell against the heading
    Backward,
    /// Unrecognised token, kept verbatim for the error message
    Unknown(String),
}

impl Command {
    /// Parse a single raw token
    pub fn parse(token: &str) -> Command {
        match token.to_lowercase().as_str() {
            "r" => Command::TurnRight,
            "l" => Command::TurnLeft,
            "f" => Command::Forward,
            "b" => Command::Backward,
            _ => Command::Unknown(token.to_string()),
        }
    }

    /// Split a comma-separated stream and parse every token in order.
    ///
    /// Empty segments are kept and parse as unknown commands.
    pub fn parse_stream(commands: &str) -> Vec<Command> {
        commands.split(COMMAND_SEPARATOR).map(Command::parse).collect()
    }

    /// Error message recorded for an unrecognised token
    pub fn unknown_message(token: &str) -> String {
        format!("Could not parse [{}] as a known command", token)
    }

    /// Apply this command to a rover, producing the next snapshot.
    pub fn execute(&self, rover: &Rover) -> Rover {
        match self {
            Command::TurnRight => rover.turned(rover.orientation().turn_right()),
            Command::TurnLeft => rover.turned(rover.orientation().turn_left()),
            Command::Forward => match rover.scan() {
                Some(description) => {
                    info!(
                        "Forward move from {} facing {} blocked: {}",
                        rover.position(),
                        rover.orientation(),
                        description
                    );
                    rover.stopped(description)
                }
                None => rover.moved(rover.position() + rover.orientation().unit_vector()),
            },
            Command::Backward => {
                rover.moved(rover.position() + rover.orientation().unit_vector().reversed())
            }
            Command::Unknown(token) => {
                debug!("Unknown command token {:?}", token);
                rover.with_error(Command::unknown_message(token))
            }
        }
    }
}

impl From<&str> for Command {
    fn from(token: &str) -> Self {
        Command::parse(token)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::TurnRight => f.write_str("r"),
            Command::TurnLeft => f.write_str("l"),
            Command::Forward => f.write_str("f"),
            Command::Backward => f.write_str("b"),
            Command::Unknown(token) => write!(f, "{}", token),
        }
    }
}
