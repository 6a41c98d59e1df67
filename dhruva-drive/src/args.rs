//! Command line arguments

use std::path::PathBuf;

use clap::Parser;
use vastu_rover::ObstacleEntry;

/// Drive a rover over an obstacle grid with a comma-separated command stream.
///
/// Examples:
///   dhruva-drive "f,f,r,f"
///   dhruva-drive --obstacle 0,2:rock "f,f,f"
///   dhruva-drive --scenario tests/scenarios/detour.yaml
///
/// Enable per-command logging:
///   RUST_LOG=debug dhruva-drive "f,x,b"
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command stream, e.g. "f,f,r,f" (letters f, b, l, r; case-insensitive)
    #[arg(required_unless_present = "scenario", conflicts_with = "scenario")]
    pub commands: Option<String>,

    /// Configuration file (defaults to configs/rover.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Extra obstacle as X,Y or X,Y:DESCRIPTION (repeatable)
    #[arg(long = "obstacle", value_name = "X,Y[:DESCRIPTION]", allow_hyphen_values = true)]
    pub obstacles: Vec<ObstacleEntry>,

    /// Print every intermediate rover
    #[arg(long)]
    pub trace: bool,

    /// Run a scenario file instead of a command stream
    #[arg(long, value_name = "PATH")]
    pub scenario: Option<PathBuf>,
}
