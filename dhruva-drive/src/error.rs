//! Error types for DhruvaDrive

use thiserror::Error;
use vastu_rover::ConfigLoadError;

/// DhruvaDrive error type
#[derive(Error, Debug)]
pub enum DriveError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("Scenario {name} failed: {details}")]
    ScenarioFailed { name: String, details: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, DriveError>;
