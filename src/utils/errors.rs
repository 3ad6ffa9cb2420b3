use std::io;
use thiserror::Error;

/// Errors raised while loading or validating a drone configuration.
///
/// The flight controller itself never fails at runtime; every rejected decision
/// degrades to "no movement". Only the configuration surface reports errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid flight configuration: {0}")]
    ValidationError(String),
}
