// Error types: geometry construction, command parsing, configuration

use thiserror::Error;

/// Geometry Errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("Degenerate bounding box ({x1}, {y1}, {x2}, {y2}): need x1 < x2 and y1 < y2")]
    Degenerate { x1: f64, y1: f64, x2: f64, y2: f64 },
}

/// Command Errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command or key name '{0}'")]
    Unknown(String),
    #[error("Empty command in script at position {0}")]
    Empty(usize),
}

/// Configuration Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("Arena {arena_width}x{arena_height} cannot hold a {size}x{size} turning robot")]
    ArenaTooSmall {
        arena_width: f64,
        arena_height: f64,
        size: f64,
    },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
