// Error types: planet construction errors, command/position parsing errors

use thiserror::Error;

/// Planet Errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PlanetError {
    #[error("Planet bounds must both be greater than 1 (got {max_x}x{max_y})")]
    DegenerateBounds { max_x: i32, max_y: i32 },
    #[error("Obstacle density must be within 0.0..=1.0 (got {0})")]
    InvalidDensity(f64),
    #[error("Cannot scatter {requested} obstacles, limit is {limit}")]
    TooManyObstacles { requested: i64, limit: usize },
}

/// Parse Errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command '{symbol}' at index {index}")]
    UnknownCommand { symbol: char, index: usize },
    #[error("Invalid position '{0}', expected X,Y")]
    InvalidPosition(String),
    #[error("Invalid direction '{0}', expected north, east, south or west")]
    InvalidDirection(String),
}
