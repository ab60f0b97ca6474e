//! Planetary rover simulation: a rover folds a batch of commands over a
//! toroidal planet, halting for the rest of the batch when an obstacle blocks it.

pub mod command;
pub mod config;
pub mod direction;
pub mod error;
pub mod logging;
pub mod planet;
pub mod position;
pub mod rover;

pub use command::{Command, parse_commands};
pub use direction::Direction;
pub use error::{ParseError, PlanetError};
pub use planet::Planet;
pub use position::{Obstacle, Position};
pub use rover::{Rover, Traverse};
