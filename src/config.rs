//! Configuration constants for the rover simulation.

// Planet defaults
pub const DEFAULT_PLANET_WIDTH: i32 = 100; // Declared width of the default planet
pub const DEFAULT_PLANET_HEIGHT: i32 = 100; // Declared height of the default planet
pub const MIN_PLANET_BOUND: i32 = 2; // Smallest bound that still yields a non-zero wrap modulus
pub const MAX_SCATTERED_OBSTACLES: usize = 1_000_000; // Upper limit for one random obstacle scatter

// Rover defaults
pub const DEFAULT_START_X: i32 = 0;
pub const DEFAULT_START_Y: i32 = 0;

// Command symbols (case-insensitive)
pub const FORWARD_SYMBOL: char = 'f';
pub const RIGHT_SYMBOL: char = 'r';
pub const COMMAND_SEPARATORS: [char; 1] = [','];

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";
