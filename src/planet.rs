use crate::config::*;
use crate::error::PlanetError;
use crate::position::{Obstacle, Position};
use rand::Rng;
use std::collections::HashSet;

// Represents the toroidal surface a rover drives on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    max_x: i32,
    max_y: i32,
    obstacles: Vec<Obstacle>, // Kept in insertion order
}

impl Planet {
    pub fn new(max_x: i32, max_y: i32) -> Result<Self, PlanetError> {
        Self::with_obstacles(max_x, max_y, Vec::new())
    }

    /// Both bounds must be at least `MIN_PLANET_BOUND`, since `bound` wraps by `max - 1`.
    pub fn with_obstacles(
        max_x: i32,
        max_y: i32,
        obstacles: Vec<Obstacle>,
    ) -> Result<Self, PlanetError> {
        if max_x < MIN_PLANET_BOUND || max_y < MIN_PLANET_BOUND {
            return Err(PlanetError::DegenerateBounds { max_x, max_y });
        }
        Ok(Planet {
            max_x,
            max_y,
            obstacles,
        })
    }

    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    // Wraps a position around the surface. The modulus is `max - 1` on each axis,
    // and `%` truncates, so negative coordinates stay negative.
    pub fn bound(&self, position: Position) -> Position {
        Position {
            x: position.x % (self.max_x - 1),
            y: position.y % (self.max_y - 1),
        }
    }

    pub fn has_obstacle(&self, position: Position) -> bool {
        self.obstacles.contains(&position)
    }

    /// Returns a copy of this planet with obstacles scattered over the wrapped grid.
    /// Places `floor(cells * density)` new obstacles on distinct free cells, never on
    /// the origin. Existing obstacles are kept and counted as occupied.
    pub fn scatter_obstacles<R: Rng>(
        &self,
        density: f64,
        rng: &mut R,
    ) -> Result<Planet, PlanetError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(PlanetError::InvalidDensity(density));
        }

        let width = self.max_x - 1;
        let height = self.max_y - 1;
        let total_cells = width as i64 * height as i64;

        // Keep track of occupied cells to avoid duplicates
        let mut occupied: HashSet<Position> = self
            .obstacles
            .iter()
            .copied()
            .filter(|p| (0..width).contains(&p.x) && (0..height).contains(&p.y))
            .collect();
        occupied.insert(Position::ORIGIN);

        let requested = (total_cells as f64 * density).floor() as i64;
        let free_cells = total_cells - occupied.len() as i64;
        let wanted = requested.min(free_cells).max(0);
        let num_obstacles = usize::try_from(wanted)
            .ok()
            .filter(|&n| n <= MAX_SCATTERED_OBSTACLES)
            .ok_or(PlanetError::TooManyObstacles {
                requested: wanted,
                limit: MAX_SCATTERED_OBSTACLES,
            })?;

        log::info!(target: "planet", "Placing {} obstacles...", num_obstacles);
        let mut obstacles = self.obstacles.clone();
        obstacles.reserve(num_obstacles);

        for _ in 0..num_obstacles {
            // Find an empty cell
            loop {
                let candidate = Position::new(rng.gen_range(0..width), rng.gen_range(0..height));
                if occupied.insert(candidate) {
                    crate::debug_planet!("Placed obstacle at {}", candidate);
                    obstacles.push(candidate);
                    break;
                }
            }
        }
        log::info!(target: "planet", "Obstacles placed.");

        Ok(Planet {
            max_x: self.max_x,
            max_y: self.max_y,
            obstacles,
        })
    }
}

// Default planet: 100x100 with a clear surface
impl Default for Planet {
    fn default() -> Self {
        Planet {
            max_x: DEFAULT_PLANET_WIDTH,
            max_y: DEFAULT_PLANET_HEIGHT,
            obstacles: Vec::new(),
        }
    }
}
