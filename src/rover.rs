use crate::command::Command;
use crate::direction::Direction;
use crate::planet::Planet;
use crate::position::{Obstacle, Position};
use std::fmt;

// Progress of a single command batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriveStatus {
    Driving,
    Halted(Obstacle), // Blocked by this obstacle; the rest of the batch is ignored
}

/// A rover on a planet. Values are never changed in place; every command batch
/// yields a new rover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rover {
    position: Position,
    direction: Direction,
    planet: Planet,
}

/// Outcome of one command batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traverse {
    pub rover: Rover,
    pub executed: usize, // Commands applied, counting the blocked Forward
    pub blocked_by: Option<Obstacle>,
}

impl Traverse {
    pub fn halted(&self) -> bool {
        self.blocked_by.is_some()
    }
}

impl Rover {
    pub fn new(position: Position, direction: Direction, planet: Planet) -> Self {
        Rover {
            position,
            direction,
            planet,
        }
    }

    pub fn at(self, position: Position) -> Self {
        Rover { position, ..self }
    }

    pub fn facing(self, direction: Direction) -> Self {
        Rover { direction, ..self }
    }

    pub fn on(self, planet: Planet) -> Self {
        Rover { planet, ..self }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn planet(&self) -> &Planet {
        &self.planet
    }

    /// Applies `commands` in order and returns the resulting rover.
    pub fn receive(&self, commands: &[Command]) -> Rover {
        self.drive(commands).rover
    }

    /// Like `receive`, but also reports how far the batch got.
    /// Once a Forward is blocked by an obstacle, every later command in the batch is a no-op.
    /// Halting does not carry over to the next batch.
    pub fn drive(&self, commands: &[Command]) -> Traverse {
        let (rover, status, executed) = commands.iter().enumerate().fold(
            (self.clone(), DriveStatus::Driving, 0),
            |(rover, status, executed), (step, &command)| match status {
                DriveStatus::Halted(obstacle) => {
                    crate::debug_drive!(
                        step,
                        "Ignoring '{}', halted by obstacle at {}",
                        command,
                        obstacle
                    );
                    (rover, status, executed)
                }
                DriveStatus::Driving => {
                    let (next, status) = rover.apply(step, command);
                    (next, status, executed + 1)
                }
            },
        );

        let blocked_by = match status {
            DriveStatus::Halted(obstacle) => Some(obstacle),
            DriveStatus::Driving => None,
        };
        Traverse {
            rover,
            executed,
            blocked_by,
        }
    }

    // Single command transition
    fn apply(self, step: usize, command: Command) -> (Rover, DriveStatus) {
        match command {
            Command::Forward => self.move_forward(step),
            Command::Right => (self.turn_right(step), DriveStatus::Driving),
        }
    }

    fn turn_right(self, step: usize) -> Rover {
        let direction = self.direction.turn_right();
        crate::debug_drive!(step, "Turned right: {} -> {}", self.direction, direction);
        Rover { direction, ..self }
    }

    fn move_forward(self, step: usize) -> (Rover, DriveStatus) {
        let target = self.planet.bound(self.position + self.direction.unit_vector());

        if self.planet.has_obstacle(target) {
            log::info!(
                target: "drive",
                "Obstacle at {} blocks move from {} heading {}, halting",
                target,
                self.position,
                self.direction
            );
            return (self, DriveStatus::Halted(target));
        }

        crate::debug_drive!(step, "Moved {}: {} -> {}", self.direction, self.position, target);
        (
            Rover {
                position: target,
                ..self
            },
            DriveStatus::Driving,
        )
    }
}

// Default rover: origin, facing North, on the default planet
impl Default for Rover {
    fn default() -> Self {
        Rover::new(Position::ORIGIN, Direction::North, Planet::default())
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.position, self.direction)
    }
}
