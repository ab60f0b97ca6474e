use crate::error::ParseError;
use crate::position::Position;
use std::fmt;
use std::str::FromStr;

/// Compass heading of a rover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Clockwise order; turning right steps one slot forward
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    pub fn turn_right(self) -> Direction {
        Self::CLOCKWISE[(self.index() + 1) % Self::CLOCKWISE.len()]
    }

    /// One grid step in this heading
    pub fn unit_vector(self) -> Position {
        match self {
            Direction::North => Position::new(0, 1),
            Direction::East => Position::new(1, 0),
            Direction::South => Position::new(0, -1),
            Direction::West => Position::new(-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "e" | "east" => Ok(Direction::East),
            "s" | "south" => Ok(Direction::South),
            "w" | "west" => Ok(Direction::West),
            _ => Err(ParseError::InvalidDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_right_cycle() {
        assert_eq!(Direction::North.turn_right(), Direction::East);
        assert_eq!(Direction::East.turn_right(), Direction::South);
        assert_eq!(Direction::South.turn_right(), Direction::West);
        assert_eq!(Direction::West.turn_right(), Direction::North);
    }

    #[test]
    fn test_four_turns_is_identity() {
        for start in Direction::CLOCKWISE {
            let turned = start.turn_right().turn_right().turn_right().turn_right();
            assert_eq!(turned, start, "Four right turns from {} should return", start);
        }
    }

    #[test]
    fn test_unit_vectors() {
        assert_eq!(Direction::North.unit_vector(), Position::new(0, 1));
        assert_eq!(Direction::East.unit_vector(), Position::new(1, 0));
        assert_eq!(Direction::South.unit_vector(), Position::new(0, -1));
        assert_eq!(Direction::West.unit_vector(), Position::new(-1, 0));
    }

    #[test]
    fn test_parse() {
        assert_eq!("north".parse::<Direction>(), Ok(Direction::North));
        assert_eq!("E".parse::<Direction>(), Ok(Direction::East));
        assert_eq!(" South ".parse::<Direction>(), Ok(Direction::South));
        assert_eq!("w".parse::<Direction>(), Ok(Direction::West));
        assert_eq!(
            "up".parse::<Direction>(),
            Err(ParseError::InvalidDirection("up".to_string()))
        );
    }

    #[test]
    fn test_default_is_north() {
        assert_eq!(Direction::default(), Direction::North);
    }
}
