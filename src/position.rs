use crate::config;
use crate::error::ParseError;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// A cell on the planet surface, in whole grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// An obstacle is just a blocked cell.
pub type Obstacle = Position;

impl Position {
    pub const ORIGIN: Position = Position {
        x: config::DEFAULT_START_X,
        y: config::DEFAULT_START_Y,
    };

    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

// Component-wise addition; wraps on i32 overflow so it never panics
impl Add for Position {
    type Output = Position;

    fn add(self, other: Position) -> Position {
        Position {
            x: self.x.wrapping_add(other.x),
            y: self.y.wrapping_add(other.y),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses "X,Y", optionally wrapped in parentheses: "3,4", "(3, 4)", "-1,0"
impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidPosition(s.to_string());
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let (x, y) = inner.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse::<i32>().map_err(|_| invalid())?;
        let y = y.trim().parse::<i32>().map_err(|_| invalid())?;
        Ok(Position { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(Position::new(1, 2) + Position::new(3, -5), Position::new(4, -3));
        assert_eq!(Position::ORIGIN + Position::new(0, 1), Position::new(0, 1));
    }

    #[test]
    fn test_add_wraps_on_overflow() {
        let edge = Position::new(i32::MAX, 0);
        assert_eq!(edge + Position::new(1, 0), Position::new(i32::MIN, 0));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Position::new(0, 1), Position { x: 0, y: 1 });
        assert_ne!(Position::new(0, 1), Position::new(1, 0));
        assert_eq!(Position::default(), Position::ORIGIN);
    }

    #[test]
    fn test_parse() {
        assert_eq!("3,4".parse::<Position>(), Ok(Position::new(3, 4)));
        assert_eq!(" (-1, 7) ".parse::<Position>(), Ok(Position::new(-1, 7)));
        assert_eq!(
            "3;4".parse::<Position>(),
            Err(ParseError::InvalidPosition("3;4".to_string()))
        );
        assert!("a,1".parse::<Position>().is_err());
        assert!("1,".parse::<Position>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(-2, 9).to_string(), "(-2, 9)");
    }
}
