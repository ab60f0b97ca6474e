// Rover commands and the parser for command strings such as "ffrff"

use crate::config;
use crate::error::ParseError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Forward,
    Right,
}

impl Command {
    /// Maps a single command symbol, case-insensitive
    pub fn from_symbol(symbol: char) -> Option<Command> {
        match symbol.to_ascii_lowercase() {
            config::FORWARD_SYMBOL => Some(Command::Forward),
            config::RIGHT_SYMBOL => Some(Command::Right),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Command::Forward => config::FORWARD_SYMBOL,
            Command::Right => config::RIGHT_SYMBOL,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parses a command string into an ordered batch.
/// Whitespace and separators are skipped; `index` in errors is the char offset.
pub fn parse_commands(source: &str) -> Result<Vec<Command>, ParseError> {
    let mut commands = Vec::with_capacity(source.len());

    for (index, symbol) in source.chars().enumerate() {
        if symbol.is_whitespace() || config::COMMAND_SEPARATORS.contains(&symbol) {
            continue;
        }
        match Command::from_symbol(symbol) {
            Some(command) => commands.push(command),
            None => return Err(ParseError::UnknownCommand { symbol, index }),
        }
    }

    log::trace!(target: "drive", "Parsed {} commands from {:?}", commands.len(), source);
    Ok(commands)
}
