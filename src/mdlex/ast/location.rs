//! Position and location tracking
//!
//! A [`Position`] is the (row, column) of a single token: rows start at 1,
//! columns at 0. A [`Location`] spans from the first to the last token a node
//! consumed, both inclusive. Locations are always present; an empty node gets
//! the default `0:0..0:0`.

use crate::mdlex::lexer::Token;
use serde::Serialize;
use std::fmt;

/// Represents a position in source code (row and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    /// Position of the first character of any input
    pub const START: Position = Position { row: 1, column: 0 };

    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// Represents a location in source code (start and end positions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Location spanning the given tokens, from the first to the last
    pub fn covering(tokens: &[Token<'_>]) -> Self {
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => Self::new(first.position, last.position),
            _ => Self::default(),
        }
    }

    pub fn row_start(&self) -> usize {
        self.start.row
    }

    pub fn row_end(&self) -> usize {
        self.end.row
    }

    pub fn column_start(&self) -> usize {
        self.start.column
    }

    pub fn column_end(&self) -> usize {
        self.end.column
    }

    /// Check if a position is contained within this location
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos <= self.end
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdlex::lexer::tokenize;

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1, 5) < Position::new(2, 0));
        assert!(Position::new(2, 1) > Position::new(2, 0));
        assert_eq!(Position::START, Position::new(1, 0));
    }

    #[test]
    fn test_covering_tokens() {
        let tokens = tokenize("ab\ncd");
        let location = Location::covering(&tokens);
        assert_eq!(location.start, Position::new(1, 0));
        assert_eq!(location.end, Position::new(2, 1));
        assert_eq!(location.row_start(), 1);
        assert_eq!(location.row_end(), 2);
        assert_eq!(location.column_start(), 0);
        assert_eq!(location.column_end(), 1);
    }

    #[test]
    fn test_covering_nothing_is_default() {
        assert_eq!(Location::covering(&[]), Location::default());
    }

    #[test]
    fn test_contains() {
        let location = Location::new(Position::new(1, 2), Position::new(3, 0));
        assert!(location.contains(Position::new(2, 40)));
        assert!(location.contains(Position::new(1, 2)));
        assert!(!location.contains(Position::new(1, 1)));
        assert!(!location.contains(Position::new(3, 1)));
    }

    #[test]
    fn test_display() {
        let location = Location::new(Position::new(1, 0), Position::new(1, 4));
        assert_eq!(location.to_string(), "1:0..1:4");
    }
}
