//! Error types for parsing
//!
//! Malformed markdown is never an error: it degrades to a paragraph or to
//! literal text. The only failure is the parser itself failing to advance,
//! which means a matcher broke its contract.

use crate::mdlex::ast::Position;
use std::fmt;

/// The loop in which the parser stalled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    BlockDispatch,
    TextLine,
}

impl fmt::Display for ParseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStage::BlockDispatch => write!(f, "block dispatch"),
            ParseStage::TextLine => write!(f, "text line"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A dispatch iteration ended at the token it started on
    NoProgress {
        position: Position,
        stage: ParseStage,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NoProgress { position, stage } => write!(
                f,
                "Parser stuck during {}: no progress at [{}, {}]",
                stage, position.row, position.column
            ),
        }
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;
