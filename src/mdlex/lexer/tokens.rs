//! Token definitions for mdlex
//!
//! Every token is a single classified character. Classification is done by the
//! logos derive below; characters no pattern accepts are reported by logos as
//! errors and turned into [`TokenKind::Unknown`] tokens by the lexer.
//! The only multi-character token is a folded `\r\n` pair.
use crate::mdlex::ast::Position;
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All token kinds the lexer produces
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    #[regex("[0-9]")]
    Digit,

    #[regex("[A-Za-z]")]
    Letter,

    // ASCII punctuation
    #[regex(r##"[!"#$%&'()*+,\-./:;<=>?@\[\\\]^_`{|}~]"##)]
    Sign,

    #[token(" ")]
    Space,

    #[token("\n")]
    Newline,

    // A following '\n' is absorbed into the same token
    #[regex(r"\r\n?")]
    CarriageReturn,

    // Non-ASCII characters. Unclassified ASCII (tabs, control characters)
    // comes back from logos as an error and is mapped here by the lexer.
    #[regex(r"[^\x00-\x7F]")]
    Unknown,
}

impl TokenKind {
    /// Kinds that the text parser consumes as plain literal runs
    pub const TEXT_LIKE: [TokenKind; 4] = [
        TokenKind::Letter,
        TokenKind::Digit,
        TokenKind::Space,
        TokenKind::Unknown,
    ];

    /// Kinds that terminate a line
    pub const LINE_ENDINGS: [TokenKind; 2] = [TokenKind::Newline, TokenKind::CarriageReturn];

    pub fn is_text_like(self) -> bool {
        Self::TEXT_LIKE.contains(&self)
    }

    pub fn is_line_ending(self) -> bool {
        Self::LINE_ENDINGS.contains(&self)
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Digit => "digit",
            TokenKind::Letter => "letter",
            TokenKind::Sign => "sign",
            TokenKind::Space => "space",
            TokenKind::Newline => "newline",
            TokenKind::CarriageReturn => "carriage-return",
            TokenKind::Unknown => "unknown",
        }
    }
}

/// A classified, positioned slice of the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
    pub position: Position,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, value: &'a str, position: Position) -> Self {
        Self {
            kind,
            value,
            position,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Space | TokenKind::Newline | TokenKind::CarriageReturn => {
                write!(f, "<{}>", self.kind.name())
            }
            _ => write!(f, "<{}:{}>", self.kind.name(), self.value),
        }
    }
}
