//! Lexer module for mdlex
//!
//! This module turns markdown source into a flat, random-access sequence of
//! single-character tokens. Each token knows its kind, its exact source text
//! and its (row, column) position. Rows start at 1, columns at 0; consuming a
//! newline (alone or as part of `\r\n`) moves to the next row.
//!
//! Everything above the lexer works on slices of this sequence. Lookahead is
//! plain indexing into the remaining slice, so there is no linked token
//! structure and no re-scanning of the source.
//!
//! The lexer is total: any string tokenizes, and concatenating the token
//! values gives back the input (see [`detokenize`]).

pub mod detokenizer;
pub mod lexer_impl;
pub mod tokens;
pub mod utilities;

pub use detokenizer::detokenize;
pub use lexer_impl::tokenize;
pub use tokens::{Token, TokenKind};
