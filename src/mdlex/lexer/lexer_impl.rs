//! Implementation of the mdlex lexer
//!
//! Classification is handled by logos; this module adds positions and turns
//! logos errors into `Unknown` tokens.

use crate::mdlex::ast::Position;
use crate::mdlex::lexer::tokens::{Token, TokenKind};
use logos::Logos;

/// Tokenize a string into positioned tokens. Never fails.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::with_capacity(source.len());
    let mut position = Position::START;

    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        match result {
            Ok(kind) => push_token(&mut tokens, &mut position, kind, slice),
            Err(()) => {
                for (offset, ch) in slice.char_indices() {
                    let value = &slice[offset..offset + ch.len_utf8()];
                    push_token(&mut tokens, &mut position, TokenKind::Unknown, value);
                }
            }
        }
    }

    tokens
}

fn push_token<'a>(
    tokens: &mut Vec<Token<'a>>,
    position: &mut Position,
    kind: TokenKind,
    value: &'a str,
) {
    tokens.push(Token::new(kind, value, *position));
    *position = if value.ends_with('\n') {
        Position::new(position.row + 1, 0)
    } else {
        Position::new(position.row, position.column + 1)
    };
}
