//! Detokenizer for mdlex
//!
//! This module provides functionality to convert a stream of tokens back into a string.
use crate::mdlex::lexer::tokens::Token;

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token<'_>]) -> String {
    let mut result = String::new();
    for token in tokens {
        result.push_str(token.value);
    }
    result
}
