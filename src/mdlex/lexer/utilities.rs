//! Token utilities shared by every parsing layer
//!
//! Predicates here take the *remaining* token slice rather than a single token:
//! `rest.first()` is the current token and `rest.get(k)` looks `k` tokens ahead.
//! All predicates are total and return `false` past the end of input.
//!
//! The two scanning primitives are [`consume_until`], which accumulates literal
//! token values up to a stop condition, and [`extract_between_delimiters`],
//! which uses it to pull delimiter-bounded inline content out of a line and
//! degrades to plain text when the closing delimiter is missing.

use crate::mdlex::ast::Delimited;
use crate::mdlex::lexer::tokens::{Token, TokenKind};

/// Null-safe kind comparison
pub fn compare_kind(token: Option<&Token<'_>>, kind: TokenKind) -> bool {
    token.is_some_and(|t| t.kind == kind)
}

/// Null-safe value comparison
pub fn compare_value(token: Option<&Token<'_>>, value: &str) -> bool {
    token.is_some_and(|t| t.value == value)
}

/// Null-safe membership test over a set of kinds
pub fn compare_kind_among(token: Option<&Token<'_>>, kinds: &[TokenKind]) -> bool {
    token.is_some_and(|t| kinds.contains(&t.kind))
}

/// The slice `k` tokens further on; empty past the end of input
pub fn ahead<'t, 'a>(rest: &'t [Token<'a>], k: usize) -> &'t [Token<'a>] {
    rest.get(k..).unwrap_or(&[])
}

/// Current token ends a line (`\n`, `\r` or `\r\n`)
pub fn is_newline(rest: &[Token<'_>]) -> bool {
    compare_kind_among(rest.first(), &TokenKind::LINE_ENDINGS)
}

pub fn is_space(rest: &[Token<'_>]) -> bool {
    compare_kind(rest.first(), TokenKind::Space)
}

/// Current token belongs to a literal text run
pub fn is_text_like(rest: &[Token<'_>]) -> bool {
    compare_kind_among(rest.first(), &TokenKind::TEXT_LIKE)
}

pub fn is_not_text_like(rest: &[Token<'_>]) -> bool {
    !is_text_like(rest)
}

/// Current token may open an inline element
pub fn is_sign(rest: &[Token<'_>]) -> bool {
    compare_kind(rest.first(), TokenKind::Sign)
}

/// Escape condition that never fires
pub fn never(_rest: &[Token<'_>]) -> bool {
    false
}

/// Literal text accumulated by [`consume_until`] and the index it stopped at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consumed {
    pub text: String,
    pub index: usize,
}

/// Accumulate token values from `start` until `stop` holds or input ends.
///
/// Returns `None` when there is no token at `start`, or when `escape` holds
/// for a token before `stop` does. `None` means "no match here": callers fall
/// back to a less specific interpretation.
pub fn consume_until<S, E>(
    tokens: &[Token<'_>],
    start: usize,
    stop: S,
    escape: E,
) -> Option<Consumed>
where
    S: Fn(&[Token<'_>]) -> bool,
    E: Fn(&[Token<'_>]) -> bool,
{
    let first = tokens.get(start..).filter(|rest| !rest.is_empty())?;
    if escape(first) {
        return None;
    }

    let mut text = String::new();
    let mut index = start;
    while index < tokens.len() {
        let rest = &tokens[index..];
        if stop(rest) {
            break;
        }
        if escape(rest) {
            return None;
        }
        text.push_str(rest[0].value);
        index += 1;
    }

    Some(Consumed { text, index })
}

/// The literal prefix and suffix of an inline element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters<'d> {
    pub prefix: &'d str,
    pub suffix: &'d str,
}

impl<'d> Delimiters<'d> {
    pub fn new(prefix: &'d str, suffix: &'d str) -> Self {
        Self { prefix, suffix }
    }

    /// Same string on both sides, as for `*`, `**` and `` ` ``
    pub fn symmetric(delimiter: &'d str) -> Self {
        Self::new(delimiter, delimiter)
    }
}

/// What [`extract_between_delimiters`] found
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    /// Both delimiters were present on the line
    Delimited(Delimited),
    /// The closing delimiter was missing; the rest of the line as plain text
    Literal(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub content: Extracted,
    pub index: usize,
}

/// Extract the content between `delimiters`, starting at the prefix at `start`.
///
/// The prefix is skipped by length (one token per character), then content is
/// consumed until `close` holds, without crossing a line ending. On success the
/// returned index points just past the suffix. If the line (or the input) ends
/// first, the whole rest of the line from `start` is returned as literal text.
pub fn extract_between_delimiters<C>(
    tokens: &[Token<'_>],
    delimiters: Delimiters<'_>,
    start: usize,
    close: C,
) -> Extraction
where
    C: Fn(&[Token<'_>]) -> bool,
{
    let body_start = start + delimiters.prefix.chars().count();

    if let Some(body) = consume_until(tokens, body_start, &close, is_newline) {
        // Running off the end of input means the suffix never showed up
        if body.index < tokens.len() {
            return Extraction {
                content: Extracted::Delimited(Delimited::new(
                    delimiters.prefix,
                    body.text,
                    delimiters.suffix,
                )),
                index: body.index + delimiters.suffix.chars().count(),
            };
        }
    }

    match consume_until(tokens, start, is_newline, never) {
        Some(line) => Extraction {
            content: Extracted::Literal(line.text),
            index: line.index,
        },
        None => Extraction {
            content: Extracted::Literal(delimiters.prefix.to_string()),
            index: body_start,
        },
    }
}
