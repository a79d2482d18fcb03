//! Text parser
//!
//! Consumes one logical line for any block that carries text. The line is
//! split into literal runs of text-like tokens and whatever the inline
//! matchers make of each sign. The terminating line ending, if present, is
//! consumed and kept as the last literal child.

use super::error::{ParseError, ParseResult, ParseStage};
use super::inline::{parse_inline, InlineMatcher, INLINE_MATCHERS};
use crate::mdlex::ast::{Location, Text, TextChild, TextParent};
use crate::mdlex::lexer::utilities::{consume_until, is_newline, is_not_text_like, is_text_like};
use crate::mdlex::lexer::Token;
use tracing::error;

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedText {
    pub text: Text,
    /// Index of the first token after the line (and its line ending)
    pub next: usize,
}

/// Parse the line starting at `tokens[start]` as text owned by `parent`
pub fn parse_text(tokens: &[Token<'_>], start: usize, parent: TextParent) -> ParseResult<ParsedText> {
    parse_text_with(tokens, start, parent, INLINE_MATCHERS)
}

fn parse_text_with(
    tokens: &[Token<'_>],
    start: usize,
    parent: TextParent,
    matchers: &[&dyn InlineMatcher],
) -> ParseResult<ParsedText> {
    let mut children = Vec::new();
    let mut index = start;

    while index < tokens.len() && !is_newline(&tokens[index..]) {
        let before = index;

        if is_text_like(&tokens[index..]) {
            match consume_until(tokens, index, is_not_text_like, is_newline) {
                Some(run) => {
                    children.push(TextChild::Literal(run.text));
                    index = run.index;
                }
                None => break,
            }
        } else {
            let parsed = parse_inline(tokens, index, matchers);
            children.push(parsed.child);
            index = parsed.next;
        }

        if index <= before {
            let position = tokens[before].position;
            error!(%position, "text parser made no progress");
            return Err(ParseError::NoProgress {
                position,
                stage: ParseStage::TextLine,
            });
        }
    }

    if let Some(ending) = tokens.get(index).filter(|t| t.kind.is_line_ending()) {
        children.push(TextChild::Literal(ending.value.to_string()));
        index += 1;
    }

    let location = Location::covering(tokens.get(start..index).unwrap_or(&[]));
    Ok(ParsedText {
        text: Text::new(parent, children, location),
        next: index,
    })
}
