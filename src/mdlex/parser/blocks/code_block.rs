//! Code block matcher
//!
//! Opens on three backticks and runs to the next three backticks, across any
//! number of lines. Without a closing fence the line is a paragraph.

use super::paragraph::ParagraphMatcher;
use super::{BlockMatcher, Cursor, Parsed};
use crate::mdlex::ast::elements::code_block::FENCE;
use crate::mdlex::ast::{Block, CodeBlock};
use crate::mdlex::lexer::utilities::{compare_value, consume_until, never};
use crate::mdlex::lexer::Token;
use crate::mdlex::parser::error::ParseResult;
use tracing::trace;

const FENCE_LEN: usize = 3;

fn is_fence(rest: &[Token<'_>]) -> bool {
    (0..FENCE_LEN).all(|k| compare_value(rest.get(k), "`"))
}

pub struct CodeBlockMatcher;

impl BlockMatcher for CodeBlockMatcher {
    fn name(&self) -> &'static str {
        "code-block"
    }

    fn matches(&self, rest: &[Token<'_>]) -> bool {
        is_fence(rest)
    }

    fn parse(&self, tokens: &[Token<'_>], cursor: Cursor) -> ParseResult<Parsed> {
        let body_start = cursor.index + FENCE_LEN;
        let body = consume_until(tokens, body_start, is_fence, never)
            .filter(|body| body.index < tokens.len());

        let Some(body) = body else {
            trace!(position = %tokens[cursor.index].position, "unclosed {}", FENCE);
            return ParagraphMatcher.parse(tokens, cursor);
        };

        let next = body.index + FENCE_LEN;
        let block = CodeBlock::new(
            cursor.indent(tokens),
            body.text,
            cursor.location_to(tokens, next),
        );
        Ok(Parsed {
            block: Block::CodeBlock(block),
            next,
        })
    }
}
