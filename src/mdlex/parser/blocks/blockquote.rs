//! Blockquote matcher: `> ` followed by text

use super::{BlockMatcher, Cursor, Parsed};
use crate::mdlex::ast::elements::blockquote::QUOTE_PREFIX;
use crate::mdlex::ast::{Block, Blockquote, TextParent};
use crate::mdlex::lexer::utilities::{ahead, compare_value, is_space, is_text_like};
use crate::mdlex::lexer::Token;
use crate::mdlex::parser::error::ParseResult;
use crate::mdlex::parser::text::parse_text;

pub struct BlockquoteMatcher;

impl BlockMatcher for BlockquoteMatcher {
    fn name(&self) -> &'static str {
        "blockquote"
    }

    fn matches(&self, rest: &[Token<'_>]) -> bool {
        compare_value(rest.first(), QUOTE_PREFIX)
            && is_space(ahead(rest, 1))
            && is_text_like(ahead(rest, 2))
    }

    fn parse(&self, tokens: &[Token<'_>], cursor: Cursor) -> ParseResult<Parsed> {
        let parsed = parse_text(tokens, cursor.index + 2, TextParent::Blockquote)?;
        let quote = Blockquote::new(
            cursor.indent(tokens),
            parsed.text,
            cursor.location_to(tokens, parsed.next),
        );
        Ok(Parsed {
            block: Block::Blockquote(quote),
            next: parsed.next,
        })
    }
}
