//! Heading matcher: `#`×(1..=6), a space, then the heading text

use super::{BlockMatcher, Cursor, Parsed};
use crate::mdlex::ast::elements::heading::MAX_HEADING_LEVEL;
use crate::mdlex::ast::{Block, Heading, TextParent};
use crate::mdlex::lexer::utilities::{ahead, is_sign, is_space, is_text_like};
use crate::mdlex::lexer::Token;
use crate::mdlex::parser::error::ParseResult;
use crate::mdlex::parser::text::parse_text;

fn count_hashes(rest: &[Token<'_>]) -> usize {
    rest.iter().take_while(|t| t.value == "#").count()
}

pub struct HeaderMatcher;

impl BlockMatcher for HeaderMatcher {
    fn name(&self) -> &'static str {
        "header"
    }

    fn matches(&self, rest: &[Token<'_>]) -> bool {
        let level = count_hashes(rest);
        if !(1..=MAX_HEADING_LEVEL).contains(&level) || !is_space(ahead(rest, level)) {
            return false;
        }
        let content = ahead(rest, level + 1);
        is_text_like(content) || is_sign(content)
    }

    fn parse(&self, tokens: &[Token<'_>], cursor: Cursor) -> ParseResult<Parsed> {
        let level = count_hashes(ahead(tokens, cursor.index));
        let prefix = "#".repeat(level);
        let parsed = parse_text(tokens, cursor.index + level + 1, TextParent::Heading)?;

        let heading = Heading::new(
            cursor.indent(tokens),
            prefix,
            parsed.text,
            cursor.location_to(tokens, parsed.next),
        );
        Ok(Parsed {
            block: Block::Heading(heading),
            next: parsed.next,
        })
    }
}
