use super::{BlockMatcher, Cursor, Parsed};
use crate::mdlex::ast::{Block, Paragraph, TextParent};
use crate::mdlex::lexer::Token;
use crate::mdlex::parser::error::ParseResult;
use crate::mdlex::parser::text::parse_text;

/// Fallback matcher: the rest of the line as text
pub struct ParagraphMatcher;

impl BlockMatcher for ParagraphMatcher {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn matches(&self, _rest: &[Token<'_>]) -> bool {
        true
    }

    fn parse(&self, tokens: &[Token<'_>], cursor: Cursor) -> ParseResult<Parsed> {
        let parsed = parse_text(tokens, cursor.index, TextParent::Paragraph)?;
        let paragraph = Paragraph::new(
            cursor.indent(tokens),
            Some(parsed.text),
            cursor.location_to(tokens, parsed.next),
        );
        Ok(Parsed {
            block: Block::Paragraph(paragraph),
            next: parsed.next,
        })
    }
}
