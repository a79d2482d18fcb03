use super::{BlockMatcher, Cursor, Parsed};
use crate::mdlex::ast::{Block, LineEnding, Newline};
use crate::mdlex::lexer::utilities::is_newline;
use crate::mdlex::lexer::{Token, TokenKind};
use crate::mdlex::parser::error::ParseResult;

fn line_ending(token: &Token<'_>) -> LineEnding {
    match (token.kind, token.value) {
        (TokenKind::CarriageReturn, "\r\n") => LineEnding::CrLf,
        (TokenKind::CarriageReturn, _) => LineEnding::Cr,
        _ => LineEnding::Lf,
    }
}

/// A blank line: a line ending with nothing but spaces before it
pub struct NewlineMatcher;

impl BlockMatcher for NewlineMatcher {
    fn name(&self) -> &'static str {
        "newline"
    }

    fn matches(&self, rest: &[Token<'_>]) -> bool {
        is_newline(rest)
    }

    fn parse(&self, tokens: &[Token<'_>], cursor: Cursor) -> ParseResult<Parsed> {
        let next = cursor.index + 1;
        let ending = tokens
            .get(cursor.index)
            .map(line_ending)
            .unwrap_or(LineEnding::Lf);
        let newline = Newline::new(
            cursor.indent(tokens),
            ending,
            cursor.location_to(tokens, next),
        );
        Ok(Parsed {
            block: Block::Newline(newline),
            next,
        })
    }
}
