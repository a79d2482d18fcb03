//! Strong emphasis: `**value**` or `__value__`

use super::emphasis::EMPHASIS_SIGNS;
use super::{parse_delimited, InlineMatcher, InlineParsed};
use crate::mdlex::ast::InlineContent;
use crate::mdlex::lexer::utilities::{compare_value, Delimiters};
use crate::mdlex::lexer::Token;

fn is_double(rest: &[Token<'_>], sign: &str) -> bool {
    compare_value(rest.first(), sign) && compare_value(rest.get(1), sign)
}

pub struct StrongMatcher;

impl InlineMatcher for StrongMatcher {
    fn name(&self) -> &'static str {
        "strong"
    }

    fn matches(&self, rest: &[Token<'_>]) -> bool {
        EMPHASIS_SIGNS.iter().any(|sign| is_double(rest, sign))
    }

    fn parse(&self, tokens: &[Token<'_>], start: usize) -> InlineParsed {
        let sign = tokens.get(start).map(|t| t.value).unwrap_or_default();
        let delimiter = sign.repeat(2);
        parse_delimited(
            tokens,
            start,
            Delimiters::symmetric(&delimiter),
            |rest: &[Token<'_>]| is_double(rest, sign),
            InlineContent::Strong,
        )
    }
}
