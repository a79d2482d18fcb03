//! Emphasis: `*value*` or `_value_`
//!
//! Only a single sign opens or closes emphasis; a doubled sign belongs to
//! strong emphasis. The closing sign must be the one that opened.

use super::{parse_delimited, InlineMatcher, InlineParsed};
use crate::mdlex::ast::InlineContent;
use crate::mdlex::lexer::utilities::{compare_value, Delimiters};
use crate::mdlex::lexer::Token;

pub(crate) const EMPHASIS_SIGNS: [&str; 2] = ["*", "_"];

/// `sign` at the current token and not again at the next one
fn is_single(rest: &[Token<'_>], sign: &str) -> bool {
    compare_value(rest.first(), sign) && !compare_value(rest.get(1), sign)
}

pub struct EmphasisMatcher;

impl InlineMatcher for EmphasisMatcher {
    fn name(&self) -> &'static str {
        "emphasis"
    }

    fn matches(&self, rest: &[Token<'_>]) -> bool {
        EMPHASIS_SIGNS.iter().any(|sign| is_single(rest, sign))
    }

    fn parse(&self, tokens: &[Token<'_>], start: usize) -> InlineParsed {
        let sign = tokens.get(start).map(|t| t.value).unwrap_or_default();
        parse_delimited(
            tokens,
            start,
            Delimiters::symmetric(sign),
            |rest: &[Token<'_>]| is_single(rest, sign),
            InlineContent::Emphasis,
        )
    }
}
