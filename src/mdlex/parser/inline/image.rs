//! Image: `![title](url)`, a link whose title opens with `![`

use super::link::parse_reference;
use super::{InlineMatcher, InlineParsed};
use crate::mdlex::ast::InlineContent;
use crate::mdlex::lexer::utilities::compare_value;
use crate::mdlex::lexer::Token;

pub struct ImageMatcher;

impl InlineMatcher for ImageMatcher {
    fn name(&self) -> &'static str {
        "image"
    }

    fn matches(&self, rest: &[Token<'_>]) -> bool {
        compare_value(rest.first(), "!") && compare_value(rest.get(1), "[")
    }

    fn parse(&self, tokens: &[Token<'_>], start: usize) -> InlineParsed {
        parse_reference(tokens, start, "![", InlineContent::Image)
    }
}
