//! Code span: `` `value` ``

use super::{parse_delimited, InlineMatcher, InlineParsed};
use crate::mdlex::ast::InlineContent;
use crate::mdlex::lexer::utilities::{compare_value, Delimiters};
use crate::mdlex::lexer::Token;

const BACKTICK: &str = "`";

fn is_backtick(rest: &[Token<'_>]) -> bool {
    compare_value(rest.first(), BACKTICK)
}

pub struct CodeMatcher;

impl InlineMatcher for CodeMatcher {
    fn name(&self) -> &'static str {
        "code"
    }

    fn matches(&self, rest: &[Token<'_>]) -> bool {
        is_backtick(rest)
    }

    fn parse(&self, tokens: &[Token<'_>], start: usize) -> InlineParsed {
        parse_delimited(
            tokens,
            start,
            Delimiters::symmetric(BACKTICK),
            is_backtick,
            InlineContent::Code,
        )
    }
}
