//! Link: `[title](url)`
//!
//! The url must follow the closing bracket directly. Without it the bracketed
//! title is plain text and parsing resumes after `]`; an unclosed url turns
//! the title and the rest of the line into plain text.

use super::{span, InlineMatcher, InlineParsed};
use crate::mdlex::ast::{InlineContent, InlineElement, Reference, TextChild, ToText};
use crate::mdlex::lexer::utilities::{
    compare_value, extract_between_delimiters, Delimiters, Extracted,
};
use crate::mdlex::lexer::Token;

fn is_closing_bracket(rest: &[Token<'_>]) -> bool {
    compare_value(rest.first(), "]")
}

fn is_closing_paren(rest: &[Token<'_>]) -> bool {
    compare_value(rest.first(), ")")
}

/// Parse `<title_prefix>title](url)` starting at `tokens[start]`
pub(crate) fn parse_reference(
    tokens: &[Token<'_>],
    start: usize,
    title_prefix: &str,
    build: fn(Reference) -> InlineContent,
) -> InlineParsed {
    let title = extract_between_delimiters(
        tokens,
        Delimiters::new(title_prefix, "]"),
        start,
        is_closing_bracket,
    );
    let title_value = match title.content {
        Extracted::Delimited(delimited) => delimited,
        Extracted::Literal(text) => return InlineParsed::literal(text, title.index),
    };

    if !compare_value(tokens.get(title.index), "(") {
        return InlineParsed::literal(title_value.to_text(), title.index);
    }

    let url = extract_between_delimiters(
        tokens,
        Delimiters::new("(", ")"),
        title.index,
        is_closing_paren,
    );
    match url.content {
        Extracted::Delimited(url_value) => InlineParsed {
            child: TextChild::Inline(InlineElement::new(
                build(Reference {
                    title: title_value,
                    url: url_value,
                }),
                span(tokens, start, url.index),
            )),
            next: url.index,
        },
        Extracted::Literal(rest) => {
            InlineParsed::literal(title_value.to_text() + &rest, url.index)
        }
    }
}

pub struct LinkMatcher;

impl InlineMatcher for LinkMatcher {
    fn name(&self) -> &'static str {
        "link"
    }

    fn matches(&self, rest: &[Token<'_>]) -> bool {
        compare_value(rest.first(), "[")
    }

    fn parse(&self, tokens: &[Token<'_>], start: usize) -> InlineParsed {
        parse_reference(tokens, start, "[", InlineContent::Link)
    }
}
