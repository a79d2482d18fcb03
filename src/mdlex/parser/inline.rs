//! Inline matchers
//!
//! An inline matcher recognises a delimiter-bounded span at a sign token.
//! Matchers are tried in a fixed order and the first whose `matches` accepts
//! the current token parses it. Parsing never fails: when the closing
//! delimiter is missing the span degrades to literal text running to the end
//! of the line.
//!
//! | Matcher  | Opens on                 | Closes on        |
//! |----------|--------------------------|------------------|
//! | Code     | `` ` ``                  | `` ` ``          |
//! | Emphasis | single `*` or `_`        | the same single sign |
//! | Strong   | `**` or `__`             | the same pair    |
//! | Image    | `![`                     | `]` then `(`..`)` |
//! | Link     | `[`                      | `]` then `(`..`)` |

pub mod code;
pub mod emphasis;
pub mod image;
pub mod link;
pub mod strong;

use crate::mdlex::ast::{Delimited, InlineContent, InlineElement, Location, TextChild};
use crate::mdlex::lexer::utilities::{extract_between_delimiters, Delimiters, Extracted};
use crate::mdlex::lexer::Token;

pub use code::CodeMatcher;
pub use emphasis::EmphasisMatcher;
pub use image::ImageMatcher;
pub use link::LinkMatcher;
pub use strong::StrongMatcher;

/// Result of an inline parse: the child to append and where to resume
#[derive(Debug, Clone, PartialEq)]
pub struct InlineParsed {
    pub child: TextChild,
    pub next: usize,
}

impl InlineParsed {
    pub fn literal(text: String, next: usize) -> Self {
        Self {
            child: TextChild::Literal(text),
            next,
        }
    }
}

pub trait InlineMatcher {
    fn name(&self) -> &'static str;

    /// Lookahead only; `rest` starts at the candidate token
    fn matches(&self, rest: &[Token<'_>]) -> bool;

    /// Parse the element starting at `tokens[start]`. Always advances.
    fn parse(&self, tokens: &[Token<'_>], start: usize) -> InlineParsed;
}

/// Inline matchers in priority order
pub const INLINE_MATCHERS: &[&dyn InlineMatcher] = &[
    &CodeMatcher,
    &EmphasisMatcher,
    &StrongMatcher,
    &ImageMatcher,
    &LinkMatcher,
];

/// Parse whatever starts at the sign token `tokens[start]`.
///
/// Falls back to the sign itself as a one-character literal when no matcher
/// accepts it.
pub fn parse_inline(
    tokens: &[Token<'_>],
    start: usize,
    matchers: &[&dyn InlineMatcher],
) -> InlineParsed {
    let rest = tokens.get(start..).unwrap_or(&[]);
    match matchers.iter().find(|m| m.matches(rest)) {
        Some(matcher) => matcher.parse(tokens, start),
        None => InlineParsed::literal(
            rest.first().map(|t| t.value.to_string()).unwrap_or_default(),
            start + 1,
        ),
    }
}

/// Location of the tokens `start..end`
pub(crate) fn span(tokens: &[Token<'_>], start: usize, end: usize) -> Location {
    Location::covering(tokens.get(start..end).unwrap_or(&[]))
}

/// Shared parse for the symmetric-delimiter elements (code, emphasis, strong)
pub(crate) fn parse_delimited<C>(
    tokens: &[Token<'_>],
    start: usize,
    delimiters: Delimiters<'_>,
    close: C,
    build: fn(Delimited) -> InlineContent,
) -> InlineParsed
where
    C: Fn(&[Token<'_>]) -> bool,
{
    let extraction = extract_between_delimiters(tokens, delimiters, start, close);
    let child = match extraction.content {
        Extracted::Delimited(delimited) => TextChild::Inline(InlineElement::new(
            build(delimited),
            span(tokens, start, extraction.index),
        )),
        Extracted::Literal(text) => TextChild::Literal(text),
    };
    InlineParsed {
        child,
        next: extraction.index,
    }
}
