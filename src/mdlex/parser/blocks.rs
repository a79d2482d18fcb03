//! Block matchers
//!
//! Each block matcher pairs a lookahead-only `matches` with a `parse` that
//! consumes the block. The driver tries them in [`BLOCK_MATCHERS`] order and
//! falls back to [`ParagraphMatcher`], which accepts anything.
//!
//! | Matcher    | Matches                                   | Degrades to paragraph when |
//! |------------|-------------------------------------------|----------------------------|
//! | Header     | 1 to 6 `#`, a space, text or a sign       | 7 or more `#`              |
//! | List       | `* ` or `<digits>. ` followed by text     | never at the first item    |
//! | Blockquote | `> ` followed by text                     | `>>`                       |
//! | CodeBlock  | three backticks                           | no closing fence           |
//! | Newline    | a line ending                             | never                      |
//!
//! Leading spaces are skipped by the driver before matching. Matchers receive
//! a [`Cursor`] holding both the line start and the first non-space token so
//! the skipped spaces end up in the block's `indent`.

pub mod blockquote;
pub mod code_block;
pub mod header;
pub mod list;
pub mod newline;
pub mod paragraph;

use super::error::ParseResult;
use crate::mdlex::ast::{Block, Location};
use crate::mdlex::lexer::Token;

pub use blockquote::BlockquoteMatcher;
pub use code_block::CodeBlockMatcher;
pub use header::HeaderMatcher;
pub use list::ListMatcher;
pub use newline::NewlineMatcher;
pub use paragraph::ParagraphMatcher;

/// Where a block starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// First token of the line, including leading spaces
    pub line_start: usize,
    /// First token after the leading spaces
    pub index: usize,
}

impl Cursor {
    pub fn new(line_start: usize, index: usize) -> Self {
        Self { line_start, index }
    }

    /// The skipped leading spaces
    pub fn indent(&self, tokens: &[Token<'_>]) -> String {
        tokens
            .get(self.line_start..self.index)
            .unwrap_or(&[])
            .iter()
            .map(|t| t.value)
            .collect()
    }

    /// Location from the line start up to, not including, `next`
    pub fn location_to(&self, tokens: &[Token<'_>], next: usize) -> Location {
        Location::covering(tokens.get(self.line_start..next).unwrap_or(&[]))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub block: Block,
    /// Index of the first token after the block
    pub next: usize,
}

pub trait BlockMatcher {
    fn name(&self) -> &'static str;

    /// Lookahead only; `rest` starts at the first non-space token of the line
    fn matches(&self, rest: &[Token<'_>]) -> bool;

    fn parse(&self, tokens: &[Token<'_>], cursor: Cursor) -> ParseResult<Parsed>;
}

/// Block matchers in priority order
pub const BLOCK_MATCHERS: &[&dyn BlockMatcher] = &[
    &HeaderMatcher,
    &ListMatcher,
    &BlockquoteMatcher,
    &CodeBlockMatcher,
    &NewlineMatcher,
];

/// Used when no matcher in [`BLOCK_MATCHERS`] accepts the line
pub const FALLBACK_MATCHER: &dyn BlockMatcher = &ParagraphMatcher;
