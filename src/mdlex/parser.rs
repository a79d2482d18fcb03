//! Parser for mdlex documents
//!
//! The parser is a single loop over the token slice. Each iteration skips the
//! leading spaces of a line, asks the block matchers in priority order whether
//! they accept the next token, and lets the first that does consume a block.
//! If none does, the paragraph matcher takes the line. Blocks that carry text
//! hand the rest of their line to the text parser, which in turn hands every
//! sign to the inline matchers.
//!
//! ```text
//! source ─▶ tokenize ─▶ [tokens] ─▶ block dispatch ─▶ Document
//!                                     │
//!                                     └─▶ text parser ─▶ inline matchers
//! ```
//!
//! Parsing is total for well-behaved matchers: malformed markup degrades to a
//! paragraph or to literal text. The single failure, [`ParseError::NoProgress`],
//! is raised when an iteration ends where it began, which would otherwise loop
//! forever. It indicates a matcher bug, never bad input.

pub mod blocks;
pub mod error;
pub mod inline;
pub mod text;


use crate::mdlex::ast::{Block, Document, Location, Paragraph};
use crate::mdlex::lexer::utilities::is_space;
use crate::mdlex::lexer::{tokenize, Token};
use blocks::{BlockMatcher, Cursor, BLOCK_MATCHERS, FALLBACK_MATCHER};
use tracing::{debug, error, trace};

pub use error::{ParseError, ParseResult, ParseStage};

/// Parse markdown source into a document
pub fn parse_document(source: &str) -> ParseResult<Document> {
    let tokens = tokenize(source);
    debug!(bytes = source.len(), tokens = tokens.len(), "parsing document");
    parse_tokens(&tokens)
}

/// Parse an already tokenized source
pub fn parse_tokens(tokens: &[Token<'_>]) -> ParseResult<Document> {
    dispatch(tokens, BLOCK_MATCHERS, FALLBACK_MATCHER)
}

fn dispatch(
    tokens: &[Token<'_>],
    matchers: &[&dyn BlockMatcher],
    fallback: &dyn BlockMatcher,
) -> ParseResult<Document> {
    let mut children = Vec::new();
    let mut index = 0;

    while index < tokens.len() {
        let line_start = index;
        while is_space(&tokens[index..]) {
            index += 1;
        }

        // Only spaces were left
        if index == tokens.len() {
            let cursor = Cursor::new(line_start, index);
            children.push(Block::Paragraph(Paragraph::new(
                cursor.indent(tokens),
                None,
                cursor.location_to(tokens, index),
            )));
            break;
        }

        let rest = &tokens[index..];
        let matcher = matchers
            .iter()
            .copied()
            .find(|m| m.matches(rest))
            .unwrap_or(fallback);
        trace!(
            matcher = matcher.name(),
            position = %tokens[index].position,
            "dispatching block"
        );

        let parsed = matcher.parse(tokens, Cursor::new(line_start, index))?;
        if parsed.next <= index {
            let position = tokens[index].position;
            error!(matcher = matcher.name(), %position, "block dispatch made no progress");
            return Err(ParseError::NoProgress {
                position,
                stage: ParseStage::BlockDispatch,
            });
        }

        children.push(parsed.block);
        index = parsed.next;
    }

    debug!(blocks = children.len(), "parsed document");
    Ok(Document::new(children, Location::covering(tokens)))
}
