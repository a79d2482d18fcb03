//! # mdlex
//!
//! A lossless parser for a small markdown dialect.
//!
//! Source text is lexed into single-character tokens, dispatched into block
//! nodes (headings, lists, blockquotes, code blocks, paragraphs, newlines) and
//! inline elements (code, emphasis, strong, links, images). Every node keeps
//! its source location and can reproduce the exact text it was parsed from.
//!
//! ## Testing
//!
//! Parser tests use the verified sample documents in `docs/samples` and the
//! fluent `assert_ast` API from `mdlex::testing`.

pub mod mdlex;

pub use mdlex::ast::{Document, ToText};
pub use mdlex::parser::{parse_document, ParseError};
