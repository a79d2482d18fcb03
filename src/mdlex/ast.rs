//! AST definitions for mdlex
//!
//! The tree is shallow: a [`Document`] owns blocks, text-bearing blocks own a
//! [`Text`], and text owns literal runs and [`InlineElement`]s. Every node
//! carries a [`Location`] and implements [`ToText`], which reproduces the exact
//! source substring the node was parsed from.
//!
//! ## Location tracking
//!
//! Tokens carry their own (row, column) position, so nodes never convert byte
//! offsets. A node's location runs from the first token it consumed to the
//! last one, both inclusive:
//!
//! ```text
//! Source: "# Hi\n"
//! Tokens:  #   ␠   H   i   ⏎
//!         1:0 1:1 1:2 1:3 1:4
//! Heading: 1:0..1:4     Text: 1:2..1:4
//! ```
//!
//! ## Round trip
//!
//! For every node `n`, `n.to_text()` is the substring of the input that
//! produced it, and a document's text is the concatenation of its blocks.
//! Leading spaces skipped before a block are stored on that block as `indent`,
//! and a line's terminating line ending is stored on its text.

pub mod elements;
pub mod location;
pub mod node_type;
pub mod snapshot;
pub mod traits;

pub use elements::{
    Block, Blockquote, CodeBlock, Delimited, Document, Heading, InlineContent, InlineElement,
    LineEnding, List, ListItem, ListKind, Newline, Paragraph, QuoteBody, Reference, Text,
    TextChild, TextParent,
};
pub use location::{Location, Position};
pub use node_type::NodeType;
pub use snapshot::{snapshot_from_document, AstSnapshot};
pub use traits::{AstNode, ToText, Visitor};
