//! Element-specific AST node definitions
//!
//! Elements come in three layers:
//!
//!     Blocks: line-based units that make up a document. See [block].
//!         - Headings: `#` prefix and a line of text. See [heading].
//!         - Blockquotes: `>` prefix and a line of text. See [blockquote].
//!         - Lists: consecutive items with a shared marker style. See [list].
//!         - Code blocks: fenced verbatim content. See [code_block].
//!         - Newlines: blank lines. See [newline].
//!         - Paragraphs: everything else. See [paragraph].
//!
//!     Text: a single line of content owned by a block. See [text].
//!
//!     Inlines: delimiter-bounded spans inside text. See [inline].
//!
//! Ownership is strictly top-down. No element points back at its parent; text
//! records the kind of block it belongs to as a tag.

pub mod block;
pub mod blockquote;
pub mod code_block;
pub mod document;
pub mod heading;
pub mod inline;
pub mod list;
pub mod newline;
pub mod paragraph;
pub mod text;

pub use block::Block;
pub use blockquote::{Blockquote, QuoteBody};
pub use code_block::CodeBlock;
pub use document::Document;
pub use heading::Heading;
pub use inline::{Delimited, InlineContent, InlineElement, Reference};
pub use list::{List, ListItem, ListKind};
pub use newline::{LineEnding, Newline};
pub use paragraph::Paragraph;
pub use text::{Text, TextChild, TextParent};
