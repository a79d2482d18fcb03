//! Block-level sum type
//!
//! A document is a flat sequence of blocks. Each block starts at the beginning
//! of a line (after any leading spaces, which it keeps as its `indent`).

use super::super::location::Location;
use super::super::node_type::NodeType;
use super::super::traits::{AstNode, ToText, Visitor};
use super::blockquote::Blockquote;
use super::code_block::CodeBlock;
use super::heading::Heading;
use super::list::List;
use super::newline::Newline;
use super::paragraph::Paragraph;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Heading(Heading),
    Blockquote(Blockquote),
    List(List),
    CodeBlock(CodeBlock),
    Newline(Newline),
    Paragraph(Paragraph),
}

impl Block {
    fn node(&self) -> &dyn AstNode {
        match self {
            Block::Heading(n) => n,
            Block::Blockquote(n) => n,
            Block::List(n) => n,
            Block::CodeBlock(n) => n,
            Block::Newline(n) => n,
            Block::Paragraph(n) => n,
        }
    }

    fn text_node(&self) -> &dyn ToText {
        match self {
            Block::Heading(n) => n,
            Block::Blockquote(n) => n,
            Block::List(n) => n,
            Block::CodeBlock(n) => n,
            Block::Newline(n) => n,
            Block::Paragraph(n) => n,
        }
    }

    pub fn indent(&self) -> &str {
        match self {
            Block::Heading(n) => &n.indent,
            Block::Blockquote(n) => &n.indent,
            Block::List(n) => &n.indent,
            Block::CodeBlock(n) => &n.indent,
            Block::Newline(n) => &n.indent,
            Block::Paragraph(n) => &n.indent,
        }
    }
}

impl AstNode for Block {
    fn node_type(&self) -> NodeType {
        self.node().node_type()
    }

    fn display_label(&self) -> String {
        self.node().display_label()
    }

    fn location(&self) -> &Location {
        self.node().location()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        self.node().accept(visitor);
    }
}

impl ToText for Block {
    fn write_text(&self, out: &mut String) {
        self.text_node().write_text(out);
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}')", self.node_type(), self.display_label())
    }
}
