//! Document element
//!
//! The root of every parse. It owns the ordered block sequence and spans the
//! whole input, so `document.to_text()` is the original source.

use super::super::location::Location;
use super::super::node_type::NodeType;
use super::super::traits::{AstNode, ToText, Visitor};
use super::block::Block;
use super::heading::Heading;
use super::list::List;
use super::paragraph::Paragraph;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    pub children: Vec<Block>,
    pub location: Location,
}

impl Document {
    pub fn new(children: Vec<Block>, location: Location) -> Self {
        Self { children, location }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter_blocks(&self) -> impl Iterator<Item = &Block> {
        self.children.iter()
    }

    pub fn iter_headings(&self) -> impl Iterator<Item = &Heading> {
        self.children.iter().filter_map(|block| match block {
            Block::Heading(h) => Some(h),
            _ => None,
        })
    }

    pub fn iter_lists(&self) -> impl Iterator<Item = &List> {
        self.children.iter().filter_map(|block| match block {
            Block::List(l) => Some(l),
            _ => None,
        })
    }

    pub fn iter_paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.children.iter().filter_map(|block| match block {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }
}

impl AstNode for Document {
    fn node_type(&self) -> NodeType {
        NodeType::Root
    }

    fn display_label(&self) -> String {
        format!("Document ({} blocks)", self.children.len())
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_document(self);
        for block in &self.children {
            block.accept(visitor);
        }
    }
}

impl ToText for Document {
    fn write_text(&self, out: &mut String) {
        for block in &self.children {
            block.write_text(out);
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Document({} blocks)", self.children.len())
    }
}
