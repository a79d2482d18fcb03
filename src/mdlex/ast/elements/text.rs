//! Text element
//!
//! A text node is one logical line of content: literal runs interleaved with
//! inline elements. When the line was terminated by a line ending, that ending
//! is kept as the final literal child, so a text node reproduces its line
//! byte-for-byte.
//!
//! Text never stands alone in a document. The block that owns it is recorded
//! as a [`TextParent`] tag rather than a reference.

use super::super::location::Location;
use super::super::node_type::NodeType;
use super::super::traits::{escape_label, AstNode, ToText, Visitor};
use super::inline::InlineElement;
use serde::Serialize;
use std::fmt;

/// Which kind of block a text line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextParent {
    Heading,
    Blockquote,
    ListItem,
    Paragraph,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextChild {
    Literal(String),
    Inline(InlineElement),
}

impl ToText for TextChild {
    fn write_text(&self, out: &mut String) {
        match self {
            TextChild::Literal(s) => out.push_str(s),
            TextChild::Inline(inline) => inline.write_text(out),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    pub parent: TextParent,
    pub children: Vec<TextChild>,
    pub location: Location,
}

impl Text {
    pub fn new(parent: TextParent, children: Vec<TextChild>, location: Location) -> Self {
        Self {
            parent,
            children,
            location,
        }
    }

    /// The line ending that terminated this text, if any
    pub fn line_ending(&self) -> Option<&str> {
        match self.children.last() {
            Some(TextChild::Literal(s)) if matches!(s.as_str(), "\n" | "\r\n" | "\r") => {
                Some(s.as_str())
            }
            _ => None,
        }
    }

    /// Reconstructed text without the trailing line ending
    pub fn content(&self) -> String {
        let mut text = self.to_text();
        if let Some(ending) = self.line_ending() {
            text.truncate(text.len() - ending.len());
        }
        text
    }

    pub fn inlines(&self) -> impl Iterator<Item = &InlineElement> {
        self.children.iter().filter_map(|child| match child {
            TextChild::Inline(inline) => Some(inline),
            TextChild::Literal(_) => None,
        })
    }
}

impl AstNode for Text {
    fn node_type(&self) -> NodeType {
        NodeType::Text
    }

    fn display_label(&self) -> String {
        escape_label(&self.content())
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_text(self);
        for child in &self.children {
            match child {
                TextChild::Literal(literal) => visitor.visit_literal(literal),
                TextChild::Inline(inline) => inline.accept(visitor),
            }
        }
    }
}

impl ToText for Text {
    fn write_text(&self, out: &mut String) {
        for child in &self.children {
            child.write_text(out);
        }
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text('{}')", self.display_label())
    }
}
