//! Heading element
//!
//! One to six `#` signs, a single space, then a line of text:
//!
//! ```text
//! ### Section title
//! ```
//!
//! Seven or more signs are not a heading; the line falls back to a paragraph.

use super::super::location::Location;
use super::super::node_type::NodeType;
use super::super::traits::{AstNode, ToText, Visitor};
use super::text::Text;
use serde::Serialize;
use std::fmt;

pub const MAX_HEADING_LEVEL: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Spaces before the prefix
    pub indent: String,
    /// The run of `#` signs
    pub prefix: String,
    pub text: Text,
    pub location: Location,
}

impl Heading {
    pub fn new(indent: String, prefix: String, text: Text, location: Location) -> Self {
        Self {
            indent,
            prefix,
            text,
            location,
        }
    }

    pub fn level(&self) -> u8 {
        self.prefix.len() as u8
    }
}

impl AstNode for Heading {
    fn node_type(&self) -> NodeType {
        // The parser never builds a heading outside 1..=6
        NodeType::heading(self.level()).unwrap_or(NodeType::Heading6)
    }

    fn display_label(&self) -> String {
        self.text.display_label()
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_heading(self);
        self.text.accept(visitor);
    }
}

impl ToText for Heading {
    fn write_text(&self, out: &mut String) {
        out.push_str(&self.indent);
        out.push_str(&self.prefix);
        out.push(' ');
        self.text.write_text(out);
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Heading{}('{}')", self.level(), self.display_label())
    }
}
