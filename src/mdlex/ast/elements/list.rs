//! List element
//!
//! Lists are flat sequences of single-line items that share a marker style:
//!
//! ```text
//! * unordered          1. ordered
//! * items              2. items
//! ```
//!
//! Unordered items all use `*`. Ordered items must count up by exactly one;
//! the first item that breaks the sequence is not part of the list and is
//! parsed again as the start of whatever comes next.

use super::super::location::Location;
use super::super::node_type::NodeType;
use super::super::traits::{AstNode, ToText, Visitor};
use super::text::Text;
use serde::Serialize;
use std::fmt;

pub const UNORDERED_MARKER: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Ordered,
    Unordered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// `*` or a number followed by `.`
    pub prefix: String,
    pub text: Text,
    pub location: Location,
}

impl ListItem {
    pub fn new(prefix: String, text: Text, location: Location) -> Self {
        Self {
            prefix,
            text,
            location,
        }
    }

    /// Numeric value of an ordered prefix
    pub fn number(&self) -> Option<u64> {
        self.prefix.strip_suffix('.')?.parse().ok()
    }
}

impl ToText for ListItem {
    fn write_text(&self, out: &mut String) {
        out.push_str(&self.prefix);
        out.push(' ');
        self.text.write_text(out);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub indent: String,
    pub kind: ListKind,
    pub items: Vec<ListItem>,
    pub location: Location,
}

impl List {
    pub fn new(indent: String, kind: ListKind, items: Vec<ListItem>, location: Location) -> Self {
        Self {
            indent,
            kind,
            items,
            location,
        }
    }
}

impl AstNode for List {
    fn node_type(&self) -> NodeType {
        match self.kind {
            ListKind::Ordered => NodeType::OrderedList,
            ListKind::Unordered => NodeType::UnorderedList,
        }
    }

    fn display_label(&self) -> String {
        format!("{} item(s)", self.items.len())
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_list(self);
        for item in &self.items {
            visitor.visit_list_item(item);
            item.text.accept(visitor);
        }
    }
}

impl ToText for List {
    fn write_text(&self, out: &mut String) {
        out.push_str(&self.indent);
        for item in &self.items {
            item.write_text(out);
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List({:?}, {} items)", self.kind, self.items.len())
    }
}
