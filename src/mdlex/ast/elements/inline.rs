//! Inline elements
//!
//! Delimiter-bounded spans inside a [`Text`](super::text::Text): code spans,
//! emphasis, strong emphasis, links and images. Inline content is never parsed
//! recursively: the value between the delimiters is kept verbatim.
//!
//! | Element  | Shape                   |
//! |----------|-------------------------|
//! | Code     | `` `value` ``           |
//! | Emphasis | `*value*` or `_value_`  |
//! | Strong   | `**value**` or `__value__` |
//! | Link     | `[title](url)`          |
//! | Image    | `![title](url)`         |

use super::super::location::Location;
use super::super::node_type::NodeType;
use super::super::traits::{AstNode, ToText, Visitor};
use serde::Serialize;
use std::fmt;

/// A value with the literal delimiters that surrounded it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delimited {
    pub prefix: String,
    pub value: String,
    pub suffix: String,
}

impl Delimited {
    pub fn new(prefix: &str, value: String, suffix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            value,
            suffix: suffix.to_string(),
        }
    }
}

impl ToText for Delimited {
    fn write_text(&self, out: &mut String) {
        out.push_str(&self.prefix);
        out.push_str(&self.value);
        out.push_str(&self.suffix);
    }
}

/// Title and target of a link or image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub title: Delimited,
    pub url: Delimited,
}

impl ToText for Reference {
    fn write_text(&self, out: &mut String) {
        self.title.write_text(out);
        self.url.write_text(out);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InlineContent {
    Code(Delimited),
    Emphasis(Delimited),
    Strong(Delimited),
    Link(Reference),
    Image(Reference),
}

impl ToText for InlineContent {
    fn write_text(&self, out: &mut String) {
        match self {
            InlineContent::Code(d) | InlineContent::Emphasis(d) | InlineContent::Strong(d) => {
                d.write_text(out)
            }
            InlineContent::Link(r) | InlineContent::Image(r) => r.write_text(out),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineElement {
    pub content: InlineContent,
    pub location: Location,
}

impl InlineElement {
    pub fn new(content: InlineContent, location: Location) -> Self {
        Self { content, location }
    }

    /// The text between the delimiters (the title, for links and images)
    pub fn value(&self) -> &str {
        match &self.content {
            InlineContent::Code(d) | InlineContent::Emphasis(d) | InlineContent::Strong(d) => {
                &d.value
            }
            InlineContent::Link(r) | InlineContent::Image(r) => &r.title.value,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.content {
            InlineContent::Link(r) | InlineContent::Image(r) => Some(&r.url.value),
            _ => None,
        }
    }
}

impl AstNode for InlineElement {
    fn node_type(&self) -> NodeType {
        match self.content {
            InlineContent::Code(_) => NodeType::Code,
            InlineContent::Emphasis(_) => NodeType::Emphasis,
            InlineContent::Strong(_) => NodeType::Strong,
            InlineContent::Link(_) => NodeType::Link,
            InlineContent::Image(_) => NodeType::Image,
        }
    }

    fn display_label(&self) -> String {
        match self.url() {
            Some(url) => format!("{} -> {}", self.value(), url),
            None => self.value().to_string(),
        }
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_inline(self);
    }
}

impl ToText for InlineElement {
    fn write_text(&self, out: &mut String) {
        self.content.write_text(out);
    }
}

impl fmt::Display for InlineElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}')", self.node_type(), self.display_label())
    }
}
