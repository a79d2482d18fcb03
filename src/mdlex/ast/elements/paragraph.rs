//! Paragraph element
//!
//! The fallback block. Any line no other block claims becomes a paragraph,
//! which is why malformed markup (an unclosed fence, seven `#` signs, `>>`)
//! ends up here as plain text.
//!
//! A paragraph holds a single line. Trailing spaces at the very end of the
//! input produce a paragraph with no text at all; the spaces live in `indent`.

use super::super::location::Location;
use super::super::node_type::NodeType;
use super::super::traits::{AstNode, ToText, Visitor};
use super::text::Text;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub indent: String,
    pub text: Option<Text>,
    pub location: Location,
}

impl Paragraph {
    pub fn new(indent: String, text: Option<Text>, location: Location) -> Self {
        Self {
            indent,
            text,
            location,
        }
    }
}

impl AstNode for Paragraph {
    fn node_type(&self) -> NodeType {
        NodeType::Paragraph
    }

    fn display_label(&self) -> String {
        self.text
            .as_ref()
            .map(|t| t.display_label())
            .unwrap_or_default()
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_paragraph(self);
        if let Some(text) = &self.text {
            text.accept(visitor);
        }
    }
}

impl ToText for Paragraph {
    fn write_text(&self, out: &mut String) {
        out.push_str(&self.indent);
        if let Some(text) = &self.text {
            text.write_text(out);
        }
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paragraph('{}')", self.display_label())
    }
}
