//! Blockquote element
//!
//! A single `>` followed by a space and a line of text. Quotes do not nest:
//! `>> text` is a paragraph.

use super::super::location::Location;
use super::super::node_type::NodeType;
use super::super::traits::{AstNode, ToText, Visitor};
use super::text::Text;
use serde::Serialize;

pub const QUOTE_PREFIX: &str = ">";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteBody {
    pub prefix: String,
    pub text: Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blockquote {
    pub indent: String,
    /// `None` for a quote without content
    pub body: Option<QuoteBody>,
    pub location: Location,
}

impl Blockquote {
    pub fn new(indent: String, text: Text, location: Location) -> Self {
        Self {
            indent,
            body: Some(QuoteBody {
                prefix: QUOTE_PREFIX.to_string(),
                text,
            }),
            location,
        }
    }

    pub fn empty(indent: String, location: Location) -> Self {
        Self {
            indent,
            body: None,
            location,
        }
    }

    pub fn text(&self) -> Option<&Text> {
        self.body.as_ref().map(|body| &body.text)
    }
}

impl AstNode for Blockquote {
    fn node_type(&self) -> NodeType {
        NodeType::Blockquote
    }

    fn display_label(&self) -> String {
        self.text().map(|t| t.display_label()).unwrap_or_default()
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_blockquote(self);
        if let Some(text) = self.text() {
            text.accept(visitor);
        }
    }
}

impl ToText for Blockquote {
    fn write_text(&self, out: &mut String) {
        out.push_str(&self.indent);
        if let Some(body) = &self.body {
            out.push_str(&body.prefix);
            out.push(' ');
            body.text.write_text(out);
        }
    }
}
