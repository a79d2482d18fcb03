//! Code block element
//!
//! Everything between an opening and a closing triple backtick, kept verbatim
//! and never parsed for inline elements. The content may span lines and may
//! start directly after the opening fence.

use super::super::location::Location;
use super::super::node_type::NodeType;
use super::super::traits::{escape_label, AstNode, ToText, Visitor};
use serde::Serialize;

pub const FENCE: &str = "```";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub indent: String,
    pub content: String,
    pub location: Location,
}

impl CodeBlock {
    pub fn new(indent: String, content: String, location: Location) -> Self {
        Self {
            indent,
            content,
            location,
        }
    }
}

impl AstNode for CodeBlock {
    fn node_type(&self) -> NodeType {
        NodeType::CodeBlock
    }

    fn display_label(&self) -> String {
        escape_label(&self.content)
    }

    fn location(&self) -> &Location {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_code_block(self);
    }
}

impl ToText for CodeBlock {
    fn write_text(&self, out: &mut String) {
        out.push_str(&self.indent);
        out.push_str(FENCE);
        out.push_str(&self.content);
        out.push_str(FENCE);
    }
}
