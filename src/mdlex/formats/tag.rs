//! XML-like AST tag serialization
//!
//! ## Format
//!
//! - Node type → tag name
//! - Label → text content
//! - Children → nested in a `<children>` tag
//!
//! ```text
//! <document>
//!   <heading1>Intro<children>
//!     <text>Intro<children>
//!       <literal>Intro</literal>
//!       <literal>\n</literal>
//!     </children></text>
//!   </children></heading1>
//!   <newline>Lf</newline>
//! </document>
//! ```

use crate::mdlex::ast::{snapshot_from_document, AstSnapshot, Document};

/// Serialize a document to AST tag format
pub fn serialize_document(doc: &Document) -> String {
    let snapshot = snapshot_from_document(doc);
    let mut output = String::from("<document>\n");
    for child in &snapshot.children {
        serialize_node(child, 1, &mut output);
    }
    output.push_str("</document>");
    output
}

fn serialize_node(node: &AstSnapshot, level: usize, output: &mut String) {
    let indent = "  ".repeat(level);
    let tag = node.node_type.as_str();

    output.push_str(&format!("{}<{}>{}", indent, tag, escape_xml(&node.label)));
    if node.children.is_empty() {
        output.push_str(&format!("</{}>\n", tag));
        return;
    }

    output.push_str("<children>\n");
    for child in &node.children {
        serialize_node(child, level + 1, output);
    }
    output.push_str(&format!("{}</children></{}>\n", indent, tag));
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
