//! AST snapshot - a normalized, label-only view of the tree
//!
//! Serializers consume the snapshot produced by [`snapshot_from_document`]
//! instead of walking the AST themselves, so traversal order and labelling
//! live in one place. The snapshot is a plain tree: a type name, a label, an
//! optional location and children. Literal runs inside a text appear as
//! `literal` nodes without a location.

use super::elements::{Block, Document, ListItem, Text, TextChild};
use super::location::Location;
use super::traits::{escape_label, AstNode};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstSnapshot {
    pub node_type: String,
    pub label: String,
    pub location: Option<Location>,
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: impl Into<String>, label: String, location: Option<Location>) -> Self {
        Self {
            node_type: node_type.into(),
            label,
            location,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }

    /// Number of nodes in this subtree, including itself
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(AstSnapshot::node_count).sum::<usize>()
    }
}

/// Build the snapshot of a whole document
pub fn snapshot_from_document(doc: &Document) -> AstSnapshot {
    AstSnapshot::new(
        doc.node_type().as_str(),
        doc.display_label(),
        Some(doc.location),
    )
    .with_children(doc.children.iter().map(snapshot_from_block))
}

pub fn snapshot_from_block(block: &Block) -> AstSnapshot {
    let node = AstSnapshot::new(
        block.node_type().as_str(),
        block.display_label(),
        Some(*block.location()),
    );
    match block {
        Block::Heading(heading) => node.with_child(snapshot_from_text(&heading.text)),
        Block::Blockquote(quote) => node.with_children(quote.text().map(snapshot_from_text)),
        Block::List(list) => node.with_children(list.items.iter().map(snapshot_from_list_item)),
        Block::Paragraph(paragraph) => {
            node.with_children(paragraph.text.as_ref().map(snapshot_from_text))
        }
        Block::CodeBlock(_) | Block::Newline(_) => node,
    }
}

fn snapshot_from_list_item(item: &ListItem) -> AstSnapshot {
    AstSnapshot::new(
        "listitem",
        format!("{} {}", item.prefix, item.text.display_label()),
        Some(item.location),
    )
    .with_child(snapshot_from_text(&item.text))
}

pub fn snapshot_from_text(text: &Text) -> AstSnapshot {
    let children = text.children.iter().map(|child| match child {
        TextChild::Literal(literal) => AstSnapshot::new("literal", escape_label(literal), None),
        TextChild::Inline(inline) => AstSnapshot::new(
            inline.node_type().as_str(),
            inline.display_label(),
            Some(inline.location),
        ),
    });
    AstSnapshot::new(text.node_type().as_str(), text.display_label(), Some(text.location))
        .with_children(children)
}
