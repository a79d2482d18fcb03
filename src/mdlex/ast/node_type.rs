//! Node type tags
//!
//! Every node reports one of these tags. Rendering collaborators dispatch on
//! the tag with an exhaustive `match`, so adding a variant is a compile error
//! at every consumer until it is handled.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Root,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Blockquote,
    OrderedList,
    UnorderedList,
    CodeBlock,
    Newline,
    Paragraph,
    Text,
    Code,
    Emphasis,
    Strong,
    Link,
    Image,
}

impl NodeType {
    /// Tag for a heading of the given level; `None` outside 1..=6
    pub fn heading(level: u8) -> Option<NodeType> {
        match level {
            1 => Some(NodeType::Heading1),
            2 => Some(NodeType::Heading2),
            3 => Some(NodeType::Heading3),
            4 => Some(NodeType::Heading4),
            5 => Some(NodeType::Heading5),
            6 => Some(NodeType::Heading6),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Root => "root",
            NodeType::Heading1 => "heading1",
            NodeType::Heading2 => "heading2",
            NodeType::Heading3 => "heading3",
            NodeType::Heading4 => "heading4",
            NodeType::Heading5 => "heading5",
            NodeType::Heading6 => "heading6",
            NodeType::Blockquote => "blockquote",
            NodeType::OrderedList => "orderedlist",
            NodeType::UnorderedList => "unorderedlist",
            NodeType::CodeBlock => "codeblock",
            NodeType::Newline => "newline",
            NodeType::Paragraph => "paragraph",
            NodeType::Text => "text",
            NodeType::Code => "code",
            NodeType::Emphasis => "emphasis",
            NodeType::Strong => "strong",
            NodeType::Link => "link",
            NodeType::Image => "image",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
