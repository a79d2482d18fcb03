//! Treeviz formatter for AST nodes
//!
//! One line per node, nesting drawn with box characters, so a document's
//! structure can be scanned at a glance:
//!
//! ```text
//! ⧉ Document (3 blocks)
//! ├─ § Getting Started
//! │ └─ ↵ Getting Started
//! │   └─ ◦ Getting Started
//! ├─ ⏎ Lf
//! └─ ☰ 2 item(s)
//!   ├─ • * apples
//!   ...
//! ```
//!
//! Labels are truncated to [`TreevizOptions::label_width`] characters.
//!
//! Icons
//!     Blocks:
//!         Document: ⧉
//!         Heading: §
//!         Blockquote: ❝
//!         List: ☰
//!         ListItem: •
//!         CodeBlock: 𝒱
//!         Newline: ⏎
//!         Paragraph: ¶
//!     Text:
//!         Text: ↵
//!         Literal: ◦
//!     Inlines:
//!         Code: ƒ
//!         Emphasis: 𝐼
//!         Strong: 𝐁
//!         Link: ⊕
//!         Image: ▣

use crate::mdlex::ast::traits::truncate_label;
use crate::mdlex::ast::{snapshot_from_document, AstSnapshot, Document};

pub const DEFAULT_LABEL_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreevizOptions {
    pub label_width: usize,
    /// Append each node's `start..end` location
    pub show_locations: bool,
}

impl Default for TreevizOptions {
    fn default() -> Self {
        Self {
            label_width: DEFAULT_LABEL_WIDTH,
            show_locations: false,
        }
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "root" => "⧉",
        "heading1" | "heading2" | "heading3" | "heading4" | "heading5" | "heading6" => "§",
        "blockquote" => "❝",
        "orderedlist" | "unorderedlist" => "☰",
        "listitem" => "•",
        "codeblock" => "𝒱",
        "newline" => "⏎",
        "paragraph" => "¶",
        "text" => "↵",
        "literal" => "◦",
        "code" => "ƒ",
        "emphasis" => "𝐼",
        "strong" => "𝐁",
        "link" => "⊕",
        "image" => "▣",
        _ => "○",
    }
}

fn format_line(snapshot: &AstSnapshot, options: &TreevizOptions) -> String {
    let label = truncate_label(&snapshot.label, options.label_width);
    match snapshot.location {
        Some(location) if options.show_locations => {
            format!("{} {} [{}]", get_icon(&snapshot.node_type), label, location)
        }
        _ => format!("{} {}", get_icon(&snapshot.node_type), label),
    }
}

fn format_snapshot(
    snapshot: &AstSnapshot,
    prefix: &str,
    is_last: bool,
    options: &TreevizOptions,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {}\n",
        prefix,
        connector,
        format_line(snapshot, options)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(snapshot, &child_prefix, options, output);
}

fn format_children(
    snapshot: &AstSnapshot,
    prefix: &str,
    options: &TreevizOptions,
    output: &mut String,
) {
    let count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, prefix, i + 1 == count, options, output);
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_with_options(doc, &TreevizOptions::default())
}

pub fn to_treeviz_str_with_options(doc: &Document, options: &TreevizOptions) -> String {
    let snapshot = snapshot_from_document(doc);
    let mut output = format!("{}\n", format_line(&snapshot, options));
    format_children(&snapshot, "", options, &mut output);
    output
}
