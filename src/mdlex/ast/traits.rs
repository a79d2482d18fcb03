//! AST traits - Common interfaces for uniform node access
//!
//! [`AstNode`] gives every node a type tag, a label and a location.
//! [`ToText`] reconstructs the exact source a node was parsed from.
//! [`Visitor`] is the walking contract used by renderers and serializers.

use super::elements::{
    Blockquote, CodeBlock, Document, Heading, InlineElement, List, ListItem, Newline, Paragraph,
    Text,
};
use super::location::Location;
use super::node_type::NodeType;

/// Visitor trait for traversing the AST
///
/// Default implementations are empty, so you only need to override the methods
/// you care about. `accept` calls the visit method for the node itself and then
/// walks its children in source order.
///
/// # Example
///
/// ```ignore
/// struct HeadingCounter(usize);
///
/// impl Visitor for HeadingCounter {
///     fn visit_heading(&mut self, _heading: &Heading) {
///         self.0 += 1;
///     }
/// }
///
/// let mut counter = HeadingCounter(0);
/// document.accept(&mut counter);
/// ```
pub trait Visitor {
    fn visit_document(&mut self, _document: &Document) {}

    // Blocks
    fn visit_heading(&mut self, _heading: &Heading) {}
    fn visit_blockquote(&mut self, _blockquote: &Blockquote) {}
    fn visit_list(&mut self, _list: &List) {}
    fn visit_list_item(&mut self, _item: &ListItem) {}
    fn visit_code_block(&mut self, _code_block: &CodeBlock) {}
    fn visit_newline(&mut self, _newline: &Newline) {}
    fn visit_paragraph(&mut self, _paragraph: &Paragraph) {}

    // Text content
    fn visit_text(&mut self, _text: &Text) {}
    fn visit_literal(&mut self, _literal: &str) {}
    fn visit_inline(&mut self, _inline: &InlineElement) {}
}

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> NodeType;
    fn display_label(&self) -> String;
    fn location(&self) -> &Location;

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor);
}

/// Exact source reconstruction
pub trait ToText {
    fn write_text(&self, out: &mut String);

    fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }
}

/// Truncate a label to `max` characters, marking the cut with an ellipsis
pub fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() > max {
        format!("{}…", label.chars().take(max).collect::<String>())
    } else {
        label.to_string()
    }
}

/// Make line endings visible in single-line labels
pub fn escape_label(label: &str) -> String {
    label
        .replace('\r', "\\r")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdlex::parser::parse_document;

    #[derive(Default)]
    struct CountingVisitor {
        headings: usize,
        items: usize,
        texts: usize,
        inlines: usize,
        literals: Vec<String>,
    }

    impl Visitor for CountingVisitor {
        fn visit_heading(&mut self, _: &Heading) {
            self.headings += 1;
        }
        fn visit_list_item(&mut self, _: &ListItem) {
            self.items += 1;
        }
        fn visit_text(&mut self, _: &Text) {
            self.texts += 1;
        }
        fn visit_inline(&mut self, _: &InlineElement) {
            self.inlines += 1;
        }
        fn visit_literal(&mut self, literal: &str) {
            self.literals.push(literal.to_string());
        }
    }

    #[test]
    fn test_visitor_traversal() {
        let document = parse_document("# Title\n* one\n* two *x*\n").unwrap();
        let mut visitor = CountingVisitor::default();
        document.accept(&mut visitor);

        assert_eq!(visitor.headings, 1);
        assert_eq!(visitor.items, 2);
        // heading text + two item texts
        assert_eq!(visitor.texts, 3);
        assert_eq!(visitor.inlines, 1);
        assert_eq!(visitor.literals.first().map(String::as_str), Some("Title"));
        assert!(visitor.literals.iter().any(|l| l == "two "));
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 10), "short");
        assert_eq!(truncate_label("abcdef", 3), "abc…");
    }

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label("a\r\nb"), "a\\r\\nb");
    }
}
