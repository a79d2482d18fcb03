//! Fluent assertions over documents, blocks, text and inline elements

use super::testing_matchers::TextMatch;
use crate::mdlex::ast::{
    AstNode, Block, Blockquote, CodeBlock, Document, Heading, InlineElement, LineEnding, List,
    ListItem, ListKind, Location, Newline, NodeType, Paragraph, Position, Text, TextChild,
    ToText,
};

/// Create an assertion builder for a document
pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn summarize(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|b| b.node_type().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn assert_location(location: &Location, start: (usize, usize), end: (usize, usize), context: &str) {
    assert_eq!(
        (location.start, location.end),
        (Position::new(start.0, start.1), Position::new(end.0, end.1)),
        "{}: Unexpected location",
        context
    );
}

// ============================================================================
// Document
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    pub fn block_count(self, expected: usize) -> Self {
        let actual = self.doc.children.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} blocks, found {} blocks: [{}]",
            expected,
            actual,
            summarize(&self.doc.children)
        );
        self
    }

    /// Assert the block types, in order
    pub fn block_types(self, expected: &[NodeType]) -> Self {
        let actual: Vec<NodeType> = self.doc.children.iter().map(|b| b.node_type()).collect();
        assert_eq!(actual, expected, "Unexpected block types");
        self
    }

    /// Assert on a specific block by index
    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert!(
            index < self.doc.children.len(),
            "Block index {} out of bounds (document has {} blocks: [{}])",
            index,
            self.doc.children.len(),
            summarize(&self.doc.children)
        );
        assertion(BlockAssertion {
            block: &self.doc.children[index],
            context: format!("blocks[{}]", index),
        });
        self
    }

    /// Assert the document reproduces `source` exactly
    pub fn round_trips(self, source: &str) -> Self {
        assert_eq!(self.doc.to_text(), source, "Document does not round-trip");
        self
    }
}

// ============================================================================
// Blocks
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

macro_rules! block_cast {
    ($name:ident, $variant:ident, $assertion:ident) => {
        pub fn $name(self) -> $assertion<'a> {
            match self.block {
                Block::$variant(node) => $assertion {
                    node,
                    context: self.context,
                },
                other => panic!(
                    "{}: Expected {}, found {}",
                    self.context,
                    stringify!($variant),
                    other.node_type()
                ),
            }
        }
    };
}

impl<'a> BlockAssertion<'a> {
    block_cast!(assert_heading, Heading, HeadingAssertion);
    block_cast!(assert_blockquote, Blockquote, BlockquoteAssertion);
    block_cast!(assert_list, List, ListAssertion);
    block_cast!(assert_code_block, CodeBlock, CodeBlockAssertion);
    block_cast!(assert_newline, Newline, NewlineAssertion);
    block_cast!(assert_paragraph, Paragraph, ParagraphAssertion);

    pub fn node_type(self, expected: NodeType) -> Self {
        assert_eq!(self.block.node_type(), expected, "{}: Wrong node type", self.context);
        self
    }

    pub fn indent(self, expected: &str) -> Self {
        assert_eq!(self.block.indent(), expected, "{}: Wrong indent", self.context);
        self
    }

    pub fn to_text(self, expected: &str) -> Self {
        assert_eq!(self.block.to_text(), expected, "{}: Wrong text", self.context);
        self
    }

    pub fn location(self, start: (usize, usize), end: (usize, usize)) -> Self {
        assert_location(self.block.location(), start, end, &self.context);
        self
    }
}

pub struct HeadingAssertion<'a> {
    node: &'a Heading,
    context: String,
}

impl<'a> HeadingAssertion<'a> {
    pub fn level(self, expected: u8) -> Self {
        assert_eq!(self.node.level(), expected, "{}: Wrong heading level", self.context);
        self
    }

    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.node.text.content(), &self.context);
        self
    }

    pub fn text_with<F>(self, assertion: F) -> Self
    where
        F: FnOnce(TextAssertion<'a>),
    {
        assertion(TextAssertion::new(&self.node.text, &self.context));
        self
    }
}

pub struct BlockquoteAssertion<'a> {
    node: &'a Blockquote,
    context: String,
}

impl<'a> BlockquoteAssertion<'a> {
    fn quoted(&self) -> &'a Text {
        match self.node.text() {
            Some(text) => text,
            None => panic!("{}: Blockquote has no text", self.context),
        }
    }

    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.quoted().content(), &self.context);
        self
    }

    pub fn text_with<F>(self, assertion: F) -> Self
    where
        F: FnOnce(TextAssertion<'a>),
    {
        assertion(TextAssertion::new(self.quoted(), &self.context));
        self
    }
}

pub struct ListAssertion<'a> {
    node: &'a List,
    context: String,
}

impl<'a> ListAssertion<'a> {
    pub fn ordered(self) -> Self {
        assert_eq!(self.node.kind, ListKind::Ordered, "{}: Expected ordered list", self.context);
        self
    }

    pub fn unordered(self) -> Self {
        assert_eq!(
            self.node.kind,
            ListKind::Unordered,
            "{}: Expected unordered list",
            self.context
        );
        self
    }

    pub fn item_count(self, expected: usize) -> Self {
        assert_eq!(
            self.node.items.len(),
            expected,
            "{}: Wrong number of list items",
            self.context
        );
        self
    }

    pub fn prefixes(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.node.items.iter().map(|i| i.prefix.as_str()).collect();
        assert_eq!(actual, expected, "{}: Wrong item prefixes", self.context);
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ListItemAssertion<'a>),
    {
        let Some(item) = self.node.items.get(index) else {
            panic!(
                "{}: Item index {} out of bounds (list has {} items)",
                self.context,
                index,
                self.node.items.len()
            );
        };
        assertion(ListItemAssertion {
            node: item,
            context: format!("{}.items[{}]", self.context, index),
        });
        self
    }
}

pub struct ListItemAssertion<'a> {
    node: &'a ListItem,
    context: String,
}

impl<'a> ListItemAssertion<'a> {
    pub fn prefix(self, expected: &str) -> Self {
        assert_eq!(self.node.prefix, expected, "{}: Wrong prefix", self.context);
        self
    }

    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.node.text.content(), &self.context);
        self
    }

    pub fn text_with<F>(self, assertion: F) -> Self
    where
        F: FnOnce(TextAssertion<'a>),
    {
        assertion(TextAssertion::new(&self.node.text, &self.context));
        self
    }

    pub fn location(self, start: (usize, usize), end: (usize, usize)) -> Self {
        assert_location(&self.node.location, start, end, &self.context);
        self
    }
}

pub struct CodeBlockAssertion<'a> {
    node: &'a CodeBlock,
    context: String,
}

impl<'a> CodeBlockAssertion<'a> {
    pub fn content(self, expected: &str) -> Self {
        assert_eq!(self.node.content, expected, "{}: Wrong code content", self.context);
        self
    }
}

pub struct NewlineAssertion<'a> {
    node: &'a Newline,
    context: String,
}

impl<'a> NewlineAssertion<'a> {
    pub fn ending(self, expected: LineEnding) -> Self {
        assert_eq!(self.node.ending, expected, "{}: Wrong line ending", self.context);
        self
    }
}

pub struct ParagraphAssertion<'a> {
    node: &'a Paragraph,
    context: String,
}

impl<'a> ParagraphAssertion<'a> {
    fn content(&self) -> String {
        self.node
            .text
            .as_ref()
            .map(|t| t.content())
            .unwrap_or_default()
    }

    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.content(), &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.content(), &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.content(), &self.context);
        self
    }

    pub fn no_text(self) -> Self {
        assert!(
            self.node.text.is_none(),
            "{}: Expected a paragraph without text",
            self.context
        );
        self
    }

    pub fn text_with<F>(self, assertion: F) -> Self
    where
        F: FnOnce(TextAssertion<'a>),
    {
        let Some(text) = self.node.text.as_ref() else {
            panic!("{}: Paragraph has no text", self.context);
        };
        assertion(TextAssertion::new(text, &self.context));
        self
    }
}

// ============================================================================
// Text and inlines
// ============================================================================

pub struct TextAssertion<'a> {
    node: &'a Text,
    context: String,
}

impl<'a> TextAssertion<'a> {
    fn new(node: &'a Text, context: &str) -> Self {
        Self {
            node,
            context: format!("{}.text", context),
        }
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.node.children.len(),
            expected,
            "{}: Wrong number of children: {:?}",
            self.context,
            self.node.children
        );
        self
    }

    pub fn literal(self, index: usize, expected: &str) -> Self {
        match self.node.children.get(index) {
            Some(TextChild::Literal(actual)) => {
                assert_eq!(actual, expected, "{}[{}]: Wrong literal", self.context, index)
            }
            other => panic!(
                "{}[{}]: Expected literal {:?}, found {:?}",
                self.context, index, expected, other
            ),
        }
        self
    }

    pub fn inline<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(InlineAssertion<'a>),
    {
        match self.node.children.get(index) {
            Some(TextChild::Inline(node)) => assertion(InlineAssertion {
                node,
                context: format!("{}[{}]", self.context, index),
            }),
            other => panic!(
                "{}[{}]: Expected inline element, found {:?}",
                self.context, index, other
            ),
        }
        self
    }

    pub fn inline_count(self, expected: usize) -> Self {
        assert_eq!(
            self.node.inlines().count(),
            expected,
            "{}: Wrong number of inline elements",
            self.context
        );
        self
    }

    pub fn line_ending(self, expected: Option<&str>) -> Self {
        assert_eq!(self.node.line_ending(), expected, "{}: Wrong line ending", self.context);
        self
    }

    pub fn location(self, start: (usize, usize), end: (usize, usize)) -> Self {
        assert_location(&self.node.location, start, end, &self.context);
        self
    }
}

pub struct InlineAssertion<'a> {
    node: &'a InlineElement,
    context: String,
}

impl<'a> InlineAssertion<'a> {
    pub fn node_type(self, expected: NodeType) -> Self {
        assert_eq!(self.node.node_type(), expected, "{}: Wrong inline type", self.context);
        self
    }

    pub fn value(self, expected: &str) -> Self {
        assert_eq!(self.node.value(), expected, "{}: Wrong value", self.context);
        self
    }

    pub fn url(self, expected: &str) -> Self {
        assert_eq!(self.node.url(), Some(expected), "{}: Wrong url", self.context);
        self
    }

    pub fn to_text(self, expected: &str) -> Self {
        assert_eq!(self.node.to_text(), expected, "{}: Wrong text", self.context);
        self
    }

    pub fn location(self, start: (usize, usize), end: (usize, usize)) -> Self {
        assert_location(&self.node.location, start, end, &self.context);
        self
    }
}
