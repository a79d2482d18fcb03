//! Tree serializers
//!
//! Both serializers render an [`AstSnapshot`](crate::mdlex::ast::AstSnapshot)
//! rather than the AST itself:
//!
//! - [`tag`]: XML-like nested tags, one node per line, labels escaped.
//! - [`treeviz`]: a box-drawing tree with one icon per node type, built for
//!   quick scanning in a terminal.
//!
//! JSON and YAML output serialize the AST directly with serde and live in the
//! processor.

pub mod tag;
pub mod treeviz;

pub use tag::serialize_document;
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_options, TreevizOptions};
