//! Testing utilities for mdlex
//!
//!     Parser tests assert on documents through a fluent API instead of walking
//!     nodes by hand. A hand-written walk breaks whenever a node changes shape;
//!     the assertions keep that knowledge in one place.
//!
//!     ```rust,ignore
//!     use crate::mdlex::testing::assert_ast;
//!
//!     let doc = parse_document("# Title\n* a\n* b").unwrap();
//!     assert_ast(&doc)
//!         .block_count(2)
//!         .block(0, |b| {
//!             b.assert_heading().level(1).text("Title");
//!         })
//!         .block(1, |b| {
//!             b.assert_list().unordered().prefixes(&["*", "*"]);
//!         });
//!     ```
//!
//!     Shared inputs come from the verified samples in
//!     [`MarkdownSources`](crate::mdlex::processor::markdown_sources::MarkdownSources)
//!     rather than ad-hoc strings wherever a sample covers the case.

pub mod testing_assertions;
pub mod testing_matchers;

pub use testing_assertions::{
    assert_ast, BlockAssertion, BlockquoteAssertion, CodeBlockAssertion, DocumentAssertion,
    HeadingAssertion, InlineAssertion, ListAssertion, ListItemAssertion, NewlineAssertion,
    ParagraphAssertion, TextAssertion,
};
pub use testing_matchers::TextMatch;
