//! Property-based tests for lossless parsing
//!
//! Any string parses, the tree reproduces the input exactly, and parsing the
//! reproduction yields the same tree. Markdown-shaped inputs exercise the block
//! and inline matchers; arbitrary strings exercise the degradation paths.

use mdlex::mdlex::ast::{AstNode, Location};
use mdlex::mdlex::lexer::{detokenize, tokenize};
use mdlex::{parse_document, ToText};
use proptest::prelude::*;

/// One line of markdown-ish content, biased towards block prefixes
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "#{1,7} [a-z *_`]{0,12}",
        "[*] [a-z *_`]{0,12}",
        "[0-9]{1,3}\\. [a-z]{1,8}",
        ">{1,2} [a-z]{1,8}",
        "```[a-z ]{0,8}",
        "[ ]{0,4}[a-zA-Z `*_!#>.()\\[\\]]{0,24}",
        "[a-z]{0,4}\\[[a-z]{0,4}\\]\\([a-z:/.]{0,8}\\)",
        Just(String::new()),
    ]
}

fn line_ending_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("\n"), Just("\r\n"), Just("\r")]
}

fn markdown_document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((line_strategy(), line_ending_strategy()), 0..12).prop_map(|lines| {
        lines
            .into_iter()
            .map(|(line, ending)| format!("{}{}", line, ending))
            .collect()
    })
}

fn assert_blocks_ordered(locations: &[Location]) {
    for pair in locations.windows(2) {
        assert!(
            pair[0].end < pair[1].start,
            "blocks overlap: {} then {}",
            pair[0],
            pair[1]
        );
    }
}

proptest! {
    #[test]
    fn test_tokens_reproduce_source(input in "\\PC*") {
        prop_assert_eq!(detokenize(&tokenize(&input)), input);
    }

    #[test]
    fn test_arbitrary_text_round_trips(input in any::<String>()) {
        let doc = parse_document(&input).expect("parsing never fails");
        prop_assert_eq!(doc.to_text(), input);
    }

    #[test]
    fn test_markdown_round_trips(input in markdown_document_strategy()) {
        let doc = parse_document(&input).expect("parsing never fails");
        prop_assert_eq!(doc.to_text(), input);
    }

    #[test]
    fn test_reparse_is_identical(input in markdown_document_strategy()) {
        let first = parse_document(&input).expect("parsing never fails");
        let second = parse_document(&first.to_text()).expect("parsing never fails");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_block_locations_are_ordered(input in markdown_document_strategy()) {
        let doc = parse_document(&input).expect("parsing never fails");
        let locations: Vec<Location> = doc.iter_blocks().map(|b| *b.location()).collect();
        assert_blocks_ordered(&locations);
        for location in &locations {
            prop_assert!(doc.location.contains(location.start));
            prop_assert!(doc.location.contains(location.end));
        }
    }

    #[test]
    fn test_blocks_reproduce_their_slice(input in markdown_document_strategy()) {
        let doc = parse_document(&input).expect("parsing never fails");
        let mut offset = 0;
        for block in doc.iter_blocks() {
            let text = block.to_text();
            prop_assert!(input[offset..].starts_with(&text));
            offset += text.len();
        }
        prop_assert_eq!(offset, input.len());
    }
}

#[test]
fn test_empty_input() {
    let doc = parse_document("").unwrap();
    assert!(doc.is_empty());
    assert_eq!(doc.to_text(), "");
}
