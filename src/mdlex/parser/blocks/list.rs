//! List matcher
//!
//! A list is a run of consecutive item lines. After the first item each
//! prefix must continue the sequence: `*` after `*`, or the next number after
//! a numbered item. The first line that does not continue is left for the
//! driver to dispatch again.

use super::{BlockMatcher, Cursor, Parsed};
use crate::mdlex::ast::elements::list::UNORDERED_MARKER;
use crate::mdlex::ast::{Block, List, ListItem, ListKind, Location, TextParent};
use crate::mdlex::lexer::utilities::{
    ahead, compare_kind, compare_value, consume_until, is_newline, is_space, is_text_like,
};
use crate::mdlex::lexer::{Token, TokenKind};
use crate::mdlex::parser::error::ParseResult;
use crate::mdlex::parser::text::parse_text;
use tracing::trace;

fn ordered_number(prefix: &str) -> Option<u64> {
    prefix.strip_suffix('.')?.parse().ok()
}

/// Whether `current` may follow `previous` in the same list
pub fn continues(previous: Option<&str>, current: &str) -> bool {
    match previous {
        None => !current.is_empty(),
        Some(UNORDERED_MARKER) => current == UNORDERED_MARKER,
        Some(previous) => match (ordered_number(previous), ordered_number(current)) {
            (Some(previous), Some(current)) => previous.checked_add(1) == Some(current),
            _ => false,
        },
    }
}

pub struct ListMatcher;

impl BlockMatcher for ListMatcher {
    fn name(&self) -> &'static str {
        "list"
    }

    fn matches(&self, rest: &[Token<'_>]) -> bool {
        if compare_value(rest.first(), UNORDERED_MARKER) {
            return is_space(ahead(rest, 1)) && is_text_like(ahead(rest, 2));
        }
        let digits = rest
            .iter()
            .take_while(|t| t.kind == TokenKind::Digit)
            .count();
        digits > 0
            && compare_value(rest.get(digits), ".")
            && is_space(ahead(rest, digits + 1))
            && is_text_like(ahead(rest, digits + 2))
    }

    fn parse(&self, tokens: &[Token<'_>], cursor: Cursor) -> ParseResult<Parsed> {
        let kind = if compare_kind(tokens.get(cursor.index), TokenKind::Sign) {
            ListKind::Unordered
        } else {
            ListKind::Ordered
        };

        let mut items = Vec::new();
        let mut previous: Option<String> = None;
        let mut index = cursor.index;

        while self.matches(ahead(tokens, index)) {
            let Some(prefix) = consume_until(tokens, index, is_space, is_newline) else {
                break;
            };
            if !continues(previous.as_deref(), &prefix.text) {
                trace!(prefix = %prefix.text, "list sequence broken");
                break;
            }

            let parsed = parse_text(tokens, prefix.index + 1, TextParent::ListItem)?;
            let location = Location::covering(tokens.get(index..parsed.next).unwrap_or(&[]));
            items.push(ListItem::new(prefix.text.clone(), parsed.text, location));
            previous = Some(prefix.text);
            index = parsed.next;
        }

        let list = List::new(
            cursor.indent(tokens),
            kind,
            items,
            cursor.location_to(tokens, index),
        );
        Ok(Parsed {
            block: Block::List(list),
            next: index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdlex::ast::ToText;
    use crate::mdlex::lexer::tokenize;
    use rstest::rstest;

    #[rstest]
    #[case("* a", true)]
    #[case("1. a", true)]
    #[case("42. a", true)]
    #[case("*a", false)]
    #[case("1.a", false)]
    #[case("1 a", false)]
    #[case("* *a*", false)]
    #[case("- a", false)]
    fn test_matches(#[case] source: &str, #[case] expected: bool) {
        assert_eq!(ListMatcher.matches(&tokenize(source)), expected);
    }

    #[rstest]
    #[case(None, "*", true)]
    #[case(None, "7.", true)]
    #[case(Some("*"), "*", true)]
    #[case(Some("*"), "1.", false)]
    #[case(Some("1."), "2.", true)]
    #[case(Some("1."), "3.", false)]
    #[case(Some("9."), "10.", true)]
    #[case(Some("2."), "*", false)]
    #[case(Some("18446744073709551615."), "0.", false)]
    fn test_continues(#[case] previous: Option<&str>, #[case] current: &str, #[case] expected: bool) {
        assert_eq!(continues(previous, current), expected);
    }

    fn parse(source: &str) -> (List, usize) {
        let tokens = tokenize(source);
        let parsed = ListMatcher.parse(&tokens, Cursor::new(0, 0)).unwrap();
        match parsed.block {
            Block::List(list) => (list, parsed.next),
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_ordered_list() {
        let (list, next) = parse("1. one\n2. two\n3. three");
        assert_eq!(list.kind, ListKind::Ordered);
        let prefixes: Vec<&str> = list.items.iter().map(|i| i.prefix.as_str()).collect();
        assert_eq!(prefixes, vec!["1.", "2.", "3."]);
        assert_eq!(list.items[2].text.content(), "three");
        assert_eq!(next, 22);
    }

    #[test]
    fn test_list_stops_at_gap() {
        let (list, next) = parse("1. A\n3. B");
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.to_text(), "1. A\n");
        assert_eq!(next, 5);
    }

    #[test]
    fn test_list_stops_at_other_block() {
        let (list, next) = parse("* a\n* b\n\nafter");
        assert_eq!(list.kind, ListKind::Unordered);
        assert_eq!(list.items.len(), 2);
        assert_eq!(next, 8);
    }

    #[test]
    fn test_item_locations() {
        let (list, _) = parse("* a\n* b");
        assert_eq!(list.items[1].location.row_start(), 2);
        assert_eq!(list.items[1].location.column_end(), 2);
        assert_eq!(list.location.row_end(), 2);
    }
}
