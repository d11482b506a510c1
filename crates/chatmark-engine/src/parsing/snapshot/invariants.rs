use crate::parsing::{blocks::Block, inline::InlineSpan};

/// Validates parser output invariants.
///
/// Asserts that:
/// - The block sequence is non-empty
/// - Every list has at least one item and no item is empty
/// - `Bold` and `Italic` wrap only non-empty `Text`
/// - `Code` spans and `Link` fields are non-empty
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(blocks: &[Block]) {
    assert!(!blocks.is_empty(), "parser produced no blocks");

    for (index, block) in blocks.iter().enumerate() {
        match block {
            Block::CodeBlock { .. } => {}
            Block::Heading { content, .. } => check_spans(index, content),
            Block::Paragraph { content } => check_spans(index, content),
            Block::List { items, .. } => {
                assert!(!items.is_empty(), "block {index}: list without items");
                for item in items {
                    assert!(!item.is_empty(), "block {index}: empty list item");
                    check_spans(index, item);
                }
            }
        }
    }
}

fn check_spans(index: usize, spans: &[InlineSpan]) {
    for span in spans {
        match span {
            InlineSpan::Text(_) => {}
            InlineSpan::Code(code) => {
                assert!(!code.is_empty(), "block {index}: empty code span");
            }
            InlineSpan::Bold(inner) | InlineSpan::Italic(inner) => {
                assert!(
                    matches!(inner.as_slice(), [InlineSpan::Text(t)] if !t.is_empty()),
                    "block {index}: emphasis must wrap one non-empty text span, got {inner:?}"
                );
            }
            InlineSpan::Link { url, display } => {
                assert!(
                    !url.is_empty() && !display.is_empty(),
                    "block {index}: empty link {span:?}"
                );
            }
        }
    }
}
