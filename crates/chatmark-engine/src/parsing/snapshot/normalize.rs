use crate::parsing::{blocks::Block, inline::InlineSpan};

/// Concatenates the literal characters carried by a span sequence.
///
/// Delimiters are gone after parsing, so for any block text `s` this equals
/// `s` with the consumed backticks and asterisks removed. Links contribute
/// their display text.
pub fn plain_text(spans: &[InlineSpan]) -> String {
    let mut out = String::new();
    push_plain_text(spans, &mut out);
    out
}

fn push_plain_text(spans: &[InlineSpan], out: &mut String) {
    for span in spans {
        match span {
            InlineSpan::Text(t) | InlineSpan::Code(t) => out.push_str(t),
            InlineSpan::Bold(inner) | InlineSpan::Italic(inner) => push_plain_text(inner, out),
            InlineSpan::Link { display, .. } => out.push_str(display),
        }
    }
}

/// The literal text of a whole block; list items are joined with `\n`.
pub fn block_text(block: &Block) -> String {
    match block {
        Block::CodeBlock { content, .. } => content.clone(),
        Block::Heading { content, .. } | Block::Paragraph { content } => plain_text(content),
        Block::List { items, .. } => items
            .iter()
            .map(|item| plain_text(item))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
