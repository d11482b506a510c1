//! # Message Parsing
//!
//! Converts a raw chat message into a tree of [`Block`]s carrying
//! [`InlineSpan`]s.
//!
//! ## Pipeline
//!
//! 1. **Line endings** (`lines`): `\r\n` and `\r` become `\n`
//! 2. **Block segmentation** (`blocks`): each line is classified on its own,
//!    then a `BlockBuilder` state machine groups lines into blocks
//! 3. **Inline formatting** (`inline`): every text-bearing block is scanned
//!    for code spans, autolinks, bold and italic, in that order
//!
//! Both stages are total: any string produces a non-empty block sequence and
//! malformed markup degrades to literal text.

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod snapshot;

use blocks::{Block, BlockBuilder, MessageLineClassifier};
use inline::InlineSpan;

/// Segments a chat message into blocks.
///
/// Headings, list items and paragraphs are inline-formatted as they are
/// closed; code block content is kept verbatim. Empty or whitespace-only
/// input yields a single paragraph holding the raw input.
pub fn segment(text: &str) -> Vec<Block> {
    let normalized = lines::normalize_line_endings(text);
    let classifier = MessageLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in lines::split_lines(&normalized) {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    let blocks = builder.finish();
    if blocks.is_empty() {
        log::debug!("no blocks in {} byte message, using raw paragraph", text.len());
        return vec![Block::Paragraph {
            content: vec![InlineSpan::Text(text.to_string())],
        }];
    }
    blocks
}

/// Formats a single run of block text into inline spans.
pub fn format_inline(text: &str) -> Vec<InlineSpan> {
    inline::parse_inline(text)
}
