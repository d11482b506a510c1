use super::{
    kinds::{BoldSection, CodeFence, Heading, ListMarker},
    types::HeadingLevel,
};

/// A block that a line would open, with the slices the builder needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    FencedCode { language: Option<&'a str> },
    Heading { level: HeadingLevel, text: &'a str },
    BoldSection { text: &'a str },
    ListItem { ordered: bool, text: &'a str },
}

/// Detects block openers in precedence order; the first match wins.
pub fn try_open_leaf(line: &str) -> Option<BlockOpen<'_>> {
    // Precedence: fence beats everything else.
    if let Some(language) = CodeFence::opener(line) {
        return Some(BlockOpen::FencedCode { language });
    }
    if let Some((level, text)) = Heading::parse(line) {
        return Some(BlockOpen::Heading { level, text });
    }
    if let Some(text) = BoldSection::parse(line) {
        return Some(BlockOpen::BoldSection { text });
    }
    if let Some((ordered, text)) = ListMarker::parse(line) {
        return Some(BlockOpen::ListItem { ordered, text });
    }
    None
}
