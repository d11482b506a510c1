use super::marker_text::text_after_marker;
use crate::parsing::blocks::types::HeadingLevel;

/// `#`-prefixed headings, one to three levels deep.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';

    /// Parses a heading line into its level and trimmed text.
    pub fn parse(line: &str) -> Option<(HeadingLevel, &str)> {
        let count = line.bytes().take_while(|&b| b == Self::MARKER).count();
        let level = HeadingLevel::from_marker_count(count)?;
        let text = text_after_marker(&line[count..])?.trim();
        if text.is_empty() {
            return None;
        }
        Some((level, text))
    }
}
