use serde::Serialize;

use crate::parsing::inline::InlineSpan;

/// Heading depth. Only three levels exist in chat messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Maps a count of `#` markers to a level, if it is in range.
    pub fn from_marker_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

/// A top-level structural unit of a parsed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A fenced code block. Content is kept verbatim.
    CodeBlock {
        /// Language token after the opening fence, if any.
        language: Option<String>,
        content: String,
    },
    /// A `#`..`###` heading or a bold-section line.
    Heading {
        level: HeadingLevel,
        content: Vec<InlineSpan>,
    },
    /// A run of consecutive list lines.
    List {
        ordered: bool,
        /// One span sequence per item.
        items: Vec<Vec<InlineSpan>>,
    },
    /// Consecutive non-blank lines, newlines preserved.
    Paragraph { content: Vec<InlineSpan> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_counts_map_to_levels() {
        assert_eq!(HeadingLevel::from_marker_count(1), Some(HeadingLevel::H1));
        assert_eq!(HeadingLevel::from_marker_count(3), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::from_marker_count(0), None);
        assert_eq!(HeadingLevel::from_marker_count(4), None);
    }

    #[test]
    fn level_serializes_as_number() {
        let json = serde_json::to_string(&Block::Heading {
            level: HeadingLevel::H2,
            content: vec![InlineSpan::Text("Hi".into())],
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"type":"heading","level":2,"content":[{"type":"text","value":"Hi"}]}"#
        );
    }

    #[test]
    fn code_block_serializes_missing_language_as_null() {
        let json = serde_json::to_string(&Block::CodeBlock {
            language: None,
            content: "x".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"code_block","language":null,"content":"x"}"#);
    }
}
