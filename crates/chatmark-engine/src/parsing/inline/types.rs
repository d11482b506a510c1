use serde::Serialize;

/// A run of formatted or plain text within a block.
///
/// `Bold` and `Italic` only ever wrap `Text`; emphasis does not nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InlineSpan {
    /// Text that isn't part of any special construct.
    Text(String),
    /// A backtick code span. This is a raw zone, kept verbatim.
    Code(String),
    Bold(Vec<InlineSpan>),
    Italic(Vec<InlineSpan>),
    /// A bare URL found in text.
    Link {
        /// Target, with `https://` supplied for `www.` matches.
        url: String,
        /// The text as written in the message.
        display: String,
    },
}
