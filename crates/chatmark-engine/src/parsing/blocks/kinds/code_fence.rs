/// Fenced code block delimiters.
///
/// Only backtick fences exist in chat messages. An opener may carry a single
/// language token; a closer is the bare fence.
pub struct CodeFence;

impl CodeFence {
    pub const TICKS: &'static str = "```";

    /// Recognizes an opening fence.
    ///
    /// Returns `Some(language)` for a fence line, where `language` is the
    /// optional token after the ticks. Anything else on the line (a second
    /// word, a fourth backtick) disqualifies it.
    pub fn opener(line: &str) -> Option<Option<&str>> {
        let rest = line.strip_prefix(Self::TICKS)?.trim();
        if rest.is_empty() {
            return Some(None);
        }
        if rest.bytes().all(Self::is_language_byte) {
            return Some(Some(rest));
        }
        None
    }

    /// True if the line closes an open fence.
    pub fn closes(line: &str) -> bool {
        line.strip_prefix(Self::TICKS)
            .is_some_and(|rest| rest.trim().is_empty())
    }

    fn is_language_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || matches!(b, b'_' | b'+' | b'-')
    }
}
