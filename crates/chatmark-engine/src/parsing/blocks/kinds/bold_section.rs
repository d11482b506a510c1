/// A line that is a single bold span, optionally followed by a colon.
///
/// Chat models use `**Section:**` lines as headings; they are promoted to
/// level-2 headings.
pub struct BoldSection;

impl BoldSection {
    pub const DELIM: &'static str = "**";
    pub const COLON: char = ':';

    /// Returns the trimmed inner text if the whole line is one bold span.
    pub fn parse(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::DELIM)?;
        let rest = rest.trim_end();
        let rest = rest.strip_suffix(Self::COLON).unwrap_or(rest);
        let inner = rest.strip_suffix(Self::DELIM)?;
        if inner.contains(Self::DELIM) {
            return None;
        }
        let inner = inner.trim();
        if inner.is_empty() {
            return None;
        }
        Some(inner)
    }
}
