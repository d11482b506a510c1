use std::borrow::Cow;

/// Rewrites `\r\n` and lone `\r` line endings to `\n`.
///
/// Borrows the input when it contains no carriage returns.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Splits normalized text into lines without their terminators.
///
/// A trailing newline yields a final empty line, which the block builder
/// treats as blank.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unix_endings_are_borrowed() {
        let out = normalize_line_endings("a\nb");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, "a\nb");
    }

    #[test]
    fn windows_endings_become_newlines() {
        assert_eq!(normalize_line_endings("a\r\nb\r\n"), "a\nb\n");
    }

    #[test]
    fn lone_carriage_returns_become_newlines() {
        assert_eq!(normalize_line_endings("a\rb\r\rc"), "a\nb\n\nc");
    }

    #[test]
    fn mixed_endings() {
        assert_eq!(normalize_line_endings("a\r\n\rb\nc"), "a\n\nb\nc");
    }

    #[test]
    fn split_keeps_empty_lines() {
        let lines: Vec<_> = split_lines("a\n\nb\n").collect();
        assert_eq!(lines, vec!["a", "", "b", ""]);
    }

    #[test]
    fn split_empty_input() {
        let lines: Vec<_> = split_lines("").collect();
        assert_eq!(lines, vec![""]);
    }
}
