use super::marker_text::text_after_marker;

/// List item markers: `-`/`*` bullets and `1.`/`1)` numbers.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [u8; 2] = [b'-', b'*'];
    pub const ORDINAL_TERMINATORS: [u8; 2] = [b'.', b')'];

    /// Parses a list line into `(ordered, item_text)`.
    ///
    /// Leading indentation is ignored; there is no nesting.
    pub fn parse(line: &str) -> Option<(bool, &str)> {
        let body = line.trim_start();
        let bytes = body.as_bytes();
        let first = *bytes.first()?;

        if Self::BULLETS.contains(&first) {
            return text_after_marker(&body[1..]).map(|text| (false, text));
        }

        let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let terminator = *bytes.get(digits)?;
        if !Self::ORDINAL_TERMINATORS.contains(&terminator) {
            return None;
        }
        text_after_marker(&body[digits + 1..]).map(|text| (true, text))
    }
}
