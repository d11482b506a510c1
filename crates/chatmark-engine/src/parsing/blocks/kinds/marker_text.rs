/// Splits the text that follows a block marker off the whitespace gap.
///
/// At least one whitespace character must follow the marker and the text
/// must be non-empty. The gap absorbs all leading whitespace, except that a
/// whitespace-only remainder of two or more characters keeps its final
/// character as the text.
pub fn text_after_marker(rest: &str) -> Option<&str> {
    let text = rest.trim_start();
    if text.len() == rest.len() {
        return None;
    }
    if !text.is_empty() {
        return Some(text);
    }
    let (last, _) = rest.char_indices().next_back()?;
    (last > 0).then(|| &rest[last..])
}
