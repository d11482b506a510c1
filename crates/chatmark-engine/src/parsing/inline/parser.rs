use super::{
    cursor::Cursor,
    kinds::{Autolink, Bold, CodeSpan, Italic, autolink::UrlPrefix},
    types::InlineSpan,
};

/// A slice of block text during inline passes.
#[derive(Debug)]
enum Piece<'a> {
    /// Text no pass has claimed yet.
    Residual(&'a str),
    Claimed(InlineSpan),
}

type TryParse = fn(&mut Cursor<'_>) -> Option<InlineSpan>;

/// Extraction passes in precedence order. Code spans run first so that
/// nothing inside backticks is ever linked or emphasized.
const PASSES: [TryParse; 4] = [
    try_parse_code_span,
    try_parse_autolink,
    try_parse_bold,
    try_parse_italic,
];

/// Parses block text into a sequence of [`InlineSpan`]s.
///
/// Each pass runs over the residual text left by the previous ones. Text no
/// pass claims is emitted as [`InlineSpan::Text`] with its exact content, so
/// only delimiters are ever dropped. Empty input yields no spans.
pub fn parse_inline(s: &str) -> Vec<InlineSpan> {
    let mut pieces = vec![Piece::Residual(s)];

    for try_parse in PASSES {
        let mut next = Vec::with_capacity(pieces.len());
        for piece in pieces {
            match piece {
                Piece::Residual(text) => split_residual(text, try_parse, &mut next),
                claimed => next.push(claimed),
            }
        }
        pieces = next;
    }

    pieces
        .into_iter()
        .map(|piece| match piece {
            Piece::Residual(text) => InlineSpan::Text(text.to_string()),
            Piece::Claimed(span) => span,
        })
        .collect()
}

/// Runs one pass over a residual segment, splitting it around claimed spans.
///
/// The cursor only ever moves forward; a failed attempt restores it and the
/// scan resumes one byte later.
fn split_residual<'a>(segment: &'a str, try_parse: TryParse, out: &mut Vec<Piece<'a>>) {
    // Helper to flush accumulated text as a residual piece
    fn flush_text<'a>(out: &mut Vec<Piece<'a>>, text: &'a str) {
        if !text.is_empty() {
            out.push(Piece::Residual(text));
        }
    }

    let mut cur = Cursor::new(segment);
    let mut text_start = cur.pos();

    while !cur.eof() {
        let start = cur.pos();
        if let Some(span) = try_parse(&mut cur) {
            flush_text(out, cur.slice(text_start, start));
            out.push(Piece::Claimed(span));
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(out, cur.slice(text_start, segment.len()));
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span is empty or if it isn't
/// closed. On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();
    let closed = cur.skip_until(CodeSpan::TICK);
    let inner_end = cur.pos();

    if !closed || inner_end == inner_start {
        // Not closed or empty, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(InlineSpan::Code(cur.slice(inner_start, inner_end).to_string()))
}

/// Attempts to parse a bare URL starting at the current position.
///
/// The URL runs to the first whitespace or to a `)` that closes no `(`
/// opened inside the URL. At least one character must follow the prefix.
fn try_parse_autolink(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    let prefix = url_prefix(cur)?;

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(prefix.prefix_len());
    let body_start = cur.pos();

    let mut depth = 0usize;
    while let Some(c) = cur.peek_char() {
        if c.is_whitespace() {
            break;
        }
        if c == Autolink::OPEN_PAREN {
            depth += 1;
        } else if c == Autolink::CLOSE_PAREN {
            if depth == 0 {
                break;
            }
            depth -= 1;
        }
        cur.bump_char();
    }

    if cur.pos() == body_start {
        *cur = saved;
        return None;
    }

    let display = cur.slice(start, cur.pos());
    Some(InlineSpan::Link {
        url: Autolink::url_for(prefix, display),
        display: display.to_string(),
    })
}

fn url_prefix(cur: &Cursor<'_>) -> Option<UrlPrefix> {
    if let Some(scheme) = Autolink::SCHEMES
        .iter()
        .find(|scheme| cur.starts_with_ignore_ascii_case(scheme))
    {
        return Some(UrlPrefix::Scheme(scheme.len()));
    }
    cur.starts_with_ignore_ascii_case(Autolink::WWW)
        .then_some(UrlPrefix::Www(Autolink::WWW.len()))
}

/// Attempts to parse `**text**` where `text` is non-empty and has no `*`.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if !cur.starts_with(Bold::DELIM) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Bold::DELIM.len());
    let inner_start = cur.pos();
    cur.skip_until(Italic::DELIM);
    let inner_end = cur.pos();

    if inner_end == inner_start || !cur.starts_with(Bold::DELIM) {
        *cur = saved;
        return None;
    }
    cur.bump_n(Bold::DELIM.len());

    Some(InlineSpan::Bold(vec![InlineSpan::Text(
        cur.slice(inner_start, inner_end).to_string(),
    )]))
}

/// Attempts to parse `*text*` between whitespace boundaries.
///
/// The opening `*` must start the segment or follow whitespace; the closing
/// `*` must end the segment or precede whitespace. This keeps `2*3*4` and
/// stray bold markers literal.
fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some(Italic::DELIM) {
        return None;
    }
    if !cur.at_start() && !cur.prev_char().is_some_and(char::is_whitespace) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // *
    let inner_start = cur.pos();
    let closed = cur.skip_until(Italic::DELIM);
    let inner_end = cur.pos();

    if !closed || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing *

    if !cur.eof() && !cur.peek_char().is_some_and(char::is_whitespace) {
        *cur = saved;
        return None;
    }

    Some(InlineSpan::Italic(vec![InlineSpan::Text(
        cur.slice(inner_start, inner_end).to_string(),
    )]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn text(s: &str) -> InlineSpan {
        InlineSpan::Text(s.to_string())
    }

    fn bold(s: &str) -> InlineSpan {
        InlineSpan::Bold(vec![text(s)])
    }

    fn italic(s: &str) -> InlineSpan {
        InlineSpan::Italic(vec![text(s)])
    }

    fn code(s: &str) -> InlineSpan {
        InlineSpan::Code(s.to_string())
    }

    fn link(url: &str, display: &str) -> InlineSpan {
        InlineSpan::Link {
            url: url.to_string(),
            display: display.to_string(),
        }
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn empty_input_has_no_spans() {
        assert_eq!(parse_inline(""), vec![]);
    }

    #[test]
    fn parse_code_span() {
        assert_eq!(
            parse_inline("a `code` b"),
            vec![text("a "), code("code"), text(" b")]
        );
    }

    #[test]
    fn code_span_suppresses_emphasis_and_links() {
        assert_eq!(
            parse_inline("`**x** https://a.b *y*`"),
            vec![code("**x** https://a.b *y*")]
        );
    }

    #[test]
    fn empty_code_span_stays_literal() {
        assert_eq!(parse_inline("``a`"), vec![text("`"), code("a")]);
        assert_eq!(parse_inline("``"), vec![text("``")]);
    }

    #[test]
    fn unclosed_code_span_becomes_text() {
        assert_eq!(parse_inline("`unclosed code"), vec![text("`unclosed code")]);
    }

    #[test]
    fn parse_bold() {
        assert_eq!(
            parse_inline("Hello **world**"),
            vec![text("Hello "), bold("world")]
        );
    }

    #[test]
    fn bold_inside_word() {
        assert_eq!(
            parse_inline("un**frigging**believable"),
            vec![text("un"), bold("frigging"), text("believable")]
        );
    }

    #[test]
    fn bold_with_asterisk_inside_is_literal_until_clean_pair() {
        assert_eq!(
            parse_inline("***x***"),
            vec![text("*"), bold("x"), text("*")]
        );
    }

    #[test]
    fn parse_italic() {
        assert_eq!(
            parse_inline("an *emphasized* word"),
            vec![text("an "), italic("emphasized"), text(" word")]
        );
    }

    #[test]
    fn italic_at_segment_edges() {
        assert_eq!(parse_inline("*all*"), vec![italic("all")]);
    }

    #[test]
    fn italic_after_bold_starts_new_segment() {
        assert_eq!(
            parse_inline("**b***i*"),
            vec![bold("b"), italic("i")]
        );
    }

    #[test]
    fn adjacent_italics() {
        assert_eq!(
            parse_inline("*a* *b*"),
            vec![italic("a"), text(" "), italic("b")]
        );
    }

    #[rstest]
    #[case("2*3*4")]
    #[case("a * b")]
    #[case("*open")]
    #[case("word*")]
    #[case("*a*b")]
    #[case("**")]
    #[case("****")]
    #[case("a **b*c** d")]
    fn stray_asterisks_stay_literal(#[case] input: &str) {
        assert_eq!(parse_inline(input), vec![text(input)]);
    }

    #[test]
    fn spaced_asterisks_pair_up() {
        assert_eq!(
            parse_inline("a * b * c"),
            vec![text("a "), italic(" b "), text(" c")]
        );
    }

    #[test]
    fn italic_may_span_lines() {
        assert_eq!(
            parse_inline("*two\nlines*"),
            vec![italic("two\nlines")]
        );
    }

    #[test]
    fn parse_autolink() {
        assert_eq!(
            parse_inline("Visit https://example.com now"),
            vec![
                text("Visit "),
                link("https://example.com", "https://example.com"),
                text(" now"),
            ]
        );
    }

    #[test]
    fn www_link_gets_scheme() {
        assert_eq!(
            parse_inline("see www.rust-lang.org"),
            vec![
                text("see "),
                link("https://www.rust-lang.org", "www.rust-lang.org"),
            ]
        );
    }

    #[test]
    fn link_prefix_is_case_insensitive() {
        assert_eq!(
            parse_inline("HTTP://X.ORG"),
            vec![link("HTTP://X.ORG", "HTTP://X.ORG")]
        );
    }

    #[test]
    fn link_stops_at_unmatched_paren() {
        assert_eq!(
            parse_inline("(see https://a.org/x)"),
            vec![
                text("(see "),
                link("https://a.org/x", "https://a.org/x"),
                text(")"),
            ]
        );
    }

    #[test]
    fn link_keeps_balanced_parens() {
        let url = "https://en.wikipedia.org/wiki/Rust_(programming_language)";
        assert_eq!(
            parse_inline(&format!("({url})")),
            vec![text("("), link(url, url), text(")")]
        );
    }

    #[test]
    fn bare_prefix_is_not_a_link() {
        assert_eq!(parse_inline("https:// x"), vec![text("https:// x")]);
        assert_eq!(parse_inline("www."), vec![text("www.")]);
    }

    #[test]
    fn link_is_opaque_to_emphasis() {
        assert_eq!(
            parse_inline("https://x.org/*a* *b*"),
            vec![
                link("https://x.org/*a*", "https://x.org/*a*"),
                text(" "),
                italic("b"),
            ]
        );
    }

    #[test]
    fn link_ends_at_unicode_whitespace() {
        assert_eq!(
            parse_inline("www.a.b\u{3000}next"),
            vec![link("https://www.a.b", "www.a.b"), text("\u{3000}next")]
        );
    }

    #[test]
    fn multibyte_text_around_constructs() {
        assert_eq!(
            parse_inline("héllo **wörld** ✓"),
            vec![text("héllo "), bold("wörld"), text(" ✓")]
        );
    }
}
