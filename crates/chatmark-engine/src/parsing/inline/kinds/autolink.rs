/// Bare URL detection.
pub struct Autolink;

/// How a matched prefix maps to a link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlPrefix {
    /// `http://` or `https://`: the match is the URL.
    Scheme(usize),
    /// `www.`: the URL needs [`Autolink::IMPLICIT_SCHEME`].
    Www(usize),
}

impl UrlPrefix {
    pub fn prefix_len(self) -> usize {
        match self {
            UrlPrefix::Scheme(n) | UrlPrefix::Www(n) => n,
        }
    }
}

impl Autolink {
    pub const SCHEMES: [&'static [u8]; 2] = [b"https://", b"http://"];
    pub const WWW: &'static [u8] = b"www.";
    pub const IMPLICIT_SCHEME: &'static str = "https://";
    pub const OPEN_PAREN: char = '(';
    pub const CLOSE_PAREN: char = ')';

    /// Builds the link target for matched text.
    pub fn url_for(prefix: UrlPrefix, display: &str) -> String {
        match prefix {
            UrlPrefix::Scheme(_) => display.to_string(),
            UrlPrefix::Www(_) => format!("{}{display}", Self::IMPLICIT_SCHEME),
        }
    }
}
