/// A cursor for byte-by-byte inline scanning with position tracking.
///
/// Every delimiter the inline parser looks for is ASCII, so positions where
/// a construct starts or ends always fall on `char` boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The residual segment being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Returns true if at the start of the segment.
    pub fn at_start(&self) -> bool {
        self.i == 0
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks at the current char. Only valid on a char boundary.
    pub fn peek_char(&self) -> Option<char> {
        self.s.get(self.i..)?.chars().next()
    }

    /// Returns the char before the cursor. Only valid on a char boundary.
    pub fn prev_char(&self) -> Option<char> {
        self.s.get(..self.i)?.chars().next_back()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat)
    }

    /// Like [`starts_with`](Self::starts_with), ignoring ASCII case.
    pub fn starts_with_ignore_ascii_case(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i..]
            .get(..pat.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances past one char, returning it. Only valid on a char boundary.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances until `b` or end of input; returns true if `b` was found.
    pub fn skip_until(&mut self, b: u8) -> bool {
        match self.s.as_bytes()[self.i..].iter().position(|&x| x == b) {
            Some(offset) => {
                self.i += offset;
                true
            }
            None => {
                self.i = self.s.len();
                false
            }
        }
    }

    /// Returns the text between two positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}
