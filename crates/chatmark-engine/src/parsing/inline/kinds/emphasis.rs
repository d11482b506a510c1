/// `**strong**` emphasis.
pub struct Bold;

impl Bold {
    pub const DELIM: &'static [u8; 2] = b"**";
}

/// `*em*` emphasis, only between whitespace boundaries.
pub struct Italic;

impl Italic {
    pub const DELIM: u8 = b'*';
}
