use super::{
    kinds::CodeFence,
    open::{BlockOpen, try_open_leaf},
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Inside a fence only `text` and
/// `closes_fence` matter.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// The line without its terminator.
    pub text: &'a str,
    /// Whether the line is whitespace only.
    pub is_blank: bool,
    /// Whether the line is a bare closing fence.
    pub closes_fence: bool,
    /// The block this line would open outside a fence.
    pub open: Option<BlockOpen<'a>>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MessageLineClassifier;

impl MessageLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let is_blank = line.trim().is_empty();
        LineClass {
            text: line,
            is_blank,
            closes_fence: CodeFence::closes(line),
            open: if is_blank { None } else { try_open_leaf(line) },
        }
    }
}
