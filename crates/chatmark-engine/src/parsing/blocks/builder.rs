use crate::parsing::inline::parse_inline;

use super::{
    classify::LineClass,
    open::BlockOpen,
    types::{Block, HeadingLevel},
};

#[derive(Debug, Clone)]
enum LeafState<'a> {
    None,
    Paragraph {
        lines: Vec<&'a str>,
    },
    List {
        ordered: bool,
        items: Vec<&'a str>,
    },
    Fence {
        language: Option<&'a str>,
        lines: Vec<&'a str>,
    },
}

/// Groups classified lines into blocks.
///
/// States are `None` (idle), `Paragraph`, `List` and `Fence`. A fence only
/// leaves on a closing fence or at [`finish`](Self::finish); the others close
/// on a blank line or when a line opens a different block.
pub struct BlockBuilder<'a> {
    leaf: LeafState<'a>,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'a>) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush();
            return;
        }

        match c.open {
            Some(open) => self.open_leaf(open),
            None => self.extend_paragraph(c.text),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        if self.in_fence() {
            log::debug!("unterminated code fence consumed to end of message");
        }
        self.flush();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn open_leaf(&mut self, open: BlockOpen<'a>) {
        match open {
            BlockOpen::FencedCode { language } => {
                self.flush();
                self.leaf = LeafState::Fence {
                    language,
                    lines: vec![],
                };
            }
            BlockOpen::Heading { level, text } => {
                self.flush();
                self.emit_heading(level, text);
            }
            BlockOpen::BoldSection { text } => {
                self.flush();
                self.emit_heading(HeadingLevel::H2, text);
            }
            BlockOpen::ListItem { ordered, text } => self.extend_list(ordered, text),
        }
    }

    fn consume_fence_line(&mut self, c: &LineClass<'a>) {
        if c.closes_fence {
            self.flush();
            return;
        }
        if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(c.text);
        }
    }

    fn extend_list(&mut self, ordered: bool, text: &'a str) {
        if let LeafState::List {
            ordered: run_ordered,
            items,
        } = &mut self.leaf
        {
            // The run takes the flag of its last line.
            *run_ordered = ordered;
            items.push(text);
            return;
        }
        self.flush();
        self.leaf = LeafState::List {
            ordered,
            items: vec![text],
        };
    }

    fn extend_paragraph(&mut self, line: &'a str) {
        if let LeafState::Paragraph { lines } = &mut self.leaf {
            lines.push(line);
            return;
        }
        self.flush();
        self.leaf = LeafState::Paragraph { lines: vec![line] };
    }

    fn emit_heading(&mut self, level: HeadingLevel, text: &str) {
        log::trace!("heading h{} ({} bytes)", level.as_u8(), text.len());
        self.out.push(Block::Heading {
            level,
            content: parse_inline(text),
        });
    }

    fn flush(&mut self) {
        let block = match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => return,
            LeafState::Paragraph { lines } => {
                log::trace!("paragraph of {} lines", lines.len());
                Block::Paragraph {
                    content: parse_inline(&lines.join("\n")),
                }
            }
            LeafState::List { ordered, items } => {
                log::trace!("list of {} items (ordered: {ordered})", items.len());
                Block::List {
                    ordered,
                    items: items.into_iter().map(parse_inline).collect(),
                }
            }
            LeafState::Fence { language, lines } => {
                log::trace!("code block of {} lines", lines.len());
                Block::CodeBlock {
                    language: language.map(str::to_string),
                    content: lines.join("\n"),
                }
            }
        };
        self.out.push(block);
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
