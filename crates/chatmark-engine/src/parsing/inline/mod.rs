//! # Inline Parsing
//!
//! Cursor-based inline parsing in ordered passes with raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! headings, list items and paragraphs. It never sees code block content.
//!
//! Each pass scans only the *residual* text left unclaimed by earlier
//! passes; spans claimed earlier are opaque:
//!
//! 1. Code spans (raw zones: nothing inside is parsed)
//! 2. Autolinks (`http://`, `https://`, `www.`)
//! 3. Bold (`**text**`)
//! 4. Italic (`*text*` at whitespace boundaries)
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum
//! - **`kinds`**: inline types with owned delimiters (CodeSpan, Autolink, Bold, Italic)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `**not bold**` `` parses as a single Code
//! span, and a URL containing `*` is linked before emphasis is considered.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineSpan;
