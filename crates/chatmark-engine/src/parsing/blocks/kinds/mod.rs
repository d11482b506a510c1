//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The classifier and
//! builder call into these; they never hardcode `` ``` ``, `#` or `**`.

pub mod bold_section;
pub mod code_fence;
pub mod heading;
pub mod list_marker;
pub mod marker_text;

pub use bold_section::BoldSection;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_marker::ListMarker;
pub use marker_text::text_after_marker;
