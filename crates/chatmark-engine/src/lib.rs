pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::{
    blocks::{Block, HeadingLevel},
    format_inline,
    inline::InlineSpan,
    segment,
};
pub use render::{RenderOptions, render_html};
