//! # Rendering
//!
//! Maps a parsed block tree to presentation markup. Parsing never depends on
//! this module; any other renderer can consume `Block`s the same way.

pub mod html;

pub use html::render_html;

/// Presentation choices for the HTML renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Label shown on code blocks that have no language.
    pub code_label: String,
    /// Emit a copy button in each code block header.
    pub copy_button: bool,
    /// Open links in a new tab (`target="_blank"`).
    pub open_links_in_new_tab: bool,
}

impl RenderOptions {
    pub const DEFAULT_CODE_LABEL: &'static str = "code";
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            code_label: Self::DEFAULT_CODE_LABEL.to_string(),
            copy_button: true,
            open_links_in_new_tab: true,
        }
    }
}
