use html_escape::{encode_double_quoted_attribute, encode_text};

use super::RenderOptions;
use crate::parsing::{blocks::Block, inline::InlineSpan};

/// Renders blocks to an HTML fragment, one top-level element per line.
///
/// Links never leak the referrer. Text and attribute values are escaped;
/// the input is not otherwise sanitized.
pub fn render_html(blocks: &[Block], options: &RenderOptions) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_block(block, options, &mut out);
    }
    out
}

fn render_block(block: &Block, options: &RenderOptions, out: &mut String) {
    match block {
        Block::CodeBlock { language, content } => {
            let label = language.as_deref().unwrap_or(&options.code_label);
            let code_class = language
                .as_ref()
                .map(|l| format!("language-{l}"))
                .unwrap_or_else(|| "language-text".to_string());

            out.push_str("<div class=\"code-block\"><div class=\"code-header\">");
            out.push_str(&format!("<span>{}</span>", encode_text(label)));
            if options.copy_button {
                out.push_str(&format!(
                    "<button type=\"button\" class=\"copy\" data-copy=\"{}\">Copy</button>",
                    encode_double_quoted_attribute(content)
                ));
            }
            out.push_str(&format!(
                "</div><pre><code class=\"{}\">{}</code></pre></div>",
                encode_double_quoted_attribute(&code_class),
                encode_text(content)
            ));
        }
        Block::Heading { level, content } => {
            let tag = format!("h{}", level.as_u8());
            out.push_str(&format!("<{tag}>"));
            render_spans(content, options, out);
            out.push_str(&format!("</{tag}>"));
        }
        Block::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            out.push_str(&format!("<{tag}>"));
            for item in items {
                out.push_str("<li>");
                render_spans(item, options, out);
                out.push_str("</li>");
            }
            out.push_str(&format!("</{tag}>"));
        }
        Block::Paragraph { content } => {
            out.push_str("<p>");
            render_spans(content, options, out);
            out.push_str("</p>");
        }
    }
}

fn render_spans(spans: &[InlineSpan], options: &RenderOptions, out: &mut String) {
    for span in spans {
        match span {
            InlineSpan::Text(text) => out.push_str(&encode_text(text)),
            InlineSpan::Code(code) => {
                out.push_str(&format!("<code>{}</code>", encode_text(code)));
            }
            InlineSpan::Bold(inner) => {
                out.push_str("<strong>");
                render_spans(inner, options, out);
                out.push_str("</strong>");
            }
            InlineSpan::Italic(inner) => {
                out.push_str("<em>");
                render_spans(inner, options, out);
                out.push_str("</em>");
            }
            InlineSpan::Link { url, display } => {
                out.push_str(&format!(
                    "<a class=\"external-link\" href=\"{}\"",
                    encode_double_quoted_attribute(url)
                ));
                if options.open_links_in_new_tab {
                    out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
                } else {
                    out.push_str(" rel=\"noreferrer\"");
                }
                out.push_str(&format!(">{}</a>", encode_text(display)));
            }
        }
    }
}
