//! Renders markdown chat messages into a presentational element tree.
//!
//! Code spans are classified into inline tokens or highlighted cards with a
//! copy control; links open in a new browsing context. Parsing and
//! highlighting sit behind the [`MarkdownParser`] and [`Highlighter`] traits.

pub mod classes;
pub mod code;
pub mod code_block;
pub mod config;
pub mod copy;
pub mod element;
pub mod error;
pub mod highlight;
pub mod markdown;
pub mod render;
pub mod types;

pub use code::{CodeSpan, RenderDecision};
pub use code_block::{render_code, CodeCard, RenderedCode};
pub use config::RenderConfig;
pub use copy::{CopyFeedback, CopyLabel, RevertToken, ScheduledRevert};
pub use element::{to_html, Element, Node};
pub use error::{ClipboardError, ConfigError};
pub use highlight::{HighlightedCode, Highlighter, PlainHighlighter, StyledToken, SyntectHighlighter};
pub use markdown::{CmarkParser, MarkdownParser, MdNode};
pub use render::MessageRenderer;
pub use types::*;

/// Renders markdown to HTML with the GFM parser and syntect highlighting.
pub fn render_markdown_html(markdown: &str, config: &RenderConfig) -> String {
    let parser = CmarkParser::gfm().with_autolinks(config.autolinks);
    let highlighter = SyntectHighlighter::new(&config.theme);
    MessageRenderer::new(&parser, &highlighter, config).render_html(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_html_end_to_end() {
        let html = render_markdown_html(
            "Try `ls`:\n\n```bash\nls -la\necho done\n```\n",
            &RenderConfig::default(),
        );

        assert!(html.starts_with("<p>Try <code class=\"inline-code"));
        assert!(html.contains("data-language=\"bash\""));
        assert!(html.contains(">BASH</span>"));
        assert!(html.contains("data-copy=\"ls -la\necho done\""));
        assert!(!html.contains("<pre><code"));
    }

    #[test]
    fn test_render_markdown_html_respects_autolink_setting() {
        let config = RenderConfig {
            autolinks: false,
            ..RenderConfig::default()
        };
        assert_eq!(
            render_markdown_html("see https://example.com", &config),
            "<p>see https://example.com</p>"
        );
    }
}
