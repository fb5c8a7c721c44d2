//! Syntax highlighting abstraction.
//!
//! Renderers only see [`Highlighter`]; the bundled backend is
//! [`SyntectHighlighter`], with [`PlainHighlighter`] as a no-op fallback.

mod syntect;

pub use self::syntect::SyntectHighlighter;

use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenStyle {
    pub color: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TokenStyle {
    /// Inline CSS for the token, empty when unstyled.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(color) = self.color {
            let _ = write!(css, "color:{};", color.to_hex());
        }
        if self.bold {
            css.push_str("font-weight:bold;");
        }
        if self.italic {
            css.push_str("font-style:italic;");
        }
        if self.underline {
            css.push_str("text-decoration:underline;");
        }
        css
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledToken {
    pub text: String,
    pub style: TokenStyle,
}

impl StyledToken {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TokenStyle::default(),
        }
    }
}

pub type HighlightedLine = Vec<StyledToken>;

/// Highlighter output: one entry per source line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightedCode {
    pub background: Option<Rgb>,
    pub foreground: Option<Rgb>,
    pub lines: Vec<HighlightedLine>,
}

impl HighlightedCode {
    /// Unstyled tokens, one per line.
    pub fn plain(code: &str) -> Self {
        Self {
            background: None,
            foreground: None,
            lines: split_lines(code)
                .map(|line| {
                    if line.is_empty() {
                        Vec::new()
                    } else {
                        vec![StyledToken::plain(line)]
                    }
                })
                .collect(),
        }
    }

    /// Inline CSS for the surrounding `<pre>`.
    pub fn container_css(&self) -> String {
        let mut css = String::new();
        if let Some(bg) = self.background {
            let _ = write!(css, "background-color:{};", bg.to_hex());
        }
        if let Some(fg) = self.foreground {
            let _ = write!(css, "color:{};", fg.to_hex());
        }
        css
    }

    /// Concatenated token text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().map(|t| t.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Turns code into styled lines for a given language.
///
/// Implementations must not fail: unknown languages fall back to plain text.
pub trait Highlighter {
    fn highlight(&self, code: &str, language: &str) -> HighlightedCode;
}

/// Highlighter that leaves code unstyled.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, _language: &str) -> HighlightedCode {
        HighlightedCode::plain(code)
    }
}

/// Splits on `\n`, yielding one (possibly empty) entry per visual line.
pub(crate) fn split_lines(code: &str) -> impl Iterator<Item = &str> {
    code.split('\n')
}
