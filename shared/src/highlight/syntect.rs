use std::sync::OnceLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, FontStyle, Style as SynStyle, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};

use super::{split_lines, HighlightedCode, Highlighter, Rgb, StyledToken, TokenStyle};
use crate::code::is_plain_language;
use crate::config::DEFAULT_THEME;

static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    THEME_SET.get_or_init(ThemeSet::load_defaults)
}

/// Highlighter backed by syntect's bundled syntaxes and themes.
#[derive(Debug, Clone)]
pub struct SyntectHighlighter {
    theme_name: String,
    theme: Theme,
}

impl SyntectHighlighter {
    /// Uses the named theme, falling back to the default theme when unknown.
    pub fn new(theme_name: &str) -> Self {
        let themes = &theme_set().themes;
        if let Some(theme) = themes.get(theme_name) {
            return Self {
                theme_name: theme_name.to_string(),
                theme: theme.clone(),
            };
        }

        log::warn!("unknown highlight theme {theme_name:?}, using {DEFAULT_THEME}");
        let (theme_name, theme) = themes
            .get_key_value(DEFAULT_THEME)
            .or_else(|| themes.iter().next())
            .map(|(name, theme)| (name.clone(), theme.clone()))
            .unwrap_or_else(|| (DEFAULT_THEME.to_string(), Theme::default()));
        Self { theme_name, theme }
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    fn syntax_for(&self, language: &str) -> &'static SyntaxReference {
        let ss = syntax_set();
        if is_plain_language(language) {
            return ss.find_syntax_plain_text();
        }
        let lower = language.to_lowercase();
        let token = syntax_alias(&lower);
        ss.find_syntax_by_token(token)
            .or_else(|| ss.find_syntax_by_extension(token))
            .unwrap_or_else(|| ss.find_syntax_plain_text())
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new(DEFAULT_THEME)
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, code: &str, language: &str) -> HighlightedCode {
        let ss = syntax_set();
        let mut highlighter = HighlightLines::new(self.syntax_for(language), &self.theme);

        let mut lines = Vec::new();
        for line in split_lines(code) {
            // The newline-aware syntax set expects every line to end in `\n`.
            let source = format!("{line}\n");
            let tokens = match highlighter.highlight_line(&source, ss) {
                Ok(regions) => regions
                    .into_iter()
                    .filter_map(|(style, text)| {
                        let text = text.trim_end_matches('\n');
                        (!text.is_empty()).then(|| StyledToken {
                            text: text.to_string(),
                            style: token_style(style),
                        })
                    })
                    .collect(),
                Err(err) => {
                    log::warn!("highlighting {language:?} failed, falling back to plain text: {err}");
                    if line.is_empty() {
                        Vec::new()
                    } else {
                        vec![StyledToken::plain(line)]
                    }
                }
            };
            lines.push(tokens);
        }

        HighlightedCode {
            background: self.theme.settings.background.map(rgb),
            foreground: self.theme.settings.foreground.map(rgb),
            lines,
        }
    }
}

/// Maps common fence tags onto names the bundled syntax set knows.
fn syntax_alias(language: &str) -> &str {
    match language {
        "shell" | "zsh" | "console" | "shellscript" => "bash",
        "ts" | "typescript" | "tsx" | "jsx" | "mjs" | "cjs" => "js",
        "yml" => "yaml",
        "golang" => "go",
        "c++" => "cpp",
        "c#" | "csharp" => "cs",
        "py3" | "python3" => "py",
        other => other,
    }
}

fn rgb(color: Color) -> Rgb {
    Rgb::new(color.r, color.g, color.b)
}

fn token_style(style: SynStyle) -> TokenStyle {
    TokenStyle {
        color: Some(rgb(style.foreground)),
        bold: style.font_style.contains(FontStyle::BOLD),
        italic: style.font_style.contains(FontStyle::ITALIC),
        underline: style.font_style.contains(FontStyle::UNDERLINE),
    }
}
