//! Classification of code spans into inline tokens or cards.
//!
//! A span is rendered as a card unless the parser flagged it inline or it is
//! "trivial": a single short line in a plain language.

use crate::config::DEFAULT_TRIVIAL_MAX_CHARS;

/// Prefix markdown parsers put in front of the fence language in class names.
pub const LANGUAGE_CLASS_PREFIX: &str = "language-";

/// Language used when a span carries no tag.
pub const FALLBACK_LANGUAGE: &str = "text";

/// Tags treated as "no specific language" (compared lowercase).
pub const PLAIN_LANGUAGES: &[&str] = &["", "text", "plain", "plaintext"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderDecision {
    InlineToken,
    Card,
}

/// A code node as handed over by the markdown parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSpan {
    pub raw: String,
    pub language: Option<String>,
    pub inline: bool,
}

impl CodeSpan {
    pub fn new(raw: impl Into<String>, language: Option<&str>, inline: bool) -> Self {
        Self {
            raw: raw.into(),
            language: language
                .map(str::trim)
                .filter(|lang| !lang.is_empty())
                .map(str::to_string),
            inline,
        }
    }

    pub fn inline(raw: impl Into<String>) -> Self {
        Self::new(raw, None, true)
    }

    /// Builds a span from a `language-xxx` class name.
    pub fn from_class_name(raw: impl Into<String>, class_name: Option<&str>, inline: bool) -> Self {
        let language = class_name
            .unwrap_or_default()
            .replacen(LANGUAGE_CLASS_PREFIX, "", 1);
        Self::new(raw, Some(&language), inline)
    }

    /// The raw text with leading and trailing newlines removed.
    pub fn normalized(&self) -> &str {
        self.raw.trim_matches('\n')
    }

    pub fn resolved_language(&self) -> &str {
        self.language.as_deref().unwrap_or(FALLBACK_LANGUAGE)
    }

    pub fn is_single_line(&self) -> bool {
        !self.normalized().contains('\n')
    }

    pub fn is_plain_language(&self) -> bool {
        is_plain_language(self.resolved_language())
    }

    pub fn is_trivial(&self) -> bool {
        self.is_trivial_within(DEFAULT_TRIVIAL_MAX_CHARS)
    }

    pub fn is_trivial_within(&self, max_chars: usize) -> bool {
        self.is_single_line()
            && text_length(self.normalized().trim()) <= max_chars
            && self.is_plain_language()
    }

    pub fn classify(&self) -> RenderDecision {
        self.classify_within(DEFAULT_TRIVIAL_MAX_CHARS)
    }

    pub fn classify_within(&self, max_chars: usize) -> RenderDecision {
        if self.inline || self.is_trivial_within(max_chars) {
            RenderDecision::InlineToken
        } else {
            RenderDecision::Card
        }
    }
}

/// Length in UTF-16 code units, the unit browsers measure strings in.
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

pub fn is_plain_language(language: &str) -> bool {
    let lower = language.to_lowercase();
    PLAIN_LANGUAGES.contains(&lower.as_str())
}
