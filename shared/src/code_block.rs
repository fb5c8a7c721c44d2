//! Rendering of classified code spans.

use crate::classes;
use crate::code::{CodeSpan, RenderDecision};
use crate::config::RenderConfig;
use crate::copy::{COPY_LABEL, COPY_TITLE};
use crate::element::{Element, Node};
use crate::highlight::{HighlightedCode, HighlightedLine, Highlighter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedCode {
    Inline { code: String },
    Card(CodeCard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeCard {
    /// Uppercased language; `None` hides the header.
    pub label: Option<String>,
    pub language: String,
    /// Normalized code, also what the copy button writes.
    pub code: String,
    pub highlighted: HighlightedCode,
    pub line_numbers: bool,
}

impl CodeCard {
    pub fn has_header(&self) -> bool {
        self.label.is_some()
    }
}

pub fn render_code(span: &CodeSpan, highlighter: &dyn Highlighter, config: &RenderConfig) -> RenderedCode {
    let code = span.normalized().to_string();
    match span.classify_within(config.trivial_max_chars) {
        RenderDecision::InlineToken => RenderedCode::Inline { code },
        RenderDecision::Card => {
            let language = span.resolved_language().to_string();
            let label = (!span.is_plain_language()).then(|| language.to_uppercase());
            let highlighted = highlighter.highlight(&code, &language);
            RenderedCode::Card(CodeCard {
                label,
                language,
                code,
                highlighted,
                line_numbers: config.line_numbers,
            })
        }
    }
}

impl RenderedCode {
    pub fn decision(&self) -> RenderDecision {
        match self {
            RenderedCode::Inline { .. } => RenderDecision::InlineToken,
            RenderedCode::Card(_) => RenderDecision::Card,
        }
    }

    /// Static markup; the copy button carries the code in `data-copy`.
    pub fn to_element(&self) -> Element {
        match self {
            RenderedCode::Inline { code } => Element::new("code")
                .class(classes::INLINE_CODE)
                .child(Node::text(code.clone())),
            RenderedCode::Card(card) => card_element(card),
        }
    }
}

fn card_element(card: &CodeCard) -> Element {
    let mut root = Element::new("div").class(format!("{} {}", classes::CARD, classes::CODE_CARD));

    if let Some(label) = &card.label {
        let button = Element::new("button")
            .attr("type", "button")
            .class(format!(
                "{} {} {}",
                classes::BUTTON_GHOST,
                classes::BUTTON_SMALL,
                classes::COPY_BUTTON
            ))
            .attr("title", COPY_TITLE)
            .attr("data-copy", card.code.clone())
            .child(Node::text(COPY_LABEL));
        root = root.child(
            Element::new("div")
                .class(format!("{} {}", classes::CARD_HEADER, classes::CODE_CARD_HEADER))
                .child(
                    Element::new("span")
                        .class(classes::LANGUAGE_LABEL)
                        .child(Node::text(label.clone())),
                )
                .child(button),
        );
    }

    let mut pre = Element::new("pre").class(classes::CODE_PRE);
    let style = card.highlighted.container_css();
    if !style.is_empty() {
        pre = pre.attr("style", style);
    }
    pre = pre.attr("data-language", card.language.clone());
    let lines = card
        .highlighted
        .lines
        .iter()
        .enumerate()
        .map(|(index, line)| Node::from(line_element(index + 1, line, card.line_numbers)));

    root.child(
        Element::new("div")
            .class(format!("{} {}", classes::CARD_BODY, classes::CODE_CARD_BODY))
            .child(pre.children(lines)),
    )
}

fn line_element(number: usize, line: &HighlightedLine, line_numbers: bool) -> Element {
    let mut div = Element::new("div").class(classes::CODE_LINE);
    if line_numbers {
        div = div.child(
            Element::new("span")
                .class(classes::LINE_NUMBER)
                .child(Node::text(number.to_string())),
        );
    }
    if line.is_empty() {
        // Keeps blank lines one line tall inside `white-space: pre`.
        return div.child(Node::text("\n"));
    }
    div.children(line.iter().map(|token| {
        let span = Element::new("span");
        let css = token.style.to_css();
        let span = if css.is_empty() { span } else { span.attr("style", css) };
        Node::from(span.child(Node::text(token.text.clone())))
    }))
}
