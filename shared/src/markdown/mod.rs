//! Markdown syntax tree and the parser seam.

mod autolink;
mod cmark;

pub use cmark::CmarkParser;

use crate::code::CodeSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_css(&self) -> Option<&'static str> {
        match self {
            Alignment::None => None,
            Alignment::Left => Some("text-align:left"),
            Alignment::Center => Some("text-align:center"),
            Alignment::Right => Some("text-align:right"),
        }
    }
}

/// Container node kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MdKind {
    Paragraph,
    Heading(u8),
    BlockQuote,
    /// Ordered lists carry their start number.
    List(Option<u64>),
    Item,
    Table(Vec<Alignment>),
    TableHead,
    TableRow,
    TableCell,
    Emphasis,
    Strong,
    Strikethrough,
    Link { href: String, title: String },
    Image { src: String, title: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdElement {
    pub kind: MdKind,
    pub children: Vec<MdNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MdNode {
    Element(MdElement),
    Text(String),
    /// Inline code spans and fenced or indented code blocks.
    Code(CodeSpan),
    /// Raw HTML found in the source.
    Html(String),
    TaskMarker(bool),
    SoftBreak,
    HardBreak,
    Rule,
}

impl MdNode {
    pub fn element(kind: MdKind, children: Vec<MdNode>) -> Self {
        MdNode::Element(MdElement { kind, children })
    }

    /// Concatenated text content, used for image alt text.
    pub fn plain_text(&self) -> String {
        match self {
            MdNode::Element(el) => el.children.iter().map(MdNode::plain_text).collect(),
            MdNode::Text(text) | MdNode::Html(text) => text.clone(),
            MdNode::Code(span) => span.normalized().to_string(),
            MdNode::SoftBreak | MdNode::HardBreak => " ".to_string(),
            MdNode::TaskMarker(_) | MdNode::Rule => String::new(),
        }
    }
}

/// Parses markdown text into a syntax tree.
pub trait MarkdownParser {
    fn parse(&self, markdown: &str) -> Vec<MdNode>;
}
