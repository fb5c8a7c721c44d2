use pulldown_cmark::{Alignment as CmarkAlignment, CodeBlockKind, Event, Options, Parser, Tag};

use super::autolink::linkify;
use super::{Alignment, MarkdownParser, MdElement, MdKind, MdNode};
use crate::code::CodeSpan;

/// [`MarkdownParser`] backed by pulldown-cmark.
#[derive(Debug, Clone, Copy)]
pub struct CmarkParser {
    options: Options,
    autolinks: bool,
}

impl CmarkParser {
    /// GitHub-flavored profile: tables, strikethrough, task lists, autolinks.
    pub fn gfm() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        Self {
            options,
            autolinks: true,
        }
    }

    /// Baseline CommonMark without extensions.
    pub fn commonmark() -> Self {
        Self {
            options: Options::empty(),
            autolinks: false,
        }
    }

    pub fn with_autolinks(mut self, enabled: bool) -> Self {
        self.autolinks = enabled;
        self
    }
}

impl Default for CmarkParser {
    fn default() -> Self {
        Self::gfm()
    }
}

impl MarkdownParser for CmarkParser {
    fn parse(&self, markdown: &str) -> Vec<MdNode> {
        let mut builder = TreeBuilder::new(self.autolinks);
        for event in Parser::new_ext(markdown, self.options) {
            builder.push(event);
        }
        builder.finish()
    }
}

/// Folds the flat event stream into a tree.
struct TreeBuilder {
    autolinks: bool,
    root: Vec<MdNode>,
    open: Vec<MdElement>,
    text: String,
    code_block: Option<(Option<String>, String)>,
    // Links and images; bare URLs inside them stay text.
    link_depth: usize,
}

impl TreeBuilder {
    fn new(autolinks: bool) -> Self {
        Self {
            autolinks,
            root: Vec::new(),
            open: Vec::new(),
            text: String::new(),
            code_block: None,
            link_depth: 0,
        }
    }

    fn push(&mut self, event: Event<'_>) {
        if let Some((language, body)) = self.code_block.as_mut() {
            match event {
                Event::Text(text) => body.push_str(&text),
                Event::End(Tag::CodeBlock(_)) => {
                    let span = CodeSpan::new(std::mem::take(body), language.as_deref(), false);
                    self.code_block = None;
                    self.append(MdNode::Code(span));
                }
                _ => {}
            }
            return;
        }

        match event {
            Event::Text(text) => self.text.push_str(&text),
            Event::Start(Tag::CodeBlock(kind)) => {
                self.flush_text();
                let language = match kind {
                    CodeBlockKind::Fenced(info) => info.split_whitespace().next().map(str::to_string),
                    CodeBlockKind::Indented => None,
                };
                self.code_block = Some((language, String::new()));
            }
            Event::Start(tag) => {
                self.flush_text();
                let kind = convert_tag(tag);
                if matches!(kind, MdKind::Link { .. } | MdKind::Image { .. }) {
                    self.link_depth += 1;
                }
                self.open.push(MdElement {
                    kind,
                    children: Vec::new(),
                });
            }
            Event::End(_) => {
                self.flush_text();
                if let Some(element) = self.open.pop() {
                    if matches!(element.kind, MdKind::Link { .. } | MdKind::Image { .. }) {
                        self.link_depth = self.link_depth.saturating_sub(1);
                    }
                    self.append(MdNode::Element(element));
                }
            }
            Event::Code(code) => {
                self.flush_text();
                self.append(MdNode::Code(CodeSpan::inline(code.to_string())));
            }
            Event::Html(html) => {
                self.flush_text();
                self.append(MdNode::Html(html.to_string()));
            }
            Event::FootnoteReference(name) => {
                self.text.push_str(&format!("[^{name}]"));
            }
            Event::SoftBreak => {
                self.flush_text();
                self.append(MdNode::SoftBreak);
            }
            Event::HardBreak => {
                self.flush_text();
                self.append(MdNode::HardBreak);
            }
            Event::Rule => {
                self.flush_text();
                self.append(MdNode::Rule);
            }
            Event::TaskListMarker(checked) => {
                self.flush_text();
                self.append(MdNode::TaskMarker(checked));
            }
        }
    }

    fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        if self.autolinks && self.link_depth == 0 {
            for node in linkify(&text) {
                self.append(node);
            }
        } else {
            self.append(MdNode::Text(text));
        }
    }

    fn append(&mut self, node: MdNode) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.root.push(node),
        }
    }

    fn finish(mut self) -> Vec<MdNode> {
        self.flush_text();
        if let Some((language, body)) = self.code_block.take() {
            self.append(MdNode::Code(CodeSpan::new(body, language.as_deref(), false)));
        }
        while let Some(element) = self.open.pop() {
            self.append(MdNode::Element(element));
        }
        self.root
    }
}

fn convert_tag(tag: Tag<'_>) -> MdKind {
    match tag {
        Tag::Paragraph | Tag::FootnoteDefinition(_) => MdKind::Paragraph,
        Tag::Heading(level, _, _) => MdKind::Heading(level as u8),
        Tag::BlockQuote => MdKind::BlockQuote,
        // Handled by the builder before conversion.
        Tag::CodeBlock(_) => MdKind::Paragraph,
        Tag::List(start) => MdKind::List(start),
        Tag::Item => MdKind::Item,
        Tag::Table(alignments) => {
            MdKind::Table(alignments.into_iter().map(convert_alignment).collect())
        }
        Tag::TableHead => MdKind::TableHead,
        Tag::TableRow => MdKind::TableRow,
        Tag::TableCell => MdKind::TableCell,
        Tag::Emphasis => MdKind::Emphasis,
        Tag::Strong => MdKind::Strong,
        Tag::Strikethrough => MdKind::Strikethrough,
        Tag::Link(_, href, title) => MdKind::Link {
            href: href.to_string(),
            title: title.to_string(),
        },
        Tag::Image(_, src, title) => MdKind::Image {
            src: src.to_string(),
            title: title.to_string(),
        },
    }
}

fn convert_alignment(alignment: CmarkAlignment) -> Alignment {
    match alignment {
        CmarkAlignment::None => Alignment::None,
        CmarkAlignment::Left => Alignment::Left,
        CmarkAlignment::Center => Alignment::Center,
        CmarkAlignment::Right => Alignment::Right,
    }
}
