//! Markdown message renderer.
//!
//! Walks the parsed markdown tree and maps it onto [`Node`]s. Three node
//! kinds get special treatment:
//!
//! - code spans and blocks go through [`render_code`];
//! - the `<pre>` wrapper around code blocks is dropped, the code card already
//!   provides block framing;
//! - links open in a new browsing context with `rel="noopener noreferrer"`.

use crate::classes;
use crate::code_block::render_code;
use crate::config::RenderConfig;
use crate::element::{to_html, Element, Node};
use crate::highlight::Highlighter;
use crate::markdown::{Alignment, MarkdownParser, MdElement, MdKind, MdNode};

pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noopener noreferrer";

/// URL schemes links and images may use; anything else is dropped.
const SAFE_PROTOCOLS: &[&str] = &["http", "https", "mailto", "irc", "ircs", "xmpp"];

pub struct MessageRenderer<'a> {
    parser: &'a dyn MarkdownParser,
    highlighter: &'a dyn Highlighter,
    config: &'a RenderConfig,
}

impl<'a> MessageRenderer<'a> {
    pub fn new(
        parser: &'a dyn MarkdownParser,
        highlighter: &'a dyn Highlighter,
        config: &'a RenderConfig,
    ) -> Self {
        Self {
            parser,
            highlighter,
            config,
        }
    }

    pub fn render(&self, markdown: &str) -> Vec<Node> {
        let tree = self.parser.parse(markdown);
        self.render_nodes(&tree)
    }

    pub fn render_html(&self, markdown: &str) -> String {
        to_html(&self.render(markdown))
    }

    fn render_nodes(&self, nodes: &[MdNode]) -> Vec<Node> {
        nodes.iter().map(|node| self.render_node(node)).collect()
    }

    fn render_node(&self, node: &MdNode) -> Node {
        match node {
            MdNode::Text(text) => Node::text(text.clone()),
            MdNode::Code(span) => Node::Code(render_code(span, self.highlighter, self.config)),
            // Raw HTML is shown as text, never injected.
            MdNode::Html(html) => Node::text(html.clone()),
            MdNode::TaskMarker(checked) => {
                let input = Element::new("input")
                    .attr("type", "checkbox")
                    .attr("disabled", "")
                    .class(classes::TASK_LIST_CHECKBOX);
                if *checked {
                    input.attr("checked", "").into()
                } else {
                    input.into()
                }
            }
            MdNode::SoftBreak => Node::text("\n"),
            MdNode::HardBreak => Element::new("br").into(),
            MdNode::Rule => Element::new("hr").into(),
            MdNode::Element(element) => self.render_element(element).into(),
        }
    }

    fn render_element(&self, element: &MdElement) -> Element {
        let children = &element.children;
        match &element.kind {
            MdKind::Paragraph => self.wrap("p", children),
            MdKind::Heading(level) => self.wrap(heading_tag(*level), children),
            MdKind::BlockQuote => self.wrap("blockquote", children),
            MdKind::List(None) => self.wrap("ul", children),
            MdKind::List(Some(start)) => {
                let list = Element::new("ol");
                let list = if *start == 1 {
                    list
                } else {
                    list.attr("start", start.to_string())
                };
                list.children(self.render_nodes(children))
            }
            MdKind::Item => {
                let item = Element::new("li");
                let item = if matches!(children.first(), Some(MdNode::TaskMarker(_))) {
                    item.class(classes::TASK_LIST_ITEM)
                } else {
                    item
                };
                item.children(self.render_nodes(children))
            }
            MdKind::Table(alignments) => self.render_table(alignments, children),
            MdKind::TableHead => Element::new("thead").child(self.render_row(children, &[], "th")),
            MdKind::TableRow => self.render_row(children, &[], "td"),
            MdKind::TableCell => self.wrap("td", children),
            MdKind::Emphasis => self.wrap("em", children),
            MdKind::Strong => self.wrap("strong", children),
            MdKind::Strikethrough => self.wrap("del", children),
            MdKind::Link { href, title } => {
                let link = Element::new("a")
                    .attr("href", safe_url(href))
                    .attr("target", LINK_TARGET)
                    .attr("rel", LINK_REL)
                    .class(classes::LINK);
                let link = if title.is_empty() {
                    link
                } else {
                    link.attr("title", title.clone())
                };
                link.children(self.render_nodes(children))
            }
            MdKind::Image { src, title } => {
                let alt: String = children.iter().map(MdNode::plain_text).collect();
                let image = Element::new("img").attr("src", safe_url(src)).attr("alt", alt);
                if title.is_empty() {
                    image
                } else {
                    image.attr("title", title.clone())
                }
            }
        }
    }

    fn wrap(&self, tag: &'static str, children: &[MdNode]) -> Element {
        Element::new(tag).children(self.render_nodes(children))
    }

    fn render_table(&self, alignments: &[Alignment], children: &[MdNode]) -> Element {
        let mut table = Element::new("table");
        let mut rows = Vec::new();
        for child in children {
            match child {
                MdNode::Element(MdElement {
                    kind: MdKind::TableHead,
                    children,
                }) => {
                    table = table.child(
                        Element::new("thead").child(self.render_row(children, alignments, "th")),
                    );
                }
                MdNode::Element(MdElement {
                    kind: MdKind::TableRow,
                    children,
                }) => rows.push(Node::from(self.render_row(children, alignments, "td"))),
                other => rows.push(self.render_node(other)),
            }
        }
        if rows.is_empty() {
            table
        } else {
            table.child(Element::new("tbody").children(rows))
        }
    }

    fn render_row(&self, cells: &[MdNode], alignments: &[Alignment], cell_tag: &'static str) -> Element {
        let cells = cells.iter().enumerate().map(|(column, cell)| match cell {
            MdNode::Element(MdElement {
                kind: MdKind::TableCell,
                children,
            }) => {
                let cell = self.wrap(cell_tag, children);
                match alignments.get(column).and_then(Alignment::as_css) {
                    Some(style) => Node::from(cell.attr("style", style)),
                    None => Node::from(cell),
                }
            }
            other => self.render_node(other),
        });
        Element::new("tr").children(cells)
    }
}

fn heading_tag(level: u8) -> &'static str {
    match level {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        _ => "h6",
    }
}

/// Returns the URL unchanged when relative or using a safe protocol,
/// otherwise an empty string.
pub fn safe_url(url: &str) -> String {
    let url = url.trim();
    let Some(colon) = url.find(':') else {
        return url.to_string();
    };
    // A `/`, `?` or `#` before the colon means it is part of a relative path.
    if url[..colon].contains(['/', '?', '#']) {
        return url.to_string();
    }
    let protocol = url[..colon].to_lowercase();
    if SAFE_PROTOCOLS.contains(&protocol.as_str()) {
        url.to_string()
    } else {
        String::new()
    }
}
