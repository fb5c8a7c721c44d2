//! Presentational element tree produced by the message renderer.

use crate::code_block::RenderedCode;

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// A classified code span; interactive hosts render it themselves.
    Code(RenderedCode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
            out.push('"');
        }
        out.push('>');
        if self.is_void() {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_html(out),
            Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
            Node::Code(code) => code.to_element().write_html(out),
        }
    }

    /// Elements with the given tag in document order, this node included.
    /// Code nodes are searched in their static form.
    pub fn find_all(&self, tag: &str) -> Vec<Element> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    fn collect(&self, tag: &str, found: &mut Vec<Element>) {
        match self {
            Node::Element(element) => {
                if element.tag == tag {
                    found.push(element.clone());
                }
                for child in &element.children {
                    child.collect(tag, found);
                }
            }
            Node::Text(_) => {}
            Node::Code(code) => Node::Element(code.to_element()).collect(tag, found),
        }
    }
}

pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_html(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_text_and_attributes() {
        let node: Node = Element::new("a")
            .attr("href", "https://x.test/?a=1&b=\"2\"")
            .child(Node::text("<b>&</b>"))
            .into();
        assert_eq!(
            to_html(&[node]),
            "<a href=\"https://x.test/?a=1&amp;b=&quot;2&quot;\">&lt;b&gt;&amp;&lt;/b&gt;</a>"
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let node: Node = Element::new("p")
            .child(Node::text("a"))
            .child(Element::new("br"))
            .child(Node::text("b"))
            .into();
        assert_eq!(to_html(&[node]), "<p>a<br>b</p>");
    }

    #[test]
    fn test_find_all_walks_descendants() {
        let node: Node = Element::new("div")
            .child(Element::new("a").attr("href", "1"))
            .child(Element::new("p").child(Element::new("a").attr("href", "2")))
            .into();
        let links = node.find_all("a");
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].get_attr("href"), Some("2"));
    }
}
