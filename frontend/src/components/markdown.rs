use std::rc::Rc;

use chatmd::{CmarkParser, Element, MessageRenderer, Node, RenderConfig, SyntectHighlighter};
use leptos::*;

use crate::components::code_block::CodeBlock;

/// Renders markdown chat content.
///
/// Uses the [`RenderConfig`] and `Rc<SyntectHighlighter>` from context when
/// provided, defaults otherwise.
#[component]
pub fn MarkdownMessage(
    /// The markdown content to render
    #[prop(into)]
    content: MaybeSignal<String>,
) -> impl IntoView {
    let config = use_context::<RenderConfig>().unwrap_or_default();
    let highlighter = use_context::<Rc<SyntectHighlighter>>()
        .unwrap_or_else(|| Rc::new(SyntectHighlighter::new(&config.theme)));
    let parser = CmarkParser::gfm().with_autolinks(config.autolinks);

    view! {
        <div class="markdown-content">
            {move || {
                let renderer = MessageRenderer::new(&parser, highlighter.as_ref(), &config);
                content
                    .with(|text| renderer.render(text))
                    .into_iter()
                    .map(node_view)
                    .collect_view()
            }}
        </div>
    }
}

/// Builds the view for one rendered node.
pub fn node_view(node: Node) -> View {
    match node {
        Node::Text(text) => text.into_view(),
        Node::Code(code) => view! { <CodeBlock code=code /> }.into_view(),
        Node::Element(element) => element_view(element),
    }
}

fn element_view(element: Element) -> View {
    let Element {
        tag,
        attrs,
        children,
    } = element;

    let mut el = html::custom(html::Custom::new(tag));
    for (name, value) in attrs {
        el = el.attr(name, value);
    }
    if children.is_empty() {
        return el.into_view();
    }
    el.child(children.into_iter().map(node_view).collect_view())
        .into_view()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use chatmd::classes;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn render(markdown: &'static str) -> web_sys::HtmlElement {
        let document = document();
        let parent: web_sys::HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&parent).unwrap();
        mount_to(parent.clone(), move || view! { <MarkdownMessage content=markdown /> });
        parent
    }

    #[wasm_bindgen_test]
    fn test_links_open_in_new_context() {
        let parent = render("See [docs](https://docs.rs) and https://example.com");
        let links = parent.query_selector_all("a").unwrap();
        assert_eq!(links.length(), 2);

        for index in 0..links.length() {
            let link: web_sys::Element = links.item(index).unwrap().unchecked_into();
            assert_eq!(link.get_attribute("target").as_deref(), Some("_blank"));
            assert_eq!(link.get_attribute("rel").as_deref(), Some("noopener noreferrer"));
            assert_eq!(link.get_attribute("class").as_deref(), Some(classes::LINK));
        }
    }

    #[wasm_bindgen_test]
    fn test_code_block_is_not_wrapped_in_pre() {
        let parent = render("```rust\nfn main() {}\n```");

        assert_eq!(parent.query_selector_all("pre").unwrap().length(), 1);
        assert!(parent.query_selector("pre code").unwrap().is_none());
        assert!(parent.query_selector("pre pre").unwrap().is_none());

        let pre = parent.query_selector(".code-card pre").unwrap().expect("card body");
        assert_eq!(pre.get_attribute("data-language").as_deref(), Some("rust"));
        assert_eq!(pre.text_content().as_deref(), Some("1fn main() {}"));
    }

    #[wasm_bindgen_test]
    fn test_trivial_block_stays_inline() {
        let parent = render("```\nok\n```");

        assert!(parent.query_selector(".code-card").unwrap().is_none());
        let code = parent.query_selector("code.inline-code").unwrap().expect("inline code");
        assert_eq!(code.text_content().as_deref(), Some("ok"));
    }
}
