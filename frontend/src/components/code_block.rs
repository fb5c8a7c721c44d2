use chatmd::highlight::HighlightedLine;
use chatmd::{classes, ClipboardError, CodeCard, CopyFeedback, CopyLabel, RenderConfig, RenderedCode};
use leptos::*;

use crate::clipboard;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Card, CardBody, CardHeader};
use crate::i18n::use_i18n;

/// Renders a classified code span: an inline token or a highlighted card.
#[component]
pub fn CodeBlock(code: RenderedCode) -> impl IntoView {
    match code {
        RenderedCode::Inline { code } => view! {
            <code class=classes::INLINE_CODE>{code}</code>
        }
        .into_view(),
        RenderedCode::Card(card) => view! { <CodeCardView card=card /> }.into_view(),
    }
}

#[component]
fn CodeCardView(card: CodeCard) -> impl IntoView {
    let CodeCard {
        label,
        language,
        code,
        highlighted,
        line_numbers,
    } = card;

    let pre_style = highlighted.container_css();
    let header = label.map(|label| {
        view! {
            <CardHeader class=classes::CODE_CARD_HEADER>
                <span class=classes::LANGUAGE_LABEL>{label}</span>
                <CopyButton code=code />
            </CardHeader>
        }
    });
    let lines = highlighted
        .lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            view! { <CodeLine number=index + 1 line=line line_numbers=line_numbers /> }
        })
        .collect_view();

    view! {
        <Card class=classes::CODE_CARD>
            {header}
            <CardBody class=classes::CODE_CARD_BODY>
                <pre class=classes::CODE_PRE style=pre_style data-language=language>
                    {lines}
                </pre>
            </CardBody>
        </Card>
    }
}

#[component]
fn CodeLine(number: usize, line: HighlightedLine, line_numbers: bool) -> impl IntoView {
    let gutter = line_numbers.then(|| {
        view! { <span class=classes::LINE_NUMBER>{number}</span> }
    });
    let tokens = if line.is_empty() {
        // Keeps blank lines one line tall.
        "\n".into_view()
    } else {
        line.into_iter()
            .map(|token| {
                let style = token.style.to_css();
                let style = (!style.is_empty()).then_some(style);
                view! { <span style=style>{token.text}</span> }
            })
            .collect_view()
    };

    view! {
        <div class=classes::CODE_LINE>
            {gutter}
            {tokens}
        </div>
    }
}

/// Copies `code` to the clipboard and briefly confirms it in its label.
#[component]
pub fn CopyButton(#[prop(into)] code: String) -> impl IntoView {
    let config = use_context::<RenderConfig>().unwrap_or_default();
    let feedback = create_rw_signal(CopyFeedback::from_config(&config));
    let code = store_value(code);

    let on_click = Callback::new(move |_: ev::MouseEvent| {
        let text = code.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = clipboard::write_text(&text).await;
            finish_copy(feedback, result);
        });
    });

    view! { <CopyControl feedback=feedback on_click=on_click /> }
}

/// Applies a clipboard result and schedules the label revert.
fn finish_copy(feedback: RwSignal<CopyFeedback>, result: Result<(), ClipboardError>) {
    let Some(revert) = feedback.try_update(|state| state.resolve(result)).flatten() else {
        return;
    };
    // The button may be gone by now; the revert is then a no-op.
    set_timeout(
        move || {
            feedback.try_update(|state| state.revert(revert.token));
        },
        revert.after,
    );
}

#[component]
fn CopyControl(feedback: RwSignal<CopyFeedback>, on_click: Callback<ev::MouseEvent>) -> impl IntoView {
    let i18n = use_i18n();
    let title = Signal::derive(move || i18n.t("code.copy_title"));
    let label = move || match feedback.with(CopyFeedback::label) {
        CopyLabel::Idle => i18n.t("code.copy"),
        CopyLabel::Copied => i18n.t("code.copied"),
    };

    view! {
        <Button
            variant=ButtonVariant::Ghost
            size=ButtonSize::Small
            class=classes::COPY_BUTTON
            title=title
            on_click=on_click
        >
            {label}
        </Button>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::time::Duration;

    use chatmd::copy::{COPIED_LABEL, COPY_LABEL};
    use chatmd::{render_code, CodeSpan, PlainHighlighter};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container() -> web_sys::HtmlElement {
        let document = document();
        let parent: web_sys::HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&parent).unwrap();
        parent
    }

    fn button(parent: &web_sys::HtmlElement) -> web_sys::HtmlElement {
        parent
            .query_selector("button")
            .unwrap()
            .expect("copy button")
            .unchecked_into()
    }

    fn mount_control(result: Result<(), ClipboardError>) -> web_sys::HtmlElement {
        let parent = container();
        let feedback = create_rw_signal(CopyFeedback::new(Duration::from_millis(40)));
        let on_click = Callback::new(move |_: ev::MouseEvent| finish_copy(feedback, result.clone()));
        mount_to(parent.clone(), move || view! { <CopyControl feedback=feedback on_click=on_click /> });
        parent
    }

    #[wasm_bindgen_test]
    async fn test_label_flips_then_reverts() {
        let parent = mount_control(Ok(()));
        let button = button(&parent);
        assert_eq!(button.text_content().as_deref(), Some(COPY_LABEL));
        assert_eq!(button.get_attribute("title").as_deref(), Some("Copy to clipboard"));

        button.click();
        assert_eq!(button.text_content().as_deref(), Some(COPIED_LABEL));

        TimeoutFuture::new(80).await;
        assert_eq!(button.text_content().as_deref(), Some(COPY_LABEL));
    }

    #[wasm_bindgen_test]
    async fn test_failed_copy_keeps_label() {
        let parent = mount_control(Err(ClipboardError::Unavailable));
        let button = button(&parent);

        button.click();
        assert_eq!(button.text_content().as_deref(), Some(COPY_LABEL));
    }

    #[wasm_bindgen_test]
    fn test_card_renders_header_and_lines() {
        let parent = container();
        let code = render_code(
            &CodeSpan::new("a = 1\nb = 2", Some("python"), false),
            &PlainHighlighter,
            &RenderConfig::default(),
        );
        mount_to(parent.clone(), move || view! { <CodeBlock code=code /> });

        let label = parent.query_selector(".code-language").unwrap().unwrap();
        assert_eq!(label.text_content().as_deref(), Some("PYTHON"));
        let lines = parent.query_selector_all(".code-line").unwrap();
        assert_eq!(lines.length(), 2);
    }
}
