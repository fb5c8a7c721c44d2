use std::rc::Rc;

use chatmd::{AnswerResponse, RenderConfig, SyntectHighlighter};
use leptos::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::ChatTranscript;
use crate::i18n::{provide_i18n, use_i18n};

const DEMO_TRANSCRIPT: &str = include_str!("../demo/transcript.json");
const RENDER_CONFIG: &str = include_str!("../demo/config.json");

const LANGUAGES: &[(&str, &str)] = &[("en", "EN"), ("de", "DE")];

/// Loads the bundled render config, falling back to the defaults.
fn load_config(json: &str) -> RenderConfig {
    RenderConfig::from_json(json).unwrap_or_else(|err| {
        log::warn!("Using default render config: {}", err);
        RenderConfig::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    provide_i18n("en".to_string());

    // One highlighter for every message; loading themes is not free.
    let config = load_config(RENDER_CONFIG);
    provide_context(Rc::new(SyntectHighlighter::new(&config.theme)));
    provide_context(config);

    view! {
        <main class="chat-page">
            <LanguageSwitch />
            <DemoTranscript />
        </main>
    }
}

#[component]
fn LanguageSwitch() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="language-switch" title=move || i18n.t("app.language")>
            {LANGUAGES
                .iter()
                .map(|&(code, label)| {
                    let active = Signal::derive(move || i18n.language.get() == code);
                    view! {
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Small
                            disabled=active
                            on_click=Callback::new(move |_: ev::MouseEvent| i18n.set_language(code))
                        >
                            {label}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn DemoTranscript() -> impl IntoView {
    let i18n = use_i18n();

    match serde_json::from_str::<AnswerResponse>(DEMO_TRANSCRIPT) {
        Ok(response) => view! { <ChatTranscript response=response /> }.into_view(),
        Err(err) => {
            log::error!("Demo transcript is invalid: {}", err);
            view! { <p class="chat-empty">{move || i18n.t("chat.empty")}</p> }.into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_transcript_parses() {
        let response: AnswerResponse = serde_json::from_str(DEMO_TRANSCRIPT).unwrap();
        assert_eq!(response.chat_history.len(), 4);
        assert!(response.is_grounded());
    }

    #[test]
    fn test_demo_transcript_renders_cards_and_inline_code() {
        let response: AnswerResponse = serde_json::from_str(DEMO_TRANSCRIPT).unwrap();
        let html = chatmd::render_markdown_html(&response.chat_history[3].content, &RenderConfig::default());

        assert!(html.contains(">PYTHON</span>"));
        assert!(html.contains("<table>"));
        assert!(html.contains(&format!("<code class=\"{}\">nums.sort()</code>", chatmd::classes::INLINE_CODE)));
    }

    #[test]
    fn test_bundled_config_is_valid() {
        assert_eq!(RenderConfig::from_json(RENDER_CONFIG).unwrap(), RenderConfig::default());
        assert_eq!(load_config(RENDER_CONFIG), RenderConfig::default());
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let config = load_config(r#"{"copy_confirmation_ms": 0, "line_numbers": false}"#);
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_languages_have_translation_tables() {
        for (code, _) in LANGUAGES {
            let i18n = crate::i18n::I18nContext::new(code.to_string());
            assert_ne!(i18n.t("app.language"), "app.language", "{code}");
        }
    }
}
