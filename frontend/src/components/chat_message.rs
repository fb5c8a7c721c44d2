use chatmd::{AnswerResponse, ChatRole, ChatTurn, Provenance};
use leptos::*;

use crate::components::markdown::MarkdownMessage;
use crate::i18n::use_i18n;

fn message_class(role: ChatRole) -> &'static str {
    match role {
        ChatRole::Human => "chat-message chat-message-own",
        ChatRole::Ai => "chat-message chat-message-ai",
    }
}

fn author_key(role: ChatRole) -> &'static str {
    match role {
        ChatRole::Human => "chat.you",
        ChatRole::Ai => "chat.assistant",
    }
}

fn provenance_key(provenance: Provenance) -> String {
    format!("chat.provenance.{}", provenance.as_str())
}

/// A single chat turn with markdown content.
#[component]
pub fn ChatMessage(turn: ChatTurn) -> impl IntoView {
    let i18n = use_i18n();
    let role = turn.role;
    let author = move || i18n.t(author_key(role));

    view! {
        <div class=message_class(turn.role)>
            <div class="chat-message-header">
                <span class="chat-message-author">{author}</span>
            </div>
            <div class="chat-message-content">
                <MarkdownMessage content=turn.content />
            </div>
        </div>
    }
}

/// Chat history of an answer, followed by its sources and provenance.
#[component]
pub fn ChatTranscript(response: AnswerResponse) -> impl IntoView {
    let i18n = use_i18n();

    let AnswerResponse {
        answer,
        chat_history,
        sources,
        provenance,
        model_name,
    } = response;

    // Older responses only carry the answer.
    let turns = if chat_history.is_empty() {
        vec![ChatTurn::ai(answer)]
    } else {
        chat_history
    };

    let sources_view = (!sources.is_empty()).then(|| {
        view! {
            <div class="chat-sources">
                <span class="chat-sources-title">{move || i18n.t("chat.sources")}</span>
                <ul>
                    {sources
                        .into_iter()
                        .map(|source| view! { <li class="chat-source">{source}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
    });

    let model_view = model_name.map(|name| {
        view! {
            <span class="chat-model">{move || format!("{}: {}", i18n.t("chat.model"), name)}</span>
        }
    });

    view! {
        <div class="chat-transcript">
            {turns
                .into_iter()
                .map(|turn| view! { <ChatMessage turn=turn /> })
                .collect_view()}
            <div class="chat-transcript-footer">
                <span class="chat-provenance">{move || i18n.t(&provenance_key(provenance))}</span>
                {model_view}
                {sources_view}
            </div>
        </div>
    }
}
