use chatmd::classes;
use leptos::*;

fn with_extra(base: &str, extra: Option<String>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Card container component.
#[component]
pub fn Card(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = with_extra(classes::CARD, class);
    let style_attr = style.unwrap_or_default();

    view! {
        <div class=full_class style=style_attr>
            {children()}
        </div>
    }
}

/// Card header section.
#[component]
pub fn CardHeader(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = with_extra(classes::CARD_HEADER, class);

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

/// Card body section.
#[component]
pub fn CardBody(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = with_extra(classes::CARD_BODY, class);

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}
