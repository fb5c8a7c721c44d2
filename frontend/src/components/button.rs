use chatmd::classes;
use leptos::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

#[derive(Default, Clone, Copy, PartialEq)]
pub enum ButtonSize {
    #[default]
    Medium,
    Small,
}

fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    let variant_class = match variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Secondary => "btn",
        ButtonVariant::Ghost => classes::BUTTON_GHOST,
    };
    let mut parts = vec![variant_class];
    if size == ButtonSize::Small {
        parts.push(classes::BUTTON_SMALL);
    }
    if let Some(extra) = extra {
        parts.push(extra);
    }
    parts.join(" ")
}

/// Reusable button component with variants and sizes.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let full_class = button_class(variant, size, class.as_deref());

    view! {
        <button
            type="button"
            class=full_class
            title=move || title.get()
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
