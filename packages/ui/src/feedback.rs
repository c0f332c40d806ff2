//! Loading, error and empty placeholders shared by list and detail views.

use dioxus::prelude::*;

#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "loading", "{label}" }
    }
}

/// Inline load failure with a retry affordance.
#[component]
pub fn LoadError(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "load-error",
            p { "{message}" }
            button {
                class: "primary",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}

#[component]
pub fn EmptyState(message: String, children: Element) -> Element {
    rsx! {
        div {
            class: "empty-state",
            p { "{message}" }
            {children}
        }
    }
}
