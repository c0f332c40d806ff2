use dioxus::prelude::*;

use crate::Route;

const POPULAR_TERMS: [&str; 5] = ["Electronics", "Clothing", "Books", "Home", "Sport"];

#[component]
pub fn Search() -> Element {
    let nav = use_navigator();
    let mut query = use_signal(String::new);

    let go = move |term: String| {
        nav.push(Route::Products {
            search: term,
            category: String::new(),
        });
    };

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        let q = query().trim().to_string();
        if !q.is_empty() {
            go(q);
        }
    };

    rsx! {
        div {
            class: "search-page",
            button {
                class: "secondary",
                onclick: move |_| nav.go_back(),
                "Back"
            }

            h1 { "Search products" }

            form {
                class: "search-form",
                onsubmit: handle_search,
                input {
                    r#type: "text",
                    placeholder: "What are you looking for?",
                    autofocus: true,
                    value: query(),
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: query().trim().is_empty(),
                    "Search"
                }
            }

            h2 { "Popular searches" }
            div {
                class: "category-chips",
                for term in POPULAR_TERMS {
                    button {
                        key: "{term}",
                        class: "chip",
                        onclick: move |_| {
                            query.set(term.to_string());
                            go(term.to_string());
                        },
                        "{term}"
                    }
                }
            }
        }
    }
}
