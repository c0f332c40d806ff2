use api::models::categories;
use dioxus::prelude::*;
use ui::{EmptyState, LoadError, Loading, ProductCard};

use crate::Route;

/// Catalogue listing.
///
/// A non-empty `search` wins over `category`; with neither the whole
/// catalogue is loaded. Category chips come from the products currently shown.
#[component]
pub fn Products(search: String, category: String) -> Element {
    // Track the query in a signal so the loader re-runs when the URL changes
    let mut filters = use_signal(|| (search.clone(), category.clone()));
    if *filters.peek() != (search.clone(), category.clone()) {
        filters.set((search.clone(), category.clone()));
    }

    let api = ui::use_api();
    let nav = use_navigator();
    let mut query = use_signal(|| search.clone());

    let mut products = use_resource(move || {
        let api = api.clone();
        let (search, category) = filters();
        async move {
            if !search.is_empty() {
                api.search_products(&search).await
            } else if !category.is_empty() {
                api.products_by_category(&category).await
            } else {
                api.list_products().await
            }
        }
    });

    let active_category = category.clone();
    let active_search = search.clone();
    let filtered = !search.is_empty() || !category.is_empty();

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        let (_, category) = filters();
        nav.push(Route::Products {
            search: query().trim().to_string(),
            category,
        });
    };

    let reset = move |_| {
        query.set(String::new());
        nav.push(Route::catalogue());
    };

    let loaded = products.read().clone();
    let chips = match &loaded {
        Some(Ok(list)) => categories(list),
        _ => Vec::new(),
    };

    let body = match loaded {
        None => rsx! { Loading { label: "Loading products..." } },
        Some(Err(e)) => rsx! {
            LoadError {
                message: e.user_message(),
                on_retry: move |_| products.restart(),
            }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState {
                message: "No products found",
                if filtered {
                    button { class: "primary", onclick: reset, "Show all products" }
                }
            }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "product-grid",
                for product in list {
                    ProductCard {
                        key: "{product.id}",
                        product: product.clone(),
                        on_open: move |id| {
                            nav.push(Route::ProductDetail { id });
                        },
                    }
                }
            }
        },
    };

    rsx! {
        h1 { "Our products" }

        form {
            class: "search-form",
            onsubmit: handle_search,
            input {
                r#type: "text",
                placeholder: "Search products...",
                value: query(),
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }
            button { class: "primary", r#type: "submit", "Search" }
        }

        div {
            class: "category-chips",
            span { "Filter by category:" }
            button {
                class: if active_category.is_empty() { "chip active" } else { "chip" },
                onclick: move |_| {
                    nav.push(Route::Products {
                        search: query().trim().to_string(),
                        category: String::new(),
                    });
                },
                "All"
            }
            for chip in chips {
                button {
                    key: "{chip}",
                    class: if chip == active_category { "chip active" } else { "chip" },
                    onclick: {
                        let chip = chip.clone();
                        move |_| {
                            nav.push(Route::Products {
                                search: query().trim().to_string(),
                                category: chip.clone(),
                            });
                        }
                    },
                    "{chip}"
                }
            }
        }

        if filtered {
            div {
                class: "active-filters",
                span { "Active filters:" }
                if !active_search.is_empty() {
                    span { class: "badge", "Search: {active_search}" }
                }
                if !active_category.is_empty() {
                    span { class: "badge", "Category: {active_category}" }
                }
                button { class: "danger", onclick: reset, "Reset" }
            }
        }

        {body}
    }
}
