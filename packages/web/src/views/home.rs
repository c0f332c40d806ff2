use dioxus::prelude::*;
use ui::{EmptyState, LoadError, Loading, ProductCard};

use crate::Route;

/// Number of products featured on the landing page.
const FEATURED: usize = 4;

#[component]
pub fn Home() -> Element {
    let api = ui::use_api();
    let nav = use_navigator();

    let mut featured = use_resource(move || {
        let api = api.clone();
        async move {
            api.list_products()
                .await
                .map(|products| products.into_iter().take(FEATURED).collect::<Vec<_>>())
        }
    });

    let body = match featured.read().clone() {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! {
            LoadError {
                message: e.user_message(),
                on_retry: move |_| featured.restart(),
            }
        },
        Some(Ok(products)) if products.is_empty() => rsx! {
            EmptyState { message: "No products yet." }
        },
        Some(Ok(products)) => rsx! {
            div {
                class: "product-grid",
                for product in products {
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
        section {
            class: "hero",
            h1 { "Everything you need, in one shop" }
            p { "Browse the catalogue or search for something specific." }
            button {
                class: "primary",
                onclick: move |_| {
                    nav.push(Route::catalogue());
                },
                "Shop now"
            }
        }

        section {
            class: "featured",
            h2 { "Featured products" }
            {body}
            div {
                class: "centered",
                Link { to: Route::catalogue(), "View all products" }
            }
        }
    }
}
