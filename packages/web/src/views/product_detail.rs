use api::models::format_price;
use dioxus::prelude::*;
use ui::{use_auth, LoadError, Loading};

use super::confirm;
use crate::Route;

const FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158";

#[component]
pub fn ProductDetail(id: i64) -> Element {
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let api = ui::use_api();
    let auth = use_auth();
    let nav = use_navigator();
    let mut deleting = use_signal(|| false);

    let loader_api = api.clone();
    let mut loader = use_resource(move || {
        let api = loader_api.clone();
        let id = id_signal();
        async move { api.get_product(id).await }
    });

    let handle_delete = move |_| {
        if !confirm("Are you sure you want to delete this product?") {
            return;
        }
        let api = api.clone();
        let id = id_signal();
        spawn(async move {
            deleting.set(true);
            // On failure the notice is already shown and the product stays
            if api.delete_product(id).await.is_ok() {
                nav.push(Route::catalogue());
            }
            deleting.set(false);
        });
    };

    let back = rsx! {
        button {
            class: "secondary back",
            onclick: move |_| nav.go_back(),
            "Back"
        }
    };

    let loaded = loader.read().clone();
    let product = match loaded {
        None => {
            return rsx! {
                {back}
                Loading { label: "Loading product..." }
            }
        }
        Some(Err(e)) => {
            return rsx! {
                {back}
                LoadError {
                    message: e.user_message(),
                    on_retry: move |_| loader.restart(),
                }
                div {
                    class: "centered",
                    Link { to: Route::catalogue(), "See all products" }
                }
            }
        }
        Some(Ok(product)) => product,
    };

    let image = product
        .image_url
        .clone()
        .unwrap_or_else(|| FALLBACK_IMAGE.to_string());
    let price = format_price(product.price);
    let description = product
        .description
        .clone()
        .unwrap_or_else(|| "No description available for this product.".to_string());
    let plural = if product.quantity > 1 { "s" } else { "" };
    let product_id = product.id;

    rsx! {
        {back}
        div {
            class: "product-detail",
            img { class: "product-detail-image", src: "{image}", alt: "{product.name}" }
            div {
                class: "product-detail-info",
                h1 { "{product.name}" }
                if let Some(category) = &product.category {
                    span { class: "badge", "{category}" }
                }
                p { class: "price large", "{price}" }

                h2 { "Description" }
                p { "{description}" }

                h2 { "Availability" }
                if product.in_stock() {
                    p { class: "in-stock", "In stock: {product.quantity} unit{plural} available" }
                } else {
                    p { class: "out-of-stock", "Out of stock" }
                }

                button {
                    class: "primary",
                    disabled: !product.in_stock(),
                    "Add to cart"
                }

                if auth().is_admin() {
                    div {
                        class: "admin-actions",
                        button {
                            class: "secondary",
                            onclick: move |_| {
                                nav.push(Route::EditProduct { id: product_id });
                            },
                            "Edit"
                        }
                        button {
                            class: "danger",
                            disabled: deleting(),
                            onclick: handle_delete,
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
