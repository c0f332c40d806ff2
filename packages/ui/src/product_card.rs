use api::models::format_price;
use api::Product;
use dioxus::prelude::*;

/// Image shown when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x300?text=No+image";

#[component]
pub fn ProductCard(product: Product, on_open: EventHandler<i64>) -> Element {
    let id = product.id;
    let image = product
        .image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let price = format_price(product.price);

    rsx! {
        div {
            class: "product-card",
            img {
                class: "product-card-image",
                src: "{image}",
                alt: "{product.name}",
            }
            div {
                class: "product-card-body",
                h3 { "{product.name}" }
                if let Some(category) = &product.category {
                    span { class: "badge", "{category}" }
                }
                if let Some(description) = &product.description {
                    p { class: "product-card-description", "{description}" }
                }
                div {
                    class: "product-card-footer",
                    span { class: "price", "{price}" }
                    if product.in_stock() {
                        span { class: "stock in-stock", "In stock" }
                    } else {
                        span { class: "stock out-of-stock", "Out of stock" }
                    }
                }
                button {
                    class: "primary",
                    onclick: move |_| on_open.call(id),
                    "View details"
                }
            }
        }
    }
}
