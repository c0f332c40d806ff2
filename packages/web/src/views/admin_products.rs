use api::models::{filter_products, format_price};
use dioxus::prelude::*;
use ui::icons::{FaEye, FaPen, FaTrash};
use ui::{EmptyState, Icon, LoadError, Loading, RequireRole};

use super::confirm;
use crate::Route;

#[component]
pub fn AdminProducts() -> Element {
    let nav = use_navigator();

    rsx! {
        RequireRole {
            admin: true,
            on_denied: move |_| {
                nav.replace(Route::Login {});
            },
            ProductTable {}
        }
    }
}

/// Full catalogue with a local name/category filter.
#[component]
fn ProductTable() -> Element {
    let api = ui::use_api();
    let nav = use_navigator();
    let mut query = use_signal(String::new);

    let loader_api = api.clone();
    let mut products = use_resource(move || {
        let api = loader_api.clone();
        async move { api.list_products().await }
    });

    let handle_delete = move |id: i64| {
        if !confirm("Are you sure you want to delete this product?") {
            return;
        }
        let api = api.clone();
        spawn(async move {
            if api.delete_product(id).await.is_ok() {
                products.restart();
            }
        });
    };

    let loaded = products.read().clone();
    let body = match loaded {
        None => rsx! { Loading { label: "Loading products..." } },
        Some(Err(e)) => rsx! {
            LoadError {
                message: e.user_message(),
                on_retry: move |_| products.restart(),
            }
        },
        Some(Ok(list)) => {
            let shown = filter_products(&list, &query());
            if shown.is_empty() {
                rsx! { EmptyState { message: "No products found" } }
            } else {
                rsx! {
                    table {
                        class: "admin-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Category" }
                                th { "Price" }
                                th { "Stock" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for product in shown {
                                ProductRow {
                                    key: "{product.id}",
                                    id: product.id,
                                    name: product.name.clone(),
                                    category: product.category.clone().unwrap_or_else(|| "-".to_string()),
                                    price: format_price(product.price),
                                    quantity: product.quantity,
                                    on_delete: handle_delete.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        button {
            class: "secondary back",
            onclick: move |_| {
                nav.push(Route::Admin {});
            },
            "Back to dashboard"
        }

        div {
            class: "page-header",
            h1 { "Product management" }
            button {
                class: "primary",
                onclick: move |_| {
                    nav.push(Route::NewProduct {});
                },
                "Add a product"
            }
        }

        input {
            class: "table-filter",
            r#type: "text",
            placeholder: "Filter by name or category...",
            value: query(),
            oninput: move |evt: FormEvent| query.set(evt.value()),
        }

        {body}
    }
}

#[component]
fn ProductRow(
    id: i64,
    name: String,
    category: String,
    price: String,
    quantity: i64,
    on_delete: EventHandler<i64>,
) -> Element {
    let nav = use_navigator();

    rsx! {
        tr {
            td { "{name}" }
            td { "{category}" }
            td { "{price}" }
            td {
                class: if quantity > 0 { "in-stock" } else { "out-of-stock" },
                "{quantity}"
            }
            td {
                class: "row-actions",
                button {
                    title: "View",
                    onclick: move |_| {
                        nav.push(Route::ProductDetail { id });
                    },
                    Icon { icon: FaEye, width: 14, height: 14 }
                }
                button {
                    title: "Edit",
                    onclick: move |_| {
                        nav.push(Route::EditProduct { id });
                    },
                    Icon { icon: FaPen, width: 14, height: 14 }
                }
                button {
                    class: "danger",
                    title: "Delete",
                    onclick: move |_| on_delete.call(id),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
            }
        }
    }
}
