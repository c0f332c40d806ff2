//! Admin create and edit forms.

use api::{Notice, ProductForm};
use dioxus::prelude::*;
use ui::{notify, use_notifications, LoadError, Loading, RequireRole};

use crate::Route;

#[component]
pub fn NewProduct() -> Element {
    let nav = use_navigator();

    rsx! {
        RequireRole {
            admin: true,
            on_denied: move |_| {
                nav.replace(Route::Login {});
            },
            ProductEditor { initial: ProductForm::default() }
        }
    }
}

#[component]
pub fn EditProduct(id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        RequireRole {
            admin: true,
            on_denied: move |_| {
                nav.replace(Route::Login {});
            },
            EditLoader { id }
        }
    }
}

/// Fetch the product being edited, then hand it to the form.
#[component]
fn EditLoader(id: i64) -> Element {
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let api = ui::use_api();
    let mut product = use_resource(move || {
        let api = api.clone();
        let id = id_signal();
        async move { api.get_product(id).await }
    });

    let loaded = product.read().clone();
    match loaded {
        None => rsx! { Loading {} },
        Some(Err(e)) => rsx! {
            LoadError {
                message: e.user_message(),
                on_retry: move |_| product.restart(),
            }
        },
        Some(Ok(found)) => rsx! {
            ProductEditor {
                key: "{found.id}",
                id: found.id,
                initial: ProductForm::from(&found),
            }
        },
    }
}

/// The form itself; `id` selects update over create.
#[component]
fn ProductEditor(id: Option<i64>, initial: ProductForm) -> Element {
    let api = ui::use_api();
    let nav = use_navigator();
    let mut notices = use_notifications();
    let mut form = use_signal(|| initial.clone());
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let input = match form.read().validate() {
            Ok(input) => input,
            Err(e) => {
                notify(&mut notices, Notice::error(e.to_string()));
                return;
            }
        };
        let api = api.clone();
        spawn(async move {
            submitting.set(true);
            let saved = match id {
                Some(id) => api.update_product(id, &input).await,
                None => api.create_product(&input).await,
            };
            submitting.set(false);
            // Failures already raised a notice; stay on the form
            if let Ok(product) = saved {
                tracing::info!("Saved product {}", product.id);
                nav.push(Route::AdminProducts {});
            }
        });
    };

    let title = if id.is_some() { "Edit product" } else { "Add a product" };
    let values = form();

    rsx! {
        button {
            class: "secondary back",
            onclick: move |_| {
                nav.push(Route::AdminProducts {});
            },
            "Back to the list"
        }

        h1 { "{title}" }

        form {
            class: "product-form",
            onsubmit: handle_submit,

            label { r#for: "name", "Product name *" }
            input {
                id: "name",
                required: true,
                placeholder: "Product name",
                value: values.name,
                oninput: move |evt: FormEvent| form.write().name = evt.value(),
            }

            label { r#for: "description", "Description" }
            textarea {
                id: "description",
                rows: "4",
                placeholder: "Product description",
                value: values.description,
                oninput: move |evt: FormEvent| form.write().description = evt.value(),
            }

            div {
                class: "form-row",
                div {
                    label { r#for: "price", "Price (€) *" }
                    input {
                        id: "price",
                        r#type: "number",
                        step: "0.01",
                        min: "0",
                        value: values.price,
                        oninput: move |evt: FormEvent| form.write().price = evt.value(),
                    }
                }
                div {
                    label { r#for: "quantity", "Quantity *" }
                    input {
                        id: "quantity",
                        r#type: "number",
                        step: "1",
                        min: "0",
                        value: values.quantity,
                        oninput: move |evt: FormEvent| form.write().quantity = evt.value(),
                    }
                }
            }

            label { r#for: "category", "Category" }
            input {
                id: "category",
                placeholder: "Product category",
                value: values.category,
                oninput: move |evt: FormEvent| form.write().category = evt.value(),
            }

            label { r#for: "image_url", "Image URL" }
            input {
                id: "image_url",
                placeholder: "https://example.com/image.jpg",
                value: values.image_url.clone(),
                oninput: move |evt: FormEvent| form.write().image_url = evt.value(),
            }
            if !values.image_url.trim().is_empty() {
                img { class: "image-preview", src: "{values.image_url}", alt: "Preview" }
            }

            button {
                class: "primary",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Saving..." } else { "Save" }
            }
        }
    }
}
