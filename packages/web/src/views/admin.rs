use dioxus::prelude::*;
use ui::icons::{FaBox, FaCirclePlus};
use ui::{Icon, RequireRole};

use crate::Route;

/// Admin landing page.
#[component]
pub fn Admin() -> Element {
    let nav = use_navigator();

    rsx! {
        RequireRole {
            admin: true,
            on_denied: move |_| {
                nav.replace(Route::Login {});
            },
            div {
                class: "page-header",
                div {
                    h1 { "Admin console" }
                    p { "Manage your products and your shop." }
                }
                button {
                    class: "primary",
                    onclick: move |_| {
                        nav.push(Route::NewProduct {});
                    },
                    Icon { icon: FaCirclePlus, width: 14, height: 14 }
                    " Add a product"
                }
            }
            div {
                class: "dashboard-grid",
                Link {
                    to: Route::AdminProducts {},
                    class: "card dashboard-card",
                    h2 {
                        Icon { icon: FaBox, width: 18, height: 18 }
                        " Product management"
                    }
                    p { "Add, edit or delete products from your catalogue." }
                }
            }
        }
    }
}
