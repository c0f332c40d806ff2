//! Page chrome shared by every route: navbar, search box and footer.

use api::ClientConfig;
use dioxus::prelude::*;
use ui::{use_auth, LogoutButton, Navbar};

use crate::Route;

#[component]
pub fn Shell() -> Element {
    let config = use_context::<ClientConfig>();
    let auth = use_auth();
    let nav = use_navigator();
    let mut query = use_signal(String::new);

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        let q = query().trim().to_string();
        if q.is_empty() {
            return;
        }
        query.set(String::new());
        nav.push(Route::Products {
            search: q,
            category: String::new(),
        });
    };

    let state = auth();
    let user_name = state.user.as_ref().map(|u| u.display_name().to_string());
    let store_name = config.ui.store_name.clone();

    rsx! {
        Navbar {
            brand: store_name.clone(),
            on_home: move |_| {
                nav.push(Route::Home {});
            },
            Link { to: Route::catalogue(), "Products" }
            form {
                class: "navbar-search",
                onsubmit: handle_search,
                input {
                    r#type: "search",
                    placeholder: "Search products...",
                    value: query(),
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
            }
            if state.is_admin() {
                Link { to: Route::Admin {}, "Admin" }
            }
            if let Some(name) = user_name {
                Link { to: Route::Account {}, "{name}" }
                LogoutButton {
                    class: "secondary",
                    on_logout: move |_| {
                        nav.push(Route::Home {});
                    },
                }
            } else if !state.loading {
                Link { to: Route::Login {}, "Log in" }
                Link { to: Route::Register {}, class: "button-link", "Sign up" }
            }
        }

        main {
            class: "page",
            Outlet::<Route> {}
        }

        footer {
            class: "footer",
            "© {store_name}"
        }
    }
}
