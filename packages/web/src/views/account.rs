use dioxus::prelude::*;
use ui::icons::{FaShieldHalved, FaUser};
use ui::{use_auth, Icon, LogoutButton, RequireRole};

use crate::Route;

#[component]
pub fn Account() -> Element {
    let nav = use_navigator();

    rsx! {
        RequireRole {
            on_denied: move |_| {
                nav.replace(Route::Login {});
            },
            Profile {}
        }
    }
}

#[component]
fn Profile() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let Some(user) = auth().user else {
        return rsx! {
            p { class: "loading", "Loading your profile..." }
        };
    };
    let member_since = user.created_at.format("%B %-d, %Y").to_string();
    let role_label = if user.is_admin() { "Administrator" } else { "User" };

    rsx! {
        div {
            class: "card account",
            div {
                class: "card-header",
                Icon { icon: FaUser, width: 24, height: 24 }
                div {
                    h1 { "My profile" }
                    p { "Manage your personal information" }
                }
            }
            div {
                class: "card-body profile-grid",
                div { h3 { "Username" } p { "{user.username}" } }
                div { h3 { "Email" } p { "{user.email}" } }
                div {
                    h3 { "Role" }
                    p {
                        class: if user.is_admin() { "role admin" } else { "role" },
                        Icon { icon: FaShieldHalved, width: 14, height: 14 }
                        " {role_label}"
                    }
                }
                div { h3 { "Member since" } p { "{member_since}" } }
            }
            if user.is_admin() {
                div {
                    class: "admin-notice",
                    h3 { "Administrator access" }
                    p { "You can manage products and open the admin console." }
                    button {
                        class: "primary",
                        onclick: move |_| {
                            nav.push(Route::Admin {});
                        },
                        "Open admin console"
                    }
                }
            }
            div {
                class: "card-footer",
                LogoutButton {
                    class: "secondary",
                    on_logout: move |_| {
                        nav.push(Route::Home {});
                    },
                }
            }
        }
    }
}
