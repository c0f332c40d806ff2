//! Email/password sign-in.

use dioxus::prelude::*;
use ui::{use_auth, use_auth_handle};

use super::form_error;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let handle = use_auth_handle();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    // Already signed in
    use_effect(move || {
        let state = auth();
        if !state.loading && state.is_authenticated() {
            nav.replace(Route::Home {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let handle = handle.clone();
        spawn(async move {
            error.set(None);
            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }
            match handle.login(&e, &p).await {
                Ok(user) => {
                    tracing::info!("Signed in as {}", user.username);
                    nav.push(Route::Home {});
                }
                Err(e) => error.set(form_error(&e)),
            }
        });
    };

    let busy = auth().loading;

    rsx! {
        div {
            class: "auth-container",
            h1 { "Sign in" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "No account yet? "
                Link { to: Route::Register {}, "Create one" }
            }
        }
    }
}
