//! Registration page view with email/password form.

use dioxus::prelude::*;
use ui::use_auth_handle;

use super::form_error;
use crate::Route;

/// Shortest password the form accepts.
const MIN_PASSWORD_LEN: usize = 6;

/// Check the registration fields, returning the first problem found.
fn validate(username: &str, email: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() {
        return Err("Username is required");
    }
    if !email.contains('@') {
        return Err("Please enter a valid email");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Register page component.
#[component]
pub fn Register() -> Element {
    let handle = use_auth_handle();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let handle = handle.clone();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if let Err(msg) = validate(&u, &e, &p, &cp) {
                error.set(Some(msg.to_string()));
                return;
            }

            loading.set(true);
            match handle.register(&u, &e, &p).await {
                Ok(_) => {
                    loading.set(false);
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(form_error(&e));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",

            h1 { "Create Account" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password (min 6 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
