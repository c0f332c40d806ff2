//! Role gate for protected views.

use dioxus::prelude::*;

use crate::auth::use_auth;

/// Renders `children` only for a signed-in user (or an admin, with `admin: true`).
///
/// While the session is still hydrating a loading line is shown. Once it has
/// settled and the visitor lacks the required role, `on_denied` fires so the
/// platform can navigate to the login view.
#[component]
pub fn RequireRole(
    #[props(default)] admin: bool,
    on_denied: EventHandler<()>,
    children: Element,
) -> Element {
    let auth = use_auth();

    use_effect(move || {
        let state = auth();
        if state.loading {
            return;
        }
        let allowed = if admin { state.is_admin() } else { state.is_authenticated() };
        if !allowed {
            tracing::info!("Access denied, admin required: {}", admin);
            on_denied.call(());
        }
    });

    let state = auth();
    if state.loading {
        return rsx! {
            p { class: "loading", "Loading..." }
        };
    }
    let allowed = if admin { state.is_admin() } else { state.is_authenticated() };
    if !allowed {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
