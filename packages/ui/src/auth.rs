//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the [`AppSession`] for the lifetime of the app. It
//! hydrates it on mount, forwards API notices into the notification list, and
//! installs the session-expiry handler that sends the browser to the login page.
//! Components read [`use_auth`] for reactive state and [`use_auth_handle`] to
//! sign in or out.

use api::{ApiError, ApiEvent, ClientConfig, User};
use dioxus::prelude::*;

use crate::client::{make_session, AppClient, AppSession};
use crate::notifications::{notify, Notifications};

/// Reactive snapshot of the session.
pub use api::SessionState as AuthState;

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the handle for session operations.
pub fn use_auth_handle() -> AuthHandle {
    use_context::<AuthHandle>()
}

/// Get the shared API client.
pub fn use_api() -> AppClient {
    use_auth_handle().client().clone()
}

/// Session operations that keep the [`AuthState`] signal in step.
#[derive(Clone)]
pub struct AuthHandle {
    session: AppSession,
    state: Signal<AuthState>,
}

impl AuthHandle {
    pub fn client(&self) -> &AppClient {
        self.session.client()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let mut state = self.state;
        state.write().loading = true;
        let result = self.session.login(email, password).await;
        state.set(self.session.state());
        result
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<User, ApiError> {
        let mut state = self.state;
        state.write().loading = true;
        let result = self.session.register(username, email, password).await;
        state.set(self.session.state());
        result
    }

    pub fn logout(&self) {
        let mut state = self.state;
        self.session.logout();
        state.set(self.session.state());
    }
}

/// Send the browser to `path` with a full page load.
fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("Cannot redirect to {} outside the browser", path);
    }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(
    config: ClientConfig,
    /// Where to send the browser when the server rejects the session.
    #[props(default = "/auth/login".to_string())]
    login_path: String,
    children: Element,
) -> Element {
    let mut auth_state = use_signal(|| AuthState {
        loading: true,
        ..AuthState::default()
    });
    let notices = use_signal(Notifications::default);

    let session = use_hook(|| {
        let session = make_session(&config);
        session.client().subscribe(move |event| {
            if let ApiEvent::Notice(notice) = event {
                let mut notices = notices;
                notify(&mut notices, notice.clone());
            }
        });
        let login_path = login_path.clone();
        session.install_expiry_handler(move || {
            let mut auth_state = auth_state;
            auth_state.set(AuthState::default());
            redirect_to(&login_path);
        });
        session
    });

    // Restore the stored session on mount
    let hydrating = session.clone();
    let _ = use_resource(move || {
        let session = hydrating.clone();
        async move {
            session.hydrate().await;
            auth_state.set(session.state());
        }
    });

    use_context_provider(|| auth_state);
    use_context_provider(|| notices);
    use_context_provider(|| AuthHandle {
        session: session.clone(),
        state: auth_state,
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    /// Called after the session has been cleared.
    on_logout: EventHandler<()>,
) -> Element {
    let handle = use_auth_handle();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                handle.logout();
                on_logout.call(());
            },
            "{label}"
        }
    }
}
