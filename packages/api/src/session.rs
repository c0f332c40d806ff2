//! # Session store: who is signed in and what they may do
//!
//! [`Session`] is the single source of truth for the current identity. It is an
//! explicit context object: the UI creates one at startup, hydrates it, and hands
//! clones to whatever needs it. Clones share state.
//!
//! ## Lifecycle
//!
//! 1. [`Session::new`]: empty, `loading` set.
//! 2. [`Session::hydrate`]: if storage holds both a token and a user, confirm the
//!    token with `GET /auth/me` and adopt the returned user. Any failure clears
//!    storage and memory. Never errors; resolves to whether someone is signed in.
//! 3. [`Session::login`] / [`Session::logout`] / [`Session::expire`] mutate memory
//!    and storage together.
//!
//! ## Authentication expiry
//!
//! [`Session::install_expiry_handler`] registers the one top-level listener for
//! [`ApiEvent::AuthRejected`]. It clears the persisted credentials and the
//! in-memory user, then runs the supplied callback (the UI navigates to the
//! login view there). Registering again replaces the previous handler.
//!
//! The session is never refreshed in the background: `current_user` is as fresh
//! as the last successful login or hydration.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::events::{ApiEvent, Subscription};
use crate::models::{RegisterRequest, User};
use crate::transport::Transport;

/// Snapshot of the session, cheap to clone into UI state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// Hydration or a login/register attempt is in flight.
    pub loading: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    fn signed_out() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug)]
pub struct Session<S, T> {
    client: ApiClient<S, T>,
    state: Rc<RefCell<SessionState>>,
    expiry: Rc<Cell<Option<Subscription>>>,
}

impl<S: KeyValueStore, T: Transport> Session<S, T> {
    pub fn new(client: ApiClient<S, T>) -> Self {
        Self {
            client,
            state: Rc::new(RefCell::new(SessionState {
                loading: true,
                ..SessionState::default()
            })),
            expiry: Rc::new(Cell::new(None)),
        }
    }

    pub fn client(&self) -> &ApiClient<S, T> {
        &self.client
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.state.borrow().is_admin()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Restore the session from storage. Returns `true` if a user is signed in.
    pub async fn hydrate(&self) -> bool {
        let Some((token, _cached)) = self.client.credentials().load::<User>() else {
            // A lone token or user is useless; keep the keys paired.
            self.clear();
            return false;
        };

        self.state.borrow_mut().token = Some(token.clone());
        match self.client.current_user().await {
            Ok(user) => {
                tracing::info!("Restored session for {}", user.username);
                if let Err(e) = self.client.credentials().save(&token, &user) {
                    tracing::warn!("Failed to refresh cached user: {}", e);
                }
                *self.state.borrow_mut() = SessionState {
                    user: Some(user),
                    token: Some(token),
                    loading: false,
                };
                true
            }
            Err(e) => {
                // Unreachable server and rejected token are treated alike.
                tracing::warn!("Discarding stored session: {}", e);
                self.clear();
                false
            }
        }
    }

    /// Authenticate and adopt the returned identity.
    ///
    /// On failure the previous state is kept and the error returned; the user
    /// has already been notified by the client.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.set_loading(true);
        let result = self.client.login(email, password).await;
        let mut state = self.state.borrow_mut();
        state.loading = false;
        let auth = result?;
        state.user = Some(auth.user.clone());
        state.token = Some(auth.token);
        Ok(auth.user)
    }

    /// Create a customer account. Does not sign in.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<User, ApiError> {
        self.set_loading(true);
        let request = RegisterRequest::customer(
            username.to_string(),
            email.to_string(),
            password.to_string(),
        );
        let result = self.client.register(&request).await;
        self.set_loading(false);
        Ok(result?.user)
    }

    pub fn logout(&self) {
        tracing::info!("Signing out");
        self.clear();
    }

    /// Drop the session after the server rejected its credentials.
    pub fn expire(&self) {
        tracing::info!("Session expired");
        self.clear();
    }

    fn clear(&self) {
        self.client.logout();
        *self.state.borrow_mut() = SessionState::signed_out();
    }

    fn set_loading(&self, loading: bool) {
        self.state.borrow_mut().loading = loading;
    }
}

impl<S, T> Session<S, T>
where
    S: KeyValueStore + Clone + 'static,
    T: Transport,
{
    /// Register the listener that ends the session on any 401.
    ///
    /// `on_expired` runs after storage and memory are cleared.
    pub fn install_expiry_handler(&self, on_expired: impl Fn() + 'static) -> Subscription {
        let state = Rc::downgrade(&self.state);
        let credentials = self.client.credentials().clone();
        let subscription = self.client.subscribe(move |event| {
            if *event != ApiEvent::AuthRejected {
                return;
            }
            let Some(state) = state.upgrade() else {
                return;
            };
            tracing::info!("Credentials rejected by server, signing out");
            credentials.clear();
            *state.borrow_mut() = SessionState::signed_out();
            on_expired();
        });
        if let Some(previous) = self.expiry.replace(Some(subscription)) {
            self.client.events().unsubscribe(previous);
        }
        subscription
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use store::{MemoryStore, TOKEN_KEY, USER_KEY};

    use super::*;
    use crate::models::ProductForm;
    use crate::test_support::FakeApi;

    /// MemoryStore that counts removals of the token key.
    #[derive(Clone, Default)]
    struct CountingStore {
        inner: MemoryStore,
        token_removals: Rc<Cell<usize>>,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) {
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) {
            if key == TOKEN_KEY && self.inner.get(key).is_some() {
                self.token_removals.set(self.token_removals.get() + 1);
            }
            self.inner.remove(key)
        }
    }

    fn setup() -> (Session<MemoryStore, FakeApi>, FakeApi, MemoryStore) {
        let api = FakeApi::new();
        let kv = MemoryStore::new();
        let session = Session::new(ApiClient::new(kv.clone(), api.clone()));
        (session, api, kv)
    }

    #[tokio::test]
    async fn test_login_sets_user_and_role() {
        let (session, api, _kv) = setup();
        api.seed_user("shopper", "shopper@shop.test", "pw", "user");
        api.seed_user("boss", "boss@shop.test", "pw", "admin");

        let user = session.login("shopper@shop.test", "pw").await.unwrap();
        assert_eq!(user.username, "shopper");
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
        assert!(!session.is_loading());

        session.login("boss@shop.test", "pw").await.unwrap();
        assert!(session.is_authenticated());
        assert!(session.is_admin());
        assert!(session.state().token.is_some());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_previous_session() {
        let (session, api, kv) = setup();
        api.seed_user("shopper", "shopper@shop.test", "pw", "user");
        session.login("shopper@shop.test", "pw").await.unwrap();
        let token = kv.get(TOKEN_KEY);

        let err = session.login("shopper@shop.test", "wrong").await.unwrap_err();
        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(session.current_user().unwrap().username, "shopper");
        assert_eq!(kv.get(TOKEN_KEY), token);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_logout_always_clears() {
        let (session, api, kv) = setup();

        // Nothing to clear
        session.logout();
        assert!(!session.is_authenticated());
        assert!(kv.is_empty());

        api.seed_user("shopper", "shopper@shop.test", "pw", "user");
        session.login("shopper@shop.test", "pw").await.unwrap();
        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.state(), SessionState::default());
        assert!(kv.get(TOKEN_KEY).is_none());
        assert!(kv.get(USER_KEY).is_none());
    }

    #[tokio::test]
    async fn test_hydrate_restores_valid_session() {
        let (session, api, kv) = setup();
        api.seed_user("shopper", "shopper@shop.test", "pw", "admin");
        session.login("shopper@shop.test", "pw").await.unwrap();

        // A fresh page load over the same storage
        let reloaded = Session::new(ApiClient::new(kv.clone(), api.clone()));
        assert!(reloaded.is_loading());
        assert!(reloaded.hydrate().await);
        assert!(reloaded.is_authenticated());
        assert!(reloaded.is_admin());
        assert!(!reloaded.is_loading());
        assert_eq!(api.requests().last().unwrap().path, "/auth/me");
    }

    #[tokio::test]
    async fn test_hydrate_with_invalid_token_clears_storage() {
        let (session, api, kv) = setup();
        api.seed_user("shopper", "shopper@shop.test", "pw", "user");
        session.login("shopper@shop.test", "pw").await.unwrap();
        api.revoke_tokens();

        let reloaded = Session::new(ApiClient::new(kv.clone(), api.clone()));
        assert!(!reloaded.hydrate().await);
        assert!(!reloaded.is_authenticated());
        assert!(!reloaded.is_loading());
        assert!(kv.is_empty());

        // Idempotent: nothing stored, nothing requested
        let sent = api.requests().len();
        assert!(!reloaded.hydrate().await);
        assert_eq!(reloaded.state(), SessionState::default());
        assert_eq!(api.requests().len(), sent);
    }

    #[tokio::test]
    async fn test_hydrate_when_server_unreachable_clears_storage() {
        let (session, api, kv) = setup();
        api.seed_user("shopper", "shopper@shop.test", "pw", "user");
        session.login("shopper@shop.test", "pw").await.unwrap();
        api.set_offline(true);

        let reloaded = Session::new(ApiClient::new(kv.clone(), api.clone()));
        assert!(!reloaded.hydrate().await);
        assert!(kv.is_empty());
    }

    #[tokio::test]
    async fn test_hydrate_discards_unpaired_token() {
        let (session, _api, kv) = setup();
        kv.set(TOKEN_KEY, "orphan");
        assert!(!session.hydrate().await);
        assert!(kv.is_empty());
    }

    #[tokio::test]
    async fn test_register_does_not_sign_in() {
        let (session, api, kv) = setup();
        let user = session
            .register("newbie", "newbie@shop.test", "secret1")
            .await
            .unwrap();
        assert_eq!(user.role, "user");
        assert!(!session.is_authenticated());
        assert!(kv.is_empty());

        let body = api.requests()[0].body.clone().unwrap();
        assert_eq!(body["role"], "user");

        let err = session
            .register("again", "newbie@shop.test", "secret1")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_auth_rejection_clears_once_and_redirects() {
        let api = FakeApi::new();
        let kv = CountingStore::default();
        let session = Session::new(ApiClient::new(kv.clone(), api.clone()));
        let redirects = Rc::new(Cell::new(0));
        let r = redirects.clone();
        session.install_expiry_handler(move || r.set(r.get() + 1));

        api.seed_user("boss", "boss@shop.test", "pw", "admin");
        session.login("boss@shop.test", "pw").await.unwrap();
        api.revoke_tokens();

        let input = ProductForm {
            name: "Widget".to_string(),
            price: "9.99".to_string(),
            quantity: "3".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap();
        let err = session.client().create_product(&input).await.unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(kv.token_removals.get(), 1);
        assert_eq!(redirects.get(), 1);
        assert!(!session.is_authenticated());
        assert!(kv.inner.is_empty());
    }

    #[tokio::test]
    async fn test_rejection_from_public_call_still_expires() {
        let (session, api, kv) = setup();
        let redirects = Rc::new(Cell::new(0));
        let r = redirects.clone();
        session.install_expiry_handler(move || r.set(r.get() + 1));

        api.seed_user("shopper", "shopper@shop.test", "pw", "user");
        session.login("shopper@shop.test", "pw").await.unwrap();
        api.revoke_tokens();

        // Background identity check, not a user action
        let _ = session.client().current_user().await;
        assert_eq!(redirects.get(), 1);
        assert!(kv.is_empty());

        // Other failures do not redirect
        let _ = session.client().get_product(99).await;
        assert_eq!(redirects.get(), 1);
    }

    #[tokio::test]
    async fn test_installing_handler_twice_replaces_it() {
        let (session, _api, _kv) = setup();
        session.install_expiry_handler(|| {});
        session.install_expiry_handler(|| {});
        assert_eq!(session.client().events().listener_count(), 1);
    }

    #[tokio::test]
    async fn test_handler_is_inert_after_session_dropped() {
        let (session, api, kv) = setup();
        let redirects = Rc::new(Cell::new(0));
        let r = redirects.clone();
        session.install_expiry_handler(move || r.set(r.get() + 1));
        let client = session.client().clone();
        drop(session);

        api.seed_user("shopper", "shopper@shop.test", "pw", "user");
        client.login("shopper@shop.test", "pw").await.unwrap();
        api.revoke_tokens();
        let _ = client.current_user().await;

        assert_eq!(redirects.get(), 0);
        assert!(!kv.is_empty());
    }
}
