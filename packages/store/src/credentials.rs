//! # Persisted credentials (the `token` / `user` pair)
//!
//! A logged-in storefront session survives reloads by keeping two entries in
//! client storage:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | Opaque bearer token returned by the login endpoint. |
//! | [`USER_KEY`] (`"user"`) | JSON serialisation of the user record returned alongside it. |
//!
//! [`CredentialStore`] is the only code that touches these keys. It writes and
//! clears them together so storage never holds a token without its user or the
//! other way round. A user entry that no longer deserialises (e.g. after a schema
//! change) reads as absent.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::kv::KeyValueStore;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialised user record.
pub const USER_KEY: &str = "user";

/// Typed access to the persisted bearer token and cached user record.
#[derive(Clone, Debug)]
pub struct CredentialStore<S> {
    store: S,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The persisted user record, if present and well-formed.
    pub fn user<U: DeserializeOwned>(&self) -> Option<U> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring malformed persisted user: {}", e);
                None
            }
        }
    }

    /// Both halves of a persisted session, or `None` unless both exist.
    pub fn load<U: DeserializeOwned>(&self) -> Option<(String, U)> {
        let token = self.token()?;
        let user = self.user()?;
        Some((token, user))
    }

    /// Persist a token and its user together.
    pub fn save<U: Serialize>(&self, token: &str, user: &U) -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(user)?;
        self.store.set(TOKEN_KEY, token);
        self.store.set(USER_KEY, &json);
        Ok(())
    }

    /// Remove both keys. Safe to call when nothing is stored.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}
