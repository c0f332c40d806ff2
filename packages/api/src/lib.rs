//! # API crate: the storefront's access layer and session store
//!
//! Everything the storefront knows about the remote REST API lives here,
//! independent of any UI framework so it can be tested natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one method per endpoint, bearer attachment, failure notices, 401 signalling |
//! | [`session`] | [`Session`]: current user, hydration, login/register/logout, expiry handling |
//! | [`transport`] | [`Transport`] seam and the `reqwest`-backed [`HttpTransport`] |
//! | [`events`] | [`ApiEvent`], [`Notice`] and the listener registry [`EventHub`] |
//! | [`models`] | Wire types (`User`, `Product`, auth bodies), form validation, catalogue helpers |
//! | [`config`] | [`ClientConfig`] loaded from `storefront.toml` |
//! | [`error`] | [`ApiError`] and [`TransportError`] |
//!
//! Dependency order: `session` → `client` → `transport`. The client never
//! reaches back into the session; it only emits events.

pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod session;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, TransportError};
pub use events::{ApiEvent, EventHub, Notice, NoticeLevel, Subscription};
pub use models::{Product, ProductForm, ProductInput, User, ValidationError};
pub use session::{Session, SessionState};
pub use transport::{HttpTransport, Transport};
