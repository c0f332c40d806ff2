//! This crate contains all shared UI for the storefront.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, make_session, AppClient, AppSession, PlatformStore};

pub const STOREFRONT_CSS: Asset = asset!("/assets/styling/storefront.css");

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_api, use_auth, use_auth_handle, AuthHandle, AuthProvider, AuthState, LogoutButton};

mod guard;
pub use guard::RequireRole;

pub mod notifications;
pub use notifications::{dismiss, notify, use_notifications, Notifications, Toast};

mod toaster;
pub use toaster::Toaster;

mod product_card;
pub use product_card::ProductCard;

mod feedback;
pub use feedback::{EmptyState, LoadError, Loading};
