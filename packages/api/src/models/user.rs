//! # User model for authenticated shoppers and administrators
//!
//! [`User`] is the identity record returned by `/auth/login`, `/auth/register`
//! and `/auth/me`. The same JSON is cached under the `user` storage key so a
//! reload can show who is signed in before `/auth/me` confirms the token.
//!
//! Authorisation on the client is a single check: [`User::is_admin`] compares the
//! role against [`ADMIN_ROLE`]. Any other role string is an ordinary customer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role string that unlocks the admin console.
pub const ADMIN_ROLE: &str = "admin";

/// User record as sent by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    /// Get display name, falling back to email if the username is blank.
    pub fn display_name(&self) -> &str {
        if self.username.trim().is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}
