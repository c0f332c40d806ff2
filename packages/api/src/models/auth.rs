//! Request and response bodies for the `/auth` endpoints.

use serde::{Deserialize, Serialize};

use super::User;

/// Role assigned to self-registered accounts.
pub const DEFAULT_ROLE: &str = "user";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl RegisterRequest {
    /// A registration for an ordinary customer account.
    pub fn customer(username: String, email: String, password: String) -> Self {
        Self {
            username,
            email,
            password,
            role: DEFAULT_ROLE.to_string(),
        }
    }
}

/// Body returned by both login and register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}
