//! # Client configuration (`storefront.toml`)
//!
//! The web binary embeds a small TOML file that says where the REST API lives
//! and what the shop is called.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//!
//! [ui]
//! store_name = "JulesShop"
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to
//! [`ClientConfig::default`].

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Absolute URL that every request path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_store_name")]
    pub store_name: String,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_store_name() -> String {
    "JulesShop".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            store_name: default_store_name(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point at another API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "storefront.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
