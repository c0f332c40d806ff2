//! Shared API client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Native**: an in-process [`store::MemoryStore`] (nothing survives a restart)

use api::{ApiClient, ClientConfig, HttpTransport, Session};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

pub type AppClient = ApiClient<PlatformStore, HttpTransport>;
pub type AppSession = Session<PlatformStore, HttpTransport>;

fn platform_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryStore::new()
    }
}

/// Create a client talking to the API named in `config`.
pub fn make_client(config: &ClientConfig) -> AppClient {
    tracing::debug!("API base URL: {}", config.api.base_url);
    ApiClient::new(platform_store(), HttpTransport::new(config.api.base_url.clone()))
}

/// Create an un-hydrated session around a fresh client.
pub fn make_session(config: &ClientConfig) -> AppSession {
    Session::new(make_client(config))
}
