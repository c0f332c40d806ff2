pub mod credentials;
pub mod kv;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use credentials::{CredentialStore, TOKEN_KEY, USER_KEY};
pub use kv::KeyValueStore;
