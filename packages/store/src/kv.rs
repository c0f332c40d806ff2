//! # Key/value storage: the client's persistent scratch space
//!
//! [`KeyValueStore`] abstracts over the string-keyed, string-valued storage a
//! browser exposes as `window.localStorage`. Everything the storefront keeps
//! between page loads (the bearer token and the cached user record) goes
//! through this trait, so the same session logic runs against the browser
//! ([`crate::LocalStorage`]) or an in-memory map ([`crate::MemoryStore`]).
//!
//! ## Contract
//!
//! | Method | Behaviour |
//! |--------|-----------|
//! | [`get`](KeyValueStore::get) | Returns the stored value, or `None` if absent or unreadable. |
//! | [`set`](KeyValueStore::set) | Inserts or overwrites. Backend failures are logged and dropped. |
//! | [`remove`](KeyValueStore::remove) | Deletes the key. Removing a missing key is a no-op. |
//!
//! The methods are synchronous because `localStorage` is. A store that cannot be
//! read degrades to "nothing persisted" rather than failing the caller.

/// String key/value storage shared by the session and the API client.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
