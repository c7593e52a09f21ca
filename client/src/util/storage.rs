//! Key-value storage for persisted UI preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme controller only needs `get`/`set` of short strings. Putting that
//! behind `KvStore` keeps the controller free of `web-sys` and lets tests use
//! an in-memory map.
//!
//! TRADE-OFFS
//! ==========
//! `localStorage` can be missing (SSR, privacy modes, sandboxed iframes).
//! `BrowserStorage` then keeps values in memory for the lifetime of the store,
//! so reads fall back to "absent" and the caller's default applies.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal persistent key-value interface.
pub trait KvStore {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str);
}

/// In-memory store used by tests and as the browser fallback.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// `localStorage`-backed store with an in-memory fallback.
#[derive(Debug, Default)]
pub struct BrowserStorage {
    #[cfg(feature = "hydrate")]
    local: Option<web_sys::Storage>,
    fallback: MemoryStore,
}

impl BrowserStorage {
    /// Open the window's `localStorage`, or the in-memory fallback when it is
    /// unavailable.
    #[must_use]
    pub fn open() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let local = match web_sys::window().map(|w| w.local_storage()) {
                Some(Ok(storage)) => storage,
                Some(Err(e)) => {
                    leptos::logging::warn!("localStorage unavailable: {}", crate::util::dom::js_error_text(&e));
                    None
                }
                None => None,
            };
            Self { local, fallback: MemoryStore::new() }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

impl KvStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            if let Some(local) = &self.local {
                match local.get_item(key) {
                    Ok(value) => return value,
                    Err(e) => leptos::logging::warn!("localStorage read of {key} failed: {}", crate::util::dom::js_error_text(&e)),
                }
            }
        }
        self.fallback.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(local) = &self.local {
                match local.set_item(key, value) {
                    Ok(()) => return,
                    Err(e) => leptos::logging::warn!("localStorage write of {key} failed: {}", crate::util::dom::js_error_text(&e)),
                }
            }
        }
        self.fallback.set_item(key, value);
    }
}
