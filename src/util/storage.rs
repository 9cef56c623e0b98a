//! Flat string key-value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Preferences persist as independent string entries in `localStorage`.
//! `BrowserStorage` is the thin hydrate-only adapter. Outside the browser, or
//! when `localStorage` is blocked, it reads nothing and drops writes, so the
//! page still renders the defaults. `MemoryStore` backs the tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Best-effort string storage. Writes never fail from the caller's view.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: RefCell::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.to_owned(), v.to_owned()))
                    .collect(),
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// `window.localStorage`, when the browser provides one.
#[derive(Debug, Default)]
pub struct BrowserStorage {
    #[cfg(feature = "hydrate")]
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self {
                inner: web_sys::window().and_then(|w| {
                    w.local_storage().unwrap_or_else(|err| {
                        log::warn!("localStorage blocked: {err:?}");
                        None
                    })
                }),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {}
        }
    }

    /// Whether reads and writes reach a real store.
    pub fn is_available(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.inner.is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.inner.as_ref()?.get_item(key).unwrap_or_else(|err| {
                log::warn!("localStorage read failed for {key}: {err:?}");
                None
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = &self.inner
                && storage.set_item(key, value).is_err()
            {
                log::warn!("localStorage write failed for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {}
    }
}
