use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use gloo::storage::{SessionStorage, Storage};

use super::config::ADMIN_ID_KEY;
use super::logging::Logger;

/// Key/value session state the dashboard reads credentials and cache
/// snapshots from. Values are raw strings, exactly as stored.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.sessionStorage`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        SessionStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if SessionStorage::raw().set_item(key, value).is_err() {
            Logger::warn_with_component("session", &format!("Failed to write session key '{}'", key));
        }
    }

    fn remove(&self, key: &str) {
        if SessionStorage::raw().remove_item(key).is_err() {
            Logger::warn_with_component("session", &format!("Failed to remove session key '{}'", key));
        }
    }
}

/// In-process store, used off-browser and in tests
#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Shared handle to the injected session store.
///
/// Two handles are equal when they point at the same store, which keeps
/// component props comparable.
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionStore>);

impl SessionHandle {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn browser() -> Self {
        Self::new(BrowserSessionStore)
    }

    /// Browser session storage when the page may use it, otherwise an
    /// in-memory store that lives as long as the page
    pub fn detect() -> Self {
        let available = web_sys::window()
            .and_then(|window| window.session_storage().ok().flatten())
            .is_some();

        if available {
            Self::browser()
        } else {
            Logger::warn_with_component("session", "sessionStorage unavailable, falling back to memory");
            Self::new(MemorySessionStore::new())
        }
    }

    /// Privileged-session identifier; blank values count as absent
    pub fn admin_id(&self) -> Option<String> {
        self.0
            .get(ADMIN_ID_KEY)
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.0.as_ref()
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionHandle").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_id_present() {
        let session = SessionHandle::new(MemorySessionStore::new().with_entry(ADMIN_ID_KEY, "admin-42"));
        assert_eq!(session.admin_id(), Some("admin-42".to_string()));
    }

    #[test]
    fn test_admin_id_missing_or_blank() {
        let empty = SessionHandle::new(MemorySessionStore::new());
        assert_eq!(empty.admin_id(), None);

        let blank = SessionHandle::new(MemorySessionStore::new().with_entry(ADMIN_ID_KEY, "   "));
        assert_eq!(blank.admin_id(), None);
    }

    #[test]
    fn test_memory_store_shares_entries_between_clones() {
        let store = MemorySessionStore::new();
        let session = SessionHandle::new(store.clone());

        session.store().set("k", "v");
        assert!(store.contains("k"));

        store.remove("k");
        assert_eq!(session.store().get("k"), None);
    }

    #[test]
    fn test_handle_equality_is_identity() {
        let session = SessionHandle::new(MemorySessionStore::new());
        let same = session.clone();
        let other = SessionHandle::new(MemorySessionStore::new());

        assert_eq!(session, same);
        assert_ne!(session, other);
    }
}
