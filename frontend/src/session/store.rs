use log::{debug, error, info, warn};
use web_sys::{window, Storage};

use crate::config;
use crate::session::record::SessionRecord;

/// String-keyed persisted storage the session widgets read from.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. An unavailable storage behaves as an empty one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<Storage> {
        let storage = window().and_then(|w| w.local_storage().ok()).flatten();
        if storage.is_none() {
            debug!("localStorage unavailable");
        }
        storage
    }
}

/// Log a rejected storage write (quota, private mode). Returns whether it went through.
fn report_failure<E: std::fmt::Debug>(action: &str, key: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to {} '{}' in localStorage: {:?}", action, key, e);
            false
        }
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            report_failure("write", key, storage.set_item(key, value));
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            report_failure("remove", key, storage.remove_item(key));
        }
    }
}

/// Load the cached user. A malformed entry is logged and reported as signed out;
/// the entry itself is left in place.
pub fn read_session(store: &dyn SessionStore) -> Option<SessionRecord> {
    let raw = store.get(config::SESSION_KEY)?;
    match SessionRecord::parse(&raw) {
        Ok(record) => Some(record),
        Err(e) => {
            error!("Ignoring stored session under '{}': {}", config::SESSION_KEY, e);
            None
        }
    }
}

/// Whether a `storage` event for `key` can change the cached user.
/// A `None` key means the whole storage was cleared.
pub fn affects_session(key: Option<&str>) -> bool {
    key.map_or(true, |k| k == config::SESSION_KEY)
}

/// Forget the token and the cached user. Navigation is left to the caller.
pub fn sign_out(store: &dyn SessionStore) {
    store.remove(config::TOKEN_KEY);
    store.remove(config::SESSION_KEY);
    info!("Signed out");
}

#[cfg(test)]
pub mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::SessionStore;

    #[derive(Default)]
    pub struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        pub fn with(entries: &[(&str, &str)]) -> Self {
            let store = Self::default();
            for (key, value) in entries {
                store.set(key, value);
            }
            store
        }

        pub fn len(&self) -> usize {
            self.entries.borrow().len()
        }
    }

    impl SessionStore for MemoryStore {
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
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn empty_store_has_no_session() {
        let store = MemoryStore::default();
        assert_eq!(read_session(&store), None);
    }

    #[test]
    fn reads_well_formed_session() {
        let store = MemoryStore::with(&[(
            config::SESSION_KEY,
            r#"{"name":"Marta Ruiz","avatarUrl":"/u/marta.png"}"#,
        )]);
        let record = read_session(&store).expect("session present");
        assert_eq!(record.display_name(), "Marta");
        assert_eq!(record.avatar_src(), "/u/marta.png");
    }

    #[test]
    fn token_alone_is_not_a_session() {
        let store = MemoryStore::with(&[(config::TOKEN_KEY, "abc.def.ghi")]);
        assert_eq!(read_session(&store), None);
    }

    #[test]
    fn malformed_session_reads_as_absent_and_is_kept() {
        let store = MemoryStore::with(&[(config::SESSION_KEY, "{not json")]);
        assert_eq!(read_session(&store), None);
        assert_eq!(store.get(config::SESSION_KEY).as_deref(), Some("{not json"));
    }

    #[test]
    fn sign_out_removes_token_and_session_only() {
        let store = MemoryStore::with(&[
            (config::TOKEN_KEY, "abc.def.ghi"),
            (config::SESSION_KEY, r#"{"name":"Marta"}"#),
            ("tema", "oscuro"),
        ]);
        sign_out(&store);
        assert_eq!(store.get(config::TOKEN_KEY), None);
        assert_eq!(store.get(config::SESSION_KEY), None);
        assert_eq!(store.get("tema").as_deref(), Some("oscuro"));
        assert_eq!(store.len(), 1);
        assert_eq!(read_session(&store), None);
    }

    #[test]
    fn rejected_storage_calls_are_reported() {
        assert!(report_failure::<&str>("write", config::SESSION_KEY, Ok(())));
        assert!(!report_failure("write", config::SESSION_KEY, Err("QuotaExceededError")));
        assert!(!report_failure("remove", config::TOKEN_KEY, Err("SecurityError")));
    }

    #[test]
    fn only_session_key_or_clear_is_relevant() {
        assert!(affects_session(Some(config::SESSION_KEY)));
        assert!(affects_session(None));
        assert!(!affects_session(Some(config::TOKEN_KEY)));
        assert!(!affects_session(Some("tema")));
    }

    #[test]
    fn null_avatar_still_reads_as_signed_in() {
        let store = MemoryStore::with(&[(config::SESSION_KEY, r#"{"name":"Ana Ruiz","avatarUrl":null}"#)]);
        let record = read_session(&store).expect("session present");
        assert_eq!(record.avatar_src(), config::DEFAULT_AVATAR);
    }

    #[test]
    fn spanish_blob_with_both_avatar_keys_reads_as_signed_in() {
        let store = MemoryStore::with(&[(
            config::SESSION_KEY,
            r#"{"nombre":"Ana Ruiz","foto":"/a.png","avatar":"/b.png"}"#,
        )]);
        let record = read_session(&store).expect("session present");
        assert_eq!(record.display_name(), "Ana");
        assert_eq!(record.avatar_src(), "/a.png");
    }

    #[test]
    fn sign_out_on_empty_store_is_harmless() {
        let store = MemoryStore::default();
        sign_out(&store);
        assert_eq!(store.len(), 0);
    }
}
