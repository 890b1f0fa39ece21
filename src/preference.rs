use thiserror::Error;

pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreferenceError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("couldn't read preference {key}")]
    Read { key: String },
    #[error("couldn't write preference {key}")]
    Write { key: String },
    #[error("malformed value for {key}: {value}")]
    Malformed { key: String, value: String },
}

/// Load/save capability for string preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Dark/light preference, stored as a JSON bool (under [`DARK_MODE_KEY`] by
/// default). Dark when nothing has been saved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DarkMode(pub bool);

impl Default for DarkMode {
    fn default() -> Self {
        Self(true)
    }
}

impl DarkMode {
    pub fn is_dark(self) -> bool {
        self.0
    }

    pub fn toggled(self) -> Self {
        Self(!self.0)
    }

    pub fn try_load<S: PreferenceStore + ?Sized>(
        store: &S,
        key: &str,
    ) -> Result<Self, PreferenceError> {
        let Some(raw) = store.load(key)? else {
            return Ok(Self::default());
        };
        serde_json::from_str::<bool>(&raw)
            .map(Self)
            .map_err(|_| PreferenceError::Malformed {
                key: key.to_string(),
                value: raw,
            })
    }

    /// Like [`DarkMode::try_load`], but any failure yields the default.
    pub fn load<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Self {
        Self::try_load(store, key).unwrap_or_else(|err| {
            log::warn!("{err}, using default theme");
            Self::default()
        })
    }

    pub fn save<S: PreferenceStore + ?Sized>(
        self,
        store: &S,
        key: &str,
    ) -> Result<(), PreferenceError> {
        let raw = serde_json::to_string(&self.0).map_err(|_| PreferenceError::Write {
            key: key.to_string(),
        })?;
        store.save(key, &raw)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::LocalStorage;

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::window;
    use web_sys::Storage;

    use super::{PreferenceError, PreferenceStore};

    /// `window.localStorage`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorage;

    fn storage() -> Result<Storage, PreferenceError> {
        window()
            .local_storage()
            .ok()
            .flatten()
            .ok_or(PreferenceError::Unavailable)
    }

    impl PreferenceStore for LocalStorage {
        fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
            storage()?
                .get_item(key)
                .map_err(|_| PreferenceError::Read {
                    key: key.to_string(),
                })
        }

        fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
            storage()?
                .set_item(key, value)
                .map_err(|_| PreferenceError::Write {
                    key: key.to_string(),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _: &str) -> Result<Option<String>, PreferenceError> {
            Err(PreferenceError::Unavailable)
        }

        fn save(&self, key: &str, _: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::Write {
                key: key.to_string(),
            })
        }
    }

    #[test]
    fn test_defaults_to_dark() {
        let store = MemoryStore::default();
        assert_eq!(DarkMode::try_load(&store, DARK_MODE_KEY), Ok(DarkMode(true)));
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::default();
        DarkMode(false).save(&store, DARK_MODE_KEY).unwrap();
        assert_eq!(
            store.values.borrow().get(DARK_MODE_KEY).map(String::as_str),
            Some("false")
        );
        assert_eq!(DarkMode::load(&store, DARK_MODE_KEY), DarkMode(false));
        assert_eq!(DarkMode::load(&store, DARK_MODE_KEY).toggled(), DarkMode(true));
    }

    #[test]
    fn test_malformed_value_is_reported() {
        let store = MemoryStore::default();
        store.save(DARK_MODE_KEY, "maybe").unwrap();
        assert_eq!(
            DarkMode::try_load(&store, DARK_MODE_KEY),
            Err(PreferenceError::Malformed {
                key: DARK_MODE_KEY.to_string(),
                value: "maybe".to_string(),
            })
        );
        assert_eq!(DarkMode::load(&store, DARK_MODE_KEY), DarkMode::default());
    }

    #[test]
    fn test_keys_are_independent() {
        let store = MemoryStore::default();
        DarkMode(false).save(&store, "theme").unwrap();
        assert_eq!(DarkMode::load(&store, "theme"), DarkMode(false));
        assert_eq!(DarkMode::load(&store, DARK_MODE_KEY), DarkMode(true));
    }

    #[test]
    fn test_unavailable_store_falls_back() {
        assert_eq!(DarkMode::load(&BrokenStore, DARK_MODE_KEY), DarkMode(true));
        assert!(DarkMode(false).save(&BrokenStore, DARK_MODE_KEY).is_err());
    }
}
