//! Typed settings persistence.
//!
//! Serializes settings as JSON strings into eframe's persistent storage.
//! Favorites use this (the original kept them in browser local storage);
//! any serializable value works.

use serde::{Deserialize, Serialize};

/// Coordinates typed settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to the type's default when absent or
    /// unreadable.
    ///
    /// ```ignore
    /// let favorites: Vec<Movie> = SettingsCoordinator::load_setting(storage, "favorites");
    /// ```
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Attempts to load a setting, returning None when absent or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json = storage?.get_string(key)?;
        serde_json::from_str(&json).ok()
    }

    /// Serializes and saves a setting.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json) = serde_json::to_string(value) {
            storage.set_string(key, json);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self { data: HashMap::new() }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_setting(&mut storage, "ids", &vec![3u64, 5, 8]);

        let loaded: Vec<u64> = SettingsCoordinator::load_setting(Some(&storage), "ids");
        assert_eq!(loaded, vec![3, 5, 8]);
    }

    #[test]
    fn test_missing_key_yields_default() {
        let storage = MockStorage::new();
        let loaded: Vec<u64> = SettingsCoordinator::load_setting(Some(&storage), "missing");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_invalid_json_yields_none() {
        let mut storage = MockStorage::new();
        storage.set_string("bad", "{not json".to_string());

        let loaded: Option<Vec<u64>> = SettingsCoordinator::try_load_setting(Some(&storage), "bad");
        assert!(loaded.is_none());
    }
}
