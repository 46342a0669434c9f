//! Knowledge Store - a flat key→fact map owned by one brain.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Facts stored under case-normalized keys.
///
/// Keys are lower-cased on every read and write. Writing an existing key
/// replaces the old fact outright; there is no merging or history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeStore {
    facts: HashMap<String, String>,
}

impl KnowledgeStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a key the way the store compares keys.
    pub fn normalize_key(key: &str) -> String {
        key.to_lowercase()
    }

    /// Look up the fact stored under a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.facts.get(&Self::normalize_key(key)).map(String::as_str)
    }

    /// Store a fact, replacing any previous fact for the same key.
    ///
    /// Returns the replaced fact, if any.
    pub fn set(&mut self, key: &str, fact: impl Into<String>) -> Option<String> {
        self.facts.insert(Self::normalize_key(key), fact.into())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.facts.contains_key(&Self::normalize_key(key))
    }

    /// Get the total number of facts.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Iterate over all `(key, fact)` pairs. Order is not guaranteed.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.facts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All `(key, fact)` pairs sorted by key.
    pub fn sorted_entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<_> = self
            .facts
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort();
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut store = KnowledgeStore::new();
        assert!(store.is_empty());

        store.set("osmon", "bu moviy");

        assert_eq!(store.get("osmon"), Some("bu moviy"));
        assert_eq!(store.len(), 1);
        assert!(store.get("yer").is_none());
    }

    #[test]
    fn test_keys_are_case_normalized() {
        let mut store = KnowledgeStore::new();
        store.set("Toshkent", "poytaxt");

        assert_eq!(store.get("toshkent"), Some("poytaxt"));
        assert_eq!(store.get("TOSHKENT"), Some("poytaxt"));
        assert!(store.contains("ToShKeNt"));
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = KnowledgeStore::new();

        assert_eq!(store.set("olma", "meva"), None);
        let previous = store.set("OLMA", "qizil meva");

        assert_eq!(previous.as_deref(), Some("meva"));
        assert_eq!(store.get("olma"), Some("qizil meva"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sorted_entries() {
        let mut store = KnowledgeStore::new();
        store.set("yer", "sayyora");
        store.set("oy", "yo'ldosh");

        let entries = store.sorted_entries();
        assert_eq!(entries[0].0, "oy");
        assert_eq!(entries[1].0, "yer");
        assert_eq!(store.iter().count(), 2);
    }
}
