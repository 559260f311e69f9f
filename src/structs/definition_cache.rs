use std::collections::HashMap;

/// Name-keyed cache of definitions fetched from the API.
///
/// Entries never expire on their own; call [`DefinitionCache::clear`] to
/// force the next lookup back to the network.
#[derive(Debug, Clone)]
pub struct DefinitionCache<T> {
    entries: HashMap<String, T>,
}

impl<T: Clone> DefinitionCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<T> {
        self.entries.get(name).cloned()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: T) {
        self.entries.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("🧹 Clearing {} cached definitions", self.entries.len());
        }
        self.entries.clear();
    }
}

impl<T: Clone> Default for DefinitionCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_drops_every_entry() {
        let mut cache = DefinitionCache::new();
        cache.insert("security-audit", 1u8);
        cache.insert("deep-audit", 2u8);
        assert_eq!(cache.get("deep-audit"), Some(2));

        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.contains("security-audit"));
    }
}
