//! Process-lifetime cache of loaded fragments.

use crate::error::ResolveError;
use iconforge_traits::SharedFragment;
use std::collections::HashMap;
use std::sync::RwLock;

/// Maps lookup names to fragments; entries are never evicted.
///
/// Lookups take the shared lock. A miss takes the exclusive lock, checks
/// again, and runs the loader while still holding it, so each name is
/// loaded at most once no matter how many threads miss at the same time.
/// Failed loads are not cached.
#[derive(Debug, Default)]
pub struct FragmentCache {
    entries: RwLock<HashMap<String, SharedFragment>>,
}

impl FragmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached fragment, if any.
    pub fn get(&self, name: &str) -> Result<Option<SharedFragment>, ResolveError> {
        let entries = self.entries.read().map_err(|_| ResolveError::CachePoisoned)?;
        Ok(entries.get(name).cloned())
    }

    /// Returns the cached fragment or loads, stores and returns it.
    pub fn get_or_load<F>(&self, name: &str, load: F) -> Result<SharedFragment, ResolveError>
    where
        F: FnOnce() -> Result<SharedFragment, ResolveError>,
    {
        if let Some(fragment) = self.get(name)? {
            return Ok(fragment);
        }

        let mut entries = self.entries.write().map_err(|_| ResolveError::CachePoisoned)?;
        // Another thread may have filled it while we waited for the write lock.
        if let Some(fragment) = entries.get(name) {
            return Ok(fragment.clone());
        }

        let fragment = load()?;
        entries.insert(name.to_string(), fragment.clone());
        Ok(fragment)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .read()
            .map(|e| e.contains_key(name))
            .unwrap_or(false)
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_load_caches_success() {
        let cache = FragmentCache::new();
        let first = cache.get_or_load("x", || Ok("<path/>".into())).unwrap();
        assert_eq!(&*first, "<path/>");

        let second = cache
            .get_or_load("x", || panic!("loader must not run for a cached name"))
            .unwrap();
        assert_eq!(&*second, "<path/>");
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("x"));
    }

    #[test]
    fn test_get_or_load_does_not_cache_failure() {
        let cache = FragmentCache::new();
        let err = cache
            .get_or_load("missing", || Err(ResolveError::NotFound("missing".to_string())))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(cache.is_empty());
        assert_eq!(cache.get("missing").unwrap(), None);
    }
}
