use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Key prefix marking a parameter for secret-storage treatment by the host system.
pub const SECURE_PREFIX: &str = "secure:";

/// Returns true if `key` carries the [`SECURE_PREFIX`].
pub fn is_secure_key(key: &str) -> bool {
    key.starts_with(SECURE_PREFIX)
}

/// Ordered string-to-string map holding every parameter of a VCS root.
///
/// Iteration follows insertion order so rendered documents come out in the
/// order fields were assigned. Lookup does not depend on order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterStore {
    inner: IndexMap<String, String>,
}

impl ParameterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    /// Returns the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Inserts or replaces the value under `key`, returning the previous value.
    ///
    /// Replacing keeps the key at its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        // shift_remove keeps the remaining entries in insertion order
        self.inner.shift_remove(key)
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the store holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Copies every entry of `overlay` into this store, overwriting existing keys.
    ///
    /// Keys only present here are preserved.
    pub fn overlay(&mut self, overlay: &ParameterStore) {
        for (key, value) in &overlay.inner {
            self.inner.insert(key.clone(), value.clone());
        }
    }

    /// Returns a copy without the parameters marked as secure.
    pub fn public_params(&self) -> ParameterStore {
        self.inner
            .iter()
            .filter(|(k, _)| !is_secure_key(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Iterates over the keys marked as secure.
    pub fn secure_keys(&self) -> impl Iterator<Item = &str> {
        self.keys().filter(|k| is_secure_key(k))
    }
}

impl From<IndexMap<String, String>> for ParameterStore {
    fn from(inner: IndexMap<String, String>) -> Self {
        Self { inner }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ParameterStore {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
