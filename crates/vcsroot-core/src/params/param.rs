use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use super::store::{ParameterStore, is_secure_key};
use super::value::ParamValue;
use crate::error::Result;

/// Typed descriptor for one parameter of a [`ParameterStore`].
///
/// A `Param` only carries the store key; the codec comes from `T`. Entities
/// declare their fields as `const` descriptors and read or write through
/// them, so every field maps to exactly one key.
///
/// # Example
///
/// ```
/// use vcsroot_core::{Param, ParameterStore};
///
/// const USE_MIRRORS: Param<bool> = Param::new("useAlternates");
///
/// let mut store = ParameterStore::new();
/// USE_MIRRORS.write(&mut store, true);
///
/// assert_eq!(store.get("useAlternates"), Some("true"));
/// assert!(USE_MIRRORS.read_flag(&store));
/// ```
pub struct Param<T> {
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Param<T> {
    /// Creates a descriptor bound to `key`.
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    /// Returns the store key.
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Returns true if the parameter is present in `store`.
    pub fn is_set(&self, store: &ParameterStore) -> bool {
        store.contains_key(self.key)
    }

    /// Removes the parameter from `store`.
    pub fn clear(&self, store: &mut ParameterStore) {
        if store.remove(self.key).is_some() {
            trace!(key = self.key, "parameter cleared");
        }
    }
}

impl<T: ParamValue> Param<T> {
    /// Decodes the stored value, or `None` if the key is absent.
    pub fn read(&self, store: &ParameterStore) -> Result<Option<T>> {
        store
            .get(self.key)
            .map(|raw| T::decode(self.key, raw))
            .transpose()
    }

    /// Decodes the stored value, falling back to `default` when absent.
    pub fn read_or(&self, store: &ParameterStore, default: T) -> Result<T> {
        Ok(self.read(store)?.unwrap_or(default))
    }

    /// Encodes `value` into `store`.
    ///
    /// Values that encode to nothing (the empty string) remove the key.
    pub fn write(&self, store: &mut ParameterStore, value: T) {
        match value.encode() {
            Some(encoded) => {
                if is_secure_key(self.key) {
                    trace!(key = self.key, "secure parameter set");
                } else {
                    trace!(key = self.key, value = %encoded, "parameter set");
                }
                store.insert(self.key, encoded);
            },
            None => self.clear(store),
        }
    }
}

impl Param<String> {
    /// Borrows the stored string.
    pub fn read_str<'a>(&self, store: &'a ParameterStore) -> Option<&'a str> {
        store.get(self.key)
    }
}

impl Param<bool> {
    /// Reads the flag; an absent key reads as `false`.
    pub fn read_flag(&self, store: &ParameterStore) -> bool {
        store
            .get(self.key)
            .is_some_and(|raw| raw.eq_ignore_ascii_case("true"))
    }
}

// Manual impls: derives would require `T: Clone` etc.
impl<T> Clone for Param<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Param<T> {}

impl<T> fmt::Debug for Param<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Param").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamEnum;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Style {
        Name,
        Email,
    }

    impl ParamEnum for Style {
        const VARIANTS: &'static [Self] = &[Style::Name, Style::Email];

        fn name(&self) -> &'static str {
            match self {
                Style::Name => "NAME",
                Style::Email => "EMAIL",
            }
        }
    }

    const BRANCH: Param<String> = Param::new("branch");
    const TAGS: Param<bool> = Param::new("reportTagRevisions");
    const STYLE: Param<Style> = Param::new("usernameStyle");
    const PASSWORD: Param<String> = Param::new("secure:password");

    #[test]
    fn test_string_round_trip() {
        let mut store = ParameterStore::new();
        assert_eq!(BRANCH.read_str(&store), None);

        BRANCH.write(&mut store, "refs/heads/main".to_string());

        assert_eq!(BRANCH.read_str(&store), Some("refs/heads/main"));
        assert_eq!(
            BRANCH.read(&store).unwrap().as_deref(),
            Some("refs/heads/main")
        );
    }

    #[test]
    fn test_empty_string_removes_key() {
        let mut store = ParameterStore::new();
        BRANCH.write(&mut store, "main".to_string());
        BRANCH.write(&mut store, String::new());

        assert!(!BRANCH.is_set(&store));
        assert!(store.is_empty());
    }

    #[test]
    fn test_flag_defaults_to_false() {
        let mut store = ParameterStore::new();
        assert!(!TAGS.read_flag(&store));
        assert_eq!(TAGS.read(&store).unwrap(), None);

        TAGS.write(&mut store, true);
        assert_eq!(store.get("reportTagRevisions"), Some("true"));
        assert!(TAGS.read_flag(&store));

        TAGS.write(&mut store, false);
        assert_eq!(store.get("reportTagRevisions"), Some("false"));
        assert!(!TAGS.read_flag(&store));
    }

    #[test]
    fn test_enum_read_write() {
        let mut store = ParameterStore::new();
        assert_eq!(STYLE.read(&store).unwrap(), None);
        assert_eq!(STYLE.read_or(&store, Style::Name).unwrap(), Style::Name);

        STYLE.write(&mut store, Style::Email);
        assert_eq!(store.get("usernameStyle"), Some("EMAIL"));
        assert_eq!(STYLE.read(&store).unwrap(), Some(Style::Email));
    }

    #[test]
    fn test_enum_unknown_value_fails() {
        let mut store = ParameterStore::new();
        store.insert("usernameStyle", "NICKNAME");

        let err = STYLE.read(&store).unwrap_err();
        assert!(err.is_unknown_variant());
        assert!(STYLE.read_or(&store, Style::Name).is_err());
    }

    #[test]
    fn test_secure_key_is_stored_verbatim() {
        let mut store = ParameterStore::new();
        PASSWORD.write(&mut store, "s3cret".to_string());

        assert_eq!(store.get("secure:password"), Some("s3cret"));
        assert_eq!(PASSWORD.key(), "secure:password");
    }

    #[test]
    fn test_clear() {
        let mut store = ParameterStore::new();
        STYLE.write(&mut store, Style::Name);
        STYLE.clear(&mut store);

        assert!(!STYLE.is_set(&store));
        // clearing twice is a no-op
        STYLE.clear(&mut store);
    }
}
