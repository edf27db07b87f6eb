// SPDX-License-Identifier: Apache-2.0

//! Configuration key newtype and the canonical key grammar.
//!
//! Keys are flat strings built from segments joined by `.` for record fields
//! and `[i]` for zero-based sequence indices, e.g. `a.b[2].c`. The same
//! grammar is used on both sides of the crate: document flattening composes
//! keys with [`ConfigKey::child`] and [`ConfigKey::index`], and the binder
//! recomputes identical keys when decoding. Any source that ingests
//! structured data must produce keys through these operations or lookups
//! will not resolve.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A type-safe wrapper for configuration keys.
///
/// `ConfigKey` wraps a `String` to prevent accidental mixing of configuration
/// keys with other string values, and carries the key-building grammar as
/// methods so both the flatten and bind sides compose keys identically.
///
/// # Examples
///
/// ```
/// use layercfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::root().child("servers").index(0).child("host");
/// assert_eq!(key.as_str(), "servers[0].host");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the empty root key.
    ///
    /// The root key is the starting prefix for flattening a whole document
    /// and for binding a top-level record whose fields carry full keys.
    pub fn root() -> Self {
        ConfigKey(String::new())
    }

    /// Appends a record-field segment, joining with `.`.
    ///
    /// A root (empty) key yields the bare segment with no leading dot.
    ///
    /// # Examples
    ///
    /// ```
    /// use layercfg::domain::config_key::ConfigKey;
    ///
    /// assert_eq!(ConfigKey::root().child("a").as_str(), "a");
    /// assert_eq!(ConfigKey::from("a").child("b").as_str(), "a.b");
    /// ```
    pub fn child(&self, segment: &str) -> Self {
        if self.0.is_empty() {
            ConfigKey(segment.to_string())
        } else {
            ConfigKey(format!("{}.{}", self.0, segment))
        }
    }

    /// Appends a zero-based sequence index as `[i]`.
    ///
    /// The bracket is appended directly to the preceding segment, with no
    /// separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use layercfg::domain::config_key::ConfigKey;
    ///
    /// assert_eq!(ConfigKey::from("a.b").index(2).as_str(), "a.b[2]");
    /// ```
    pub fn index(&self, i: usize) -> Self {
        ConfigKey(format!("{}[{}]", self.0, i))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for ConfigKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_key_new() {
        let key = ConfigKey::new("test.key".to_string());
        assert_eq!(key.as_str(), "test.key");
    }

    #[test]
    fn test_root_is_empty() {
        assert_eq!(ConfigKey::root().as_str(), "");
    }

    #[test]
    fn test_child_from_root() {
        let key = ConfigKey::root().child("app");
        assert_eq!(key.as_str(), "app");
    }

    #[test]
    fn test_child_joins_with_dot() {
        let key = ConfigKey::from("database").child("host");
        assert_eq!(key.as_str(), "database.host");
    }

    #[test]
    fn test_index_appends_bracket() {
        let key = ConfigKey::from("servers").index(0);
        assert_eq!(key.as_str(), "servers[0]");
    }

    #[test]
    fn test_index_on_root() {
        // A top-level sequence indexes directly off the empty prefix.
        let key = ConfigKey::root().index(3);
        assert_eq!(key.as_str(), "[3]");
    }

    #[test]
    fn test_grammar_composition() {
        let key = ConfigKey::root().child("a").child("b").index(2).child("c");
        assert_eq!(key.as_str(), "a.b[2].c");
    }

    #[test]
    fn test_config_key_display() {
        let key = ConfigKey::from("test.key");
        assert_eq!(format!("{}", key), "test.key");
    }

    #[test]
    fn test_config_key_equality() {
        let key1 = ConfigKey::from("test.key");
        let key2 = ConfigKey::from("test.key");
        let key3 = ConfigKey::from("other.key");

        assert_eq!(key1, key2);
        assert_ne!(key1, key3);
    }

    #[test]
    fn test_config_key_into_string() {
        let key = ConfigKey::from("test.key");
        assert_eq!(key.into_string(), "test.key");
    }

    #[test]
    fn test_config_key_hash() {
        let key1 = ConfigKey::from("test.key");
        let key2 = ConfigKey::from("test.key");

        let mut map = HashMap::new();
        map.insert(key1, "value1");
        assert_eq!(map.get(&key2), Some(&"value1"));
    }

    #[test]
    fn test_config_key_as_ref() {
        let key = ConfigKey::from("test.key");
        let s: &str = key.as_ref();
        assert_eq!(s, "test.key");
    }
}
