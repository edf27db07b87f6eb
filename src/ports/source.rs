// SPDX-License-Identifier: Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigSource` trait, the port every concrete
//! configuration source (in-memory map, YAML file, environment variables,
//! command-line arguments, remote documents) implements.

use crate::domain::{ConfigKey, ConfigValue};

/// A trait for configuration sources.
///
/// A source is a named, read-only provider of raw string values for flat
/// keys in the canonical grammar. Concrete sources acquire their backing
/// data once at construction (read the file, snapshot the environment,
/// parse the arguments) and are immutable afterwards; lookups are cheap
/// in-memory reads.
///
/// Structured data must be flattened with the key grammar from
/// [`crate::domain::ConfigKey`] (dot-joined segments, `[i]` indices) to be
/// key-compatible with the binder; see [`crate::ports::ConfigParser`].
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`. Because sources never mutate
/// after construction, concurrent reads are safe without locking.
///
/// # Examples
///
/// ```rust
/// use layercfg::ports::ConfigSource;
/// use layercfg::domain::{ConfigKey, ConfigValue};
///
/// struct FixedSource;
///
/// impl ConfigSource for FixedSource {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
///         (key.as_str() == "app.name").then(|| ConfigValue::from("demo"))
///     }
/// }
///
/// let source = FixedSource;
/// assert!(source.get_str("app.name").is_some());
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this configuration source.
    ///
    /// Used for logging and error messages; should be a short identifier
    /// like "env", "yaml-file", or "cli".
    fn name(&self) -> &str;

    /// Retrieves the raw value for the given key.
    ///
    /// Returns `None` when the key does not exist in this source. An empty
    /// string value is treated as absent by the registry during layered
    /// resolution; there is no way to represent a present-but-empty value.
    fn get(&self, key: &ConfigKey) -> Option<ConfigValue>;

    /// Retrieves the raw value for a key given as a string slice.
    ///
    /// Convenience equivalent to `get(&ConfigKey::from(key))`.
    fn get_str(&self, key: &str) -> Option<ConfigValue> {
        self.get(&ConfigKey::from(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestSource {
        name: String,
    }

    impl ConfigSource for TestSource {
        fn name(&self) -> &str {
            &self.name
        }

        fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
            (key.as_str() == "present").then(|| ConfigValue::from("value"))
        }
    }

    #[test]
    fn test_config_source_name() {
        let source = TestSource {
            name: "test-source".to_string(),
        };
        assert_eq!(source.name(), "test-source");
    }

    #[test]
    fn test_config_source_get() {
        let source = TestSource {
            name: "test-source".to_string(),
        };
        assert!(source.get(&ConfigKey::from("present")).is_some());
        assert!(source.get(&ConfigKey::from("absent")).is_none());
    }

    #[test]
    fn test_config_source_get_str() {
        let source = TestSource {
            name: "test-source".to_string(),
        };
        assert_eq!(source.get_str("present").unwrap().as_str(), "value");
    }

    #[test]
    fn test_config_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<Box<dyn ConfigSource>>();
    }
}
