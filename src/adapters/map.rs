// SPDX-License-Identifier: Apache-2.0

//! In-memory map configuration source adapter.
//!
//! This adapter wraps a flat key-value map under a caller-chosen name. It
//! is the building block for sources whose data is acquired elsewhere: a
//! remote configuration client fetches its document, flattens it (see
//! [`MapAdapter::from_yaml`]) and registers the result; tests seed it
//! directly.

use crate::domain::{ConfigKey, ConfigValue};
use crate::ports::ConfigSource;
use std::collections::HashMap;

#[cfg(feature = "yaml")]
use crate::domain::Result;

/// Configuration source adapter backed by an in-memory map.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::MapAdapter;
/// use layercfg::ports::ConfigSource;
///
/// let adapter = MapAdapter::new("overrides")
///     .with_value("database.host", "localhost")
///     .with_value("database.port", "5432");
///
/// assert_eq!(adapter.get_str("database.host").unwrap().as_str(), "localhost");
/// ```
#[derive(Debug, Clone)]
pub struct MapAdapter {
    /// Source name used in logs and errors
    name: String,
    /// Flat key-value pairs
    values: HashMap<String, String>,
}

impl MapAdapter {
    /// Creates a new, empty map adapter with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
        }
    }

    /// Adds a key-value pair, returning the adapter for chaining.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Creates a map adapter from an existing flat map.
    ///
    /// The keys are expected to already follow the canonical grammar.
    pub fn from_map(name: impl Into<String>, values: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Creates a map adapter by flattening a YAML document.
    ///
    /// This is the integration point for providers that acquire a document
    /// elsewhere (a remote configuration service, an embedded default): the
    /// fetched text is flattened with the canonical grammar so its keys
    /// resolve identically to file-based sources.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layercfg::adapters::MapAdapter;
    /// use layercfg::ports::ConfigSource;
    ///
    /// let adapter = MapAdapter::from_yaml("remote", "app:\n  name: demo\n").unwrap();
    /// assert_eq!(adapter.get_str("app.name").unwrap().as_str(), "demo");
    /// ```
    #[cfg(feature = "yaml")]
    pub fn from_yaml(name: impl Into<String>, content: &str) -> Result<Self> {
        use crate::adapters::yaml_file::YamlParser;
        use crate::ports::ConfigParser;

        let values = YamlParser::new().parse(content)?;
        Ok(Self {
            name: name.into(),
            values,
        })
    }

    /// Returns the number of entries held by this adapter.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the adapter holds no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigSource for MapAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str()))
    }
}
