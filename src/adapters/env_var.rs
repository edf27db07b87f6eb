// SPDX-License-Identifier: Apache-2.0

//! Environment variable configuration source adapter.
//!
//! This adapter snapshots the process environment once at construction.
//! Variable names are normalized to the key grammar: lowercased, with
//! underscores replaced by dots, so `DATABASE_HOST` resolves as
//! `database.host`. An optional prefix restricts which variables are
//! captured and is stripped from the resulting keys.

use crate::domain::{ConfigKey, ConfigValue};
use crate::ports::ConfigSource;
use std::collections::HashMap;
use std::env;

/// Configuration source adapter for environment variables.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::EnvVarAdapter;
///
/// // Snapshot the whole environment
/// let adapter = EnvVarAdapter::new();
///
/// // Snapshot only variables starting with "MYAPP_", prefix stripped
/// let adapter = EnvVarAdapter::with_prefix("MYAPP_");
/// ```
#[derive(Debug, Clone)]
pub struct EnvVarAdapter {
    /// Normalized key-value pairs captured at construction
    values: HashMap<String, String>,
}

impl EnvVarAdapter {
    /// Creates an adapter holding a snapshot of all environment variables.
    pub fn new() -> Self {
        Self::capture(None)
    }

    /// Creates an adapter holding only variables with the given prefix.
    ///
    /// The prefix is stripped before normalization, so with prefix
    /// `"MYAPP_"` the variable `MYAPP_DATABASE_HOST` becomes the key
    /// `database.host`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::capture(Some(prefix.into()))
    }

    /// Creates an adapter from explicit values, for tests.
    ///
    /// The provided names go through the same normalization as real
    /// environment variables.
    pub fn from_values(values: HashMap<String, String>) -> Self {
        let values = values
            .into_iter()
            .map(|(k, v)| (Self::normalize(&k), v))
            .collect();
        Self { values }
    }

    fn capture(prefix: Option<String>) -> Self {
        let mut values = HashMap::new();
        for (name, value) in env::vars() {
            let name = match &prefix {
                Some(p) => match name.strip_prefix(p.as_str()) {
                    Some(rest) => rest.to_string(),
                    None => continue,
                },
                None => name,
            };
            values.insert(Self::normalize(&name), value);
        }
        Self { values }
    }

    /// Normalizes a variable name into the key grammar.
    fn normalize(name: &str) -> String {
        name.to_lowercase().replace('_', ".")
    }
}

impl Default for EnvVarAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str()))
    }
}
