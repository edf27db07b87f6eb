// SPDX-License-Identifier: Apache-2.0

//! Layered source registry and typed accessor surface.
//!
//! The registry holds an ordered list of configuration sources; earlier
//! entries strictly dominate later ones. Resolution walks the list and
//! returns the first non-empty value. The typed getters layer scalar
//! parsing on top, each in three variants: plain (`Result`), `*_or`
//! (default substituted only for absence), and `must_*` (panic with a
//! key-qualified diagnostic, for required startup configuration).
//!
//! The registry is meant to be assembled during startup and treated as
//! read-only afterwards; concurrent reads are then safe because nothing
//! mutates, while mutation overlapping reads must be prevented by the
//! caller.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::ConfigSource;
use crate::service::binder::Bindable;
use tracing::{error, trace};

/// An ordered collection of configuration sources with layered resolution.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::MapAdapter;
/// use layercfg::service::ConfigRegistry;
///
/// let mut registry = ConfigRegistry::new();
/// registry.add_last(Box::new(MapAdapter::new("defaults").with_value("port", "8080")));
/// registry.add_first(Box::new(MapAdapter::new("overrides").with_value("port", "9090")));
///
/// // The source added first (front of the list) wins.
/// assert_eq!(registry.get_i64("port").unwrap(), 9090);
/// ```
pub struct ConfigRegistry {
    /// Sources in resolution order; index 0 has the highest priority
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigRegistry {
    /// Creates a new registry with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Creates a new registry builder.
    pub fn builder() -> ConfigRegistryBuilder {
        ConfigRegistryBuilder::new()
    }

    /// Inserts a source at the front of the list, giving it the highest
    /// priority and shifting the others back.
    pub fn add_first(&mut self, source: Box<dyn ConfigSource>) {
        self.sources.insert(0, source);
    }

    /// Appends a source at the back of the list, as the lowest priority.
    pub fn add_last(&mut self, source: Box<dyn ConfigSource>) {
        self.sources.push(source);
    }

    /// Returns the number of registered sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` when no sources are registered.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Appends a YAML file source whose path is itself configured.
    ///
    /// Reads the key `config.file` from the sources registered so far and,
    /// if set, appends the file as the lowest-priority source. When the key
    /// is absent this logs at debug level and does nothing.
    #[cfg(feature = "yaml")]
    pub fn add_yaml_file_from_config(&mut self) -> Result<()> {
        use crate::adapters::YamlFileAdapter;

        let file = self.get_string_or("config.file", "");
        if file.is_empty() {
            tracing::debug!("no file source added: config.file is not set");
            return Ok(());
        }
        let adapter = YamlFileAdapter::from_file(&file)?;
        self.add_last(Box::new(adapter));
        Ok(())
    }

    /// Resolves a key against the sources in priority order.
    ///
    /// Returns the first non-empty value; an empty string from a source is
    /// treated as absent and the walk continues. Every call re-queries the
    /// sources (no caching): sources are cheap in-memory maps after their
    /// own acquisition phase.
    pub fn resolve(&self, key: &ConfigKey) -> Result<ConfigValue> {
        for source in &self.sources {
            if let Some(value) = source.get(key) {
                if !value.as_str().is_empty() {
                    trace!(source = source.name(), key = %key, "resolved configuration key");
                    return Ok(value);
                }
            }
        }
        Err(ConfigError::KeyNotFound {
            key: key.as_str().to_string(),
        })
    }

    /// Returns `true` when the key resolves to a non-empty value in any
    /// source.
    pub fn has(&self, key: &str) -> bool {
        self.resolve(&ConfigKey::from(key)).is_ok()
    }

    // --- scalar getters -------------------------------------------------

    /// Retrieves a string value. The only possible error is `KeyNotFound`.
    pub fn get_string(&self, key: &str) -> Result<String> {
        self.resolve(&ConfigKey::from(key)).map(|v| v.as_string())
    }

    /// Retrieves a string value, substituting `default` when absent.
    ///
    /// Strings cannot mismatch, so this variant is infallible.
    pub fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_string(key)
            .unwrap_or_else(|_| default.to_string())
    }

    /// Retrieves a string value or panics with a key-qualified diagnostic.
    pub fn must_get_string(&self, key: &str) -> String {
        self.get_string(key).unwrap_or_else(|e| self.fatal(key, e))
    }

    /// Retrieves a boolean value.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.resolve(&ConfigKey::from(key))?.as_bool(key)
    }

    /// Retrieves a boolean value, substituting `default` only when the key
    /// is absent; a `TypeMismatch` propagates.
    pub fn get_bool_or(&self, key: &str, default: bool) -> Result<bool> {
        match self.get_bool(key) {
            Err(e) if e.is_not_found() => Ok(default),
            other => other,
        }
    }

    /// Retrieves a boolean value or panics with a key-qualified diagnostic.
    pub fn must_get_bool(&self, key: &str) -> bool {
        self.get_bool(key).unwrap_or_else(|e| self.fatal(key, e))
    }

    /// Retrieves an `i64` value.
    pub fn get_i64(&self, key: &str) -> Result<i64> {
        self.resolve(&ConfigKey::from(key))?.as_i64(key)
    }

    /// Retrieves an `i64` value, substituting `default` only when the key
    /// is absent; a `TypeMismatch` propagates.
    pub fn get_i64_or(&self, key: &str, default: i64) -> Result<i64> {
        match self.get_i64(key) {
            Err(e) if e.is_not_found() => Ok(default),
            other => other,
        }
    }

    /// Retrieves an `i64` value or panics with a key-qualified diagnostic.
    pub fn must_get_i64(&self, key: &str) -> i64 {
        self.get_i64(key).unwrap_or_else(|e| self.fatal(key, e))
    }

    /// Retrieves an `i32` value, derived from the `i64` getter with a
    /// range check.
    pub fn get_i32(&self, key: &str) -> Result<i32> {
        let wide = self.get_i64(key)?;
        i32::try_from(wide)
            .map_err(|e| ConfigError::mismatch(key, &wide.to_string(), "32-bit integer", e))
    }

    /// Retrieves an `i32` value, substituting `default` only when the key
    /// is absent; a `TypeMismatch` propagates.
    pub fn get_i32_or(&self, key: &str, default: i32) -> Result<i32> {
        match self.get_i32(key) {
            Err(e) if e.is_not_found() => Ok(default),
            other => other,
        }
    }

    /// Retrieves an `i32` value or panics with a key-qualified diagnostic.
    pub fn must_get_i32(&self, key: &str) -> i32 {
        self.get_i32(key).unwrap_or_else(|e| self.fatal(key, e))
    }

    /// Retrieves a `u64` value.
    pub fn get_u64(&self, key: &str) -> Result<u64> {
        self.resolve(&ConfigKey::from(key))?.as_u64(key)
    }

    /// Retrieves a `u64` value, substituting `default` only when the key
    /// is absent; a `TypeMismatch` propagates.
    pub fn get_u64_or(&self, key: &str, default: u64) -> Result<u64> {
        match self.get_u64(key) {
            Err(e) if e.is_not_found() => Ok(default),
            other => other,
        }
    }

    /// Retrieves a `u64` value or panics with a key-qualified diagnostic.
    pub fn must_get_u64(&self, key: &str) -> u64 {
        self.get_u64(key).unwrap_or_else(|e| self.fatal(key, e))
    }

    /// Retrieves an `f64` value.
    pub fn get_f64(&self, key: &str) -> Result<f64> {
        self.resolve(&ConfigKey::from(key))?.as_f64(key)
    }

    /// Retrieves an `f64` value, substituting `default` only when the key
    /// is absent; a `TypeMismatch` propagates.
    pub fn get_f64_or(&self, key: &str, default: f64) -> Result<f64> {
        match self.get_f64(key) {
            Err(e) if e.is_not_found() => Ok(default),
            other => other,
        }
    }

    /// Retrieves an `f64` value or panics with a key-qualified diagnostic.
    pub fn must_get_f64(&self, key: &str) -> f64 {
        self.get_f64(key).unwrap_or_else(|e| self.fatal(key, e))
    }

    // --- sequence getters (derived through the binder) ------------------

    /// Retrieves a sequence of strings at `key[0]`, `key[1]`, ...
    pub fn get_string_vec(&self, key: &str) -> Result<Vec<String>> {
        let mut out: Vec<String> = Vec::new();
        self.get(key, &mut out)?;
        Ok(out)
    }

    /// Retrieves a string sequence or panics with a key-qualified
    /// diagnostic.
    pub fn must_get_string_vec(&self, key: &str) -> Vec<String> {
        self.get_string_vec(key)
            .unwrap_or_else(|e| self.fatal(key, e))
    }

    /// Retrieves a sequence of integers at `key[0]`, `key[1]`, ...
    pub fn get_i64_vec(&self, key: &str) -> Result<Vec<i64>> {
        let mut out: Vec<i64> = Vec::new();
        self.get(key, &mut out)?;
        Ok(out)
    }

    /// Retrieves an integer sequence or panics with a key-qualified
    /// diagnostic.
    pub fn must_get_i64_vec(&self, key: &str) -> Vec<i64> {
        self.get_i64_vec(key).unwrap_or_else(|e| self.fatal(key, e))
    }

    // --- generic binding entry ------------------------------------------

    /// Recursively binds the value tree rooted at `key` into `dest`.
    ///
    /// This is the generic entry into the decode engine: `dest` may be a
    /// scalar, an `Option`, a `Box`, a fixed array, a `Vec`, an
    /// [`crate::service::AnyValue`] slot, or a record wired up with
    /// [`crate::bind_fields!`]. See [`Bindable`] for the per-shape rules,
    /// including best-effort partial fill of composites.
    pub fn get<T: Bindable>(&self, key: &str, dest: &mut T) -> Result<()> {
        dest.bind(self, &ConfigKey::from(key))
    }

    fn fatal<T>(&self, key: &str, err: ConfigError) -> T {
        error!(key, %err, "required configuration key failed to resolve");
        panic!("required configuration key '{}': {}", key, err);
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for assembling a [`ConfigRegistry`].
///
/// Sources are appended in call order, so the first source added has the
/// highest priority.
///
/// # Examples
///
/// ```rust
/// use layercfg::service::ConfigRegistry;
///
/// let registry = ConfigRegistry::builder()
///     .with_cli_args(vec!["--app.name=demo"])
///     .with_env_vars()
///     .build();
/// assert_eq!(registry.get_string("app.name").unwrap(), "demo");
/// ```
pub struct ConfigRegistryBuilder {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigRegistryBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Appends a configuration source.
    pub fn with_source(mut self, source: Box<dyn ConfigSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Appends a snapshot of all environment variables.
    #[cfg(feature = "env")]
    pub fn with_env_vars(self) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(EnvVarAdapter::new()))
    }

    /// Appends a prefix-filtered snapshot of environment variables.
    #[cfg(feature = "env")]
    pub fn with_env_prefix(self, prefix: impl Into<String>) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(EnvVarAdapter::with_prefix(prefix)))
    }

    /// Appends command-line arguments as a source.
    #[cfg(feature = "cli")]
    pub fn with_cli_args<S: AsRef<str>>(self, args: Vec<S>) -> Self {
        use crate::adapters::CommandLineAdapter;
        self.with_source(Box::new(CommandLineAdapter::from_args(args)))
    }

    /// Appends a YAML file as a source.
    #[cfg(feature = "yaml")]
    pub fn with_yaml_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        use crate::adapters::YamlFileAdapter;
        let adapter = YamlFileAdapter::from_file(path)?;
        Ok(self.with_source(Box::new(adapter)))
    }

    /// Builds the registry with the accumulated sources.
    pub fn build(self) -> ConfigRegistry {
        let mut registry = ConfigRegistry::new();
        for source in self.sources {
            registry.add_last(source);
        }
        registry
    }
}

impl Default for ConfigRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
