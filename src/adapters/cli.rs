// SPDX-License-Identifier: Apache-2.0

//! Command-line argument configuration source adapter.
//!
//! This adapter parses command-line tokens into flat key-value pairs once
//! at construction. Supported forms:
//! - `--key=value` (any number of leading dashes)
//! - `--key value` (value in the following token)
//! - `--flag` followed by another flag or end of input stores `"true"`
//!
//! Tokens without a preceding flag are ignored.

use crate::domain::{ConfigKey, ConfigValue};
use crate::ports::ConfigSource;
use std::collections::HashMap;

/// Configuration source adapter for command-line arguments.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::CommandLineAdapter;
/// use layercfg::ports::ConfigSource;
///
/// let args = vec!["--database.host=localhost", "--port", "5432", "--verbose"];
/// let adapter = CommandLineAdapter::from_args(args);
///
/// assert_eq!(adapter.get_str("port").unwrap().as_str(), "5432");
/// assert_eq!(adapter.get_str("verbose").unwrap().as_str(), "true");
/// ```
#[derive(Debug, Clone)]
pub struct CommandLineAdapter {
    /// Parsed key-value pairs
    values: HashMap<String, String>,
}

impl CommandLineAdapter {
    /// Creates an adapter with no arguments.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Creates an adapter from a vector of argument tokens.
    pub fn from_args<S: AsRef<str>>(args: Vec<S>) -> Self {
        let mut adapter = Self::new();
        adapter.parse_args(args);
        adapter
    }

    /// Creates an adapter from the process's command-line arguments,
    /// skipping the program name.
    pub fn from_env_args() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_args(args)
    }

    /// Parses argument tokens and populates the values map.
    fn parse_args<S: AsRef<str>>(&mut self, args: Vec<S>) {
        let mut pending: Option<String> = None;

        for arg in &args {
            let arg = arg.as_ref();
            if arg.starts_with('-') {
                // A new flag closes out any pending value-less flag.
                if let Some(flag) = pending.take() {
                    self.values.insert(flag, "true".to_string());
                }
                let body = arg.trim_start_matches('-');
                match body.split_once('=') {
                    Some((key, value)) => {
                        if !key.is_empty() {
                            self.values.insert(key.to_string(), value.to_string());
                        }
                    }
                    None => {
                        if !body.is_empty() {
                            pending = Some(body.to_string());
                        }
                    }
                }
            } else if let Some(key) = pending.take() {
                self.values.insert(key, arg.to_string());
            }
        }

        if let Some(flag) = pending {
            self.values.insert(flag, "true".to_string());
        }
    }
}

impl Default for CommandLineAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for CommandLineAdapter {
    fn name(&self) -> &str {
        "cli"
    }

    fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str()))
    }
}
