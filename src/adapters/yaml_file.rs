// SPDX-License-Identifier: Apache-2.0

//! YAML file configuration source adapter.
//!
//! This module provides the flattening parser for YAML documents and an
//! adapter that reads a YAML file once at construction.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::{ConfigParser, ConfigSource};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Maximum allowed file size for YAML configuration files (10MB)
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// YAML flattening parser.
///
/// Converts YAML documents into flat key-value maps using the canonical
/// grammar: mapping entries join with `.`, sequence elements append `[i]`.
/// Scalars render via their default string form; `null` renders as the
/// empty string, which layered resolution treats as absent.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::YamlParser;
/// use layercfg::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let result = parser.parse("servers:\n  - host: a\n  - host: b\n").unwrap();
/// assert_eq!(result.get("servers[0].host"), Some(&"a".to_string()));
/// assert_eq!(result.get("servers[1].host"), Some(&"b".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Flattens a YAML value into a flat map, composing keys with the
    /// grammar operations on [`ConfigKey`].
    fn flatten(value: &serde_yaml::Value, prefix: &ConfigKey, out: &mut HashMap<String, String>) {
        match value {
            serde_yaml::Value::Mapping(map) => {
                for (key, val) in map {
                    if let Some(key_str) = key.as_str() {
                        Self::flatten(val, &prefix.child(key_str), out);
                    }
                }
            }
            serde_yaml::Value::Sequence(seq) => {
                for (i, val) in seq.iter().enumerate() {
                    Self::flatten(val, &prefix.index(i), out);
                }
            }
            serde_yaml::Value::String(s) => {
                out.insert(prefix.as_str().to_string(), s.clone());
            }
            serde_yaml::Value::Number(n) => {
                out.insert(prefix.as_str().to_string(), n.to_string());
            }
            serde_yaml::Value::Bool(b) => {
                out.insert(prefix.as_str().to_string(), b.to_string());
            }
            serde_yaml::Value::Null => {
                out.insert(prefix.as_str().to_string(), String::new());
            }
            _ => {}
        }
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        let mut result = HashMap::new();
        Self::flatten(&value, &ConfigKey::root(), &mut result);
        Ok(result)
    }
}

/// Configuration source adapter for YAML files.
///
/// The file is read and flattened once at construction; the adapter is
/// immutable afterwards. Resolution against the containing registry always
/// reflects the file as it was when the adapter was built.
///
/// # Examples
///
/// ```rust,no_run
/// use layercfg::adapters::YamlFileAdapter;
///
/// let adapter = YamlFileAdapter::from_file("/etc/myapp/config.yaml").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileAdapter {
    /// Source name, includes the file name for log context
    name: String,
    /// Flattened configuration values
    values: HashMap<String, String>,
}

impl YamlFileAdapter {
    /// Creates a YAML file adapter from a file path.
    ///
    /// The path is canonicalized, the file size is checked against a 10MB
    /// cap, and the content is flattened immediately. Errors are reported
    /// as [`ConfigError::SourceError`] or [`ConfigError::ParseError`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();

        let canonical_path =
            file_path
                .canonicalize()
                .map_err(|e| ConfigError::SourceError {
                    source_name: "yaml-file".to_string(),
                    message: format!(
                        "invalid or inaccessible path: {}",
                        file_path
                            .file_name()
                            .and_then(|n| n.to_str())
                            .unwrap_or("<unknown>")
                    ),
                    source: Some(Box::new(e)),
                })?;

        let metadata = fs::metadata(&canonical_path).map_err(|e| ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: format!(
                "failed to read file metadata: {}",
                canonical_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("<unknown>")
            ),
            source: Some(Box::new(e)),
        })?;

        if metadata.len() > MAX_YAML_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: "yaml-file".to_string(),
                message: format!(
                    "configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_YAML_FILE_SIZE
                ),
                source: None,
            });
        }

        let content = fs::read_to_string(&canonical_path).map_err(|e| ConfigError::SourceError {
            source_name: "yaml-file".to_string(),
            message: format!(
                "failed to read configuration file: {}",
                canonical_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("<unknown>")
            ),
            source: Some(Box::new(e)),
        })?;

        let values = YamlParser::new().parse(&content)?;
        let name = format!(
            "yaml-file:{}",
            canonical_path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("<unknown>")
        );

        Ok(Self { name, values })
    }
}

impl ConfigSource for YamlFileAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str()))
    }
}
