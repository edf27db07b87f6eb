// SPDX-License-Identifier: Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait: the contract for turning a
//! structured configuration document into the flat key space the rest of
//! the crate operates on.

use crate::domain::Result;
use std::collections::HashMap;

/// A trait for parsing configuration documents into flat key-value maps.
///
/// # Key format
///
/// Parsers must flatten nested structures with the canonical grammar:
/// mapping entries join with `.`, sequence elements append `[i]` directly
/// to the enclosing key, zero-based and contiguous. For example:
///
/// ```yaml
/// database:
///   host: localhost
///   replicas:
///     - one
///     - two
/// ```
///
/// flattens to:
/// - `database.host` -> `"localhost"`
/// - `database.replicas[0]` -> `"one"`
/// - `database.replicas[1]` -> `"two"`
///
/// The binder rebuilds exactly these keys when decoding, so any deviation
/// from the grammar makes values unreachable.
///
/// # Examples
///
/// ```rust
/// use layercfg::ports::ConfigParser;
/// use layercfg::domain::Result;
/// use std::collections::HashMap;
///
/// struct MyParser;
///
/// impl ConfigParser for MyParser {
///     fn parse(&self, _content: &str) -> Result<HashMap<String, String>> {
///         Ok(HashMap::new())
///     }
/// }
/// ```
pub trait ConfigParser {
    /// Parses document content into a flat key-value map.
    fn parse(&self, content: &str) -> Result<HashMap<String, String>>;
}
