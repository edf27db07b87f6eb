// SPDX-License-Identifier: Apache-2.0

//! Domain layer containing core types.
//!
//! This module holds the fundamental concepts of the configuration system:
//! the key grammar, the raw value wrapper with its typed conversions, and
//! the error taxonomy. It is independent of any concrete source.

pub mod config_key;
pub mod config_value;
pub mod errors;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
