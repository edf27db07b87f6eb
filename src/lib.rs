// SPDX-License-Identifier: Apache-2.0

//! A layered, type-safe configuration management crate.
//!
//! This crate reads configuration from an ordered list of sources
//! (command-line arguments, environment variables, YAML files, in-memory
//! maps) and resolves every key against that list in priority order.
//! The first source holding a non-empty value for a key wins.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, errors)
//! - **Ports**: Trait definitions (`ConfigSource`, `ConfigParser`)
//! - **Adapters**: Source implementations (env vars, YAML files, CLI, maps)
//! - **Service**: The registry that orchestrates lookup and decoding
//!
//! # Key Grammar
//!
//! Nested documents flatten into dotted keys with bracketed indices:
//! `database.replicas[0].host`. The same grammar drives the decode side,
//! so a value written by the YAML flattener is always reachable by the
//! binder probing the equivalent destination shape.
//!
//! # Binding
//!
//! Beyond typed scalar getters, [`service::Bindable`] reconstructs whole
//! destination shapes (records, vectors, optionals) from the flat key
//! space with best-effort partial fill. Records opt in with the
//! [`bind_fields!`] macro.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML file support (default)
//! - `env`: Enable environment variable support (default)
//! - `cli`: Enable command-line argument support (default)
//!
//! # Quick Start
//!
//! ```rust
//! use layercfg::prelude::*;
//!
//! # fn main() -> layercfg::domain::Result<()> {
//! let registry = ConfigRegistry::builder()
//!     .with_source(Box::new(
//!         MapAdapter::new("defaults").with_value("app.port", "8080"),
//!     ))
//!     .build();
//!
//! let port = registry.get_i64("app.port")?;
//! assert_eq!(port, 8080);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
    pub use crate::ports::{ConfigParser, ConfigSource};
    pub use crate::service::{AnyValue, Bindable, ConfigRegistry, ConfigRegistryBuilder};

    // Re-export adapters based on feature flags
    pub use crate::adapters::MapAdapter;
    #[cfg(feature = "cli")]
    pub use crate::adapters::CommandLineAdapter;
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlFileAdapter, YamlParser};
}
