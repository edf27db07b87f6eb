// SPDX-License-Identifier: Apache-2.0

//! Adapters layer containing configuration source implementations.
//!
//! Each adapter implements the `ConfigSource` trait to provide flat
//! key-value configuration from a specific backing store. All adapters
//! acquire their data once at construction and are immutable afterwards.

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "env")]
pub mod env_var;
pub mod map;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
#[cfg(feature = "cli")]
pub use cli::CommandLineAdapter;
#[cfg(feature = "env")]
pub use env_var::EnvVarAdapter;
pub use map::MapAdapter;
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlFileAdapter, YamlParser};
