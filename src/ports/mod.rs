// SPDX-License-Identifier: Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) for the seams of the
//! configuration system: the source capability and the document-flattening
//! contract. Concrete implementations live in the adapters layer.

pub mod parser;
pub mod source;

// Re-export commonly used types
pub use parser::ConfigParser;
pub use source::ConfigSource;
