// SPDX-License-Identifier: Apache-2.0

//! Service layer providing the layered configuration registry and the
//! recursive decode engine.

pub mod binder;
pub mod registry;

pub use binder::{AnyValue, Bindable};
pub use registry::{ConfigRegistry, ConfigRegistryBuilder};
