// SPDX-License-Identifier: Apache-2.0

//! Recursive decode engine over destination shapes.
//!
//! [`Bindable`] is the decode-side counterpart of the flattening grammar:
//! given a base key, each implementation rebuilds the sub-keys the
//! flattener would have produced and reconstructs the destination from the
//! registry's flat key space. Shapes form a closed set of trait impls
//! (scalars, `Option`, `Box`, fixed arrays, `Vec`, the [`AnyValue`] slot,
//! and records wired up with [`crate::bind_fields!`]), dispatched by the
//! type system rather than runtime introspection.
//!
//! Found/not-found aggregation: composite shapes return `KeyNotFound` only
//! when none of their sub-elements bound. A single bound sub-element makes
//! the composite succeed while unfound siblings keep their prior values.
//! This best-effort partial fill is part of the contract. `TypeMismatch`
//! and `UnsupportedShape` are never swallowed by aggregation; they abort
//! the whole bind.

use crate::domain::{ConfigError, ConfigKey, Result};
use crate::service::ConfigRegistry;
use std::collections::{BTreeMap, HashMap};

/// A destination shape that can be reconstructed from layered sources.
///
/// `bind` decodes the value tree rooted at `key` into `self`. On
/// `Err(KeyNotFound)` the destination is untouched (for leaves) or
/// partially updated per the composite rules above. `TypeMismatch` and
/// `UnsupportedShape` always propagate to the caller.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::MapAdapter;
/// use layercfg::service::ConfigRegistry;
///
/// #[derive(Default)]
/// struct Database {
///     host: String,
///     port: i64,
/// }
///
/// layercfg::bind_fields!(Database { host, port });
///
/// let mut registry = ConfigRegistry::new();
/// registry.add_last(Box::new(
///     MapAdapter::new("file")
///         .with_value("database.host", "localhost")
///         .with_value("database.port", "5432"),
/// ));
///
/// let mut db = Database::default();
/// registry.get("database", &mut db).unwrap();
/// assert_eq!(db.host, "localhost");
/// assert_eq!(db.port, 5432);
/// ```
pub trait Bindable {
    /// Binds the value tree rooted at `key` into `self`.
    fn bind(&mut self, cfg: &ConfigRegistry, key: &ConfigKey) -> Result<()>;
}

impl Bindable for String {
    fn bind(&mut self, cfg: &ConfigRegistry, key: &ConfigKey) -> Result<()> {
        *self = cfg.get_string(key.as_str())?;
        Ok(())
    }
}

impl Bindable for bool {
    fn bind(&mut self, cfg: &ConfigRegistry, key: &ConfigKey) -> Result<()> {
        *self = cfg.get_bool(key.as_str())?;
        Ok(())
    }
}

impl Bindable for i64 {
    fn bind(&mut self, cfg: &ConfigRegistry, key: &ConfigKey) -> Result<()> {
        *self = cfg.get_i64(key.as_str())?;
        Ok(())
    }
}

impl Bindable for u64 {
    fn bind(&mut self, cfg: &ConfigRegistry, key: &ConfigKey) -> Result<()> {
        *self = cfg.get_u64(key.as_str())?;
        Ok(())
    }
}

impl Bindable for f64 {
    fn bind(&mut self, cfg: &ConfigRegistry, key: &ConfigKey) -> Result<()> {
        *self = cfg.get_f64(key.as_str())?;
        Ok(())
    }
}

impl Bindable for f32 {
    fn bind(&mut self, cfg: &ConfigRegistry, key: &ConfigKey) -> Result<()> {
        *self = cfg.get_f64(key.as_str())? as f32;
        Ok(())
    }
}

// Narrow integers go through the wide getters with a range check; an
// out-of-range value is a TypeMismatch, not a silent truncation.
macro_rules! bind_narrow_int {
    ($($ty:ty => ($wide:ident, $expected:literal)),* $(,)?) => {$(
        impl Bindable for $ty {
            fn bind(&mut self, cfg: &ConfigRegistry, key: &ConfigKey) -> Result<()> {
                let wide = cfg.$wide(key.as_str())?;
                *self = <$ty>::try_from(wide).map_err(|e| {
                    ConfigError::mismatch(key.as_str(), &wide.to_string(), $expected, e)
                })?;
                Ok(())
            }
        }
    )*};
}

bind_narrow_int! {
    i8 => (get_i64, "8-bit integer"),
    i16 => (get_i64, "16-bit integer"),
    i32 => (get_i64, "32-bit integer"),
    isize => (get_i64, "pointer-sized integer"),
    u8 => (get_u64, "8-bit unsigned integer"),
    u16 => (get_u64, "16-bit unsigned integer"),
    u32 => (get_u64, "32-bit unsigned integer"),
    usize => (get_u64, "pointer-sized unsigned integer"),
}

impl<T: Bindable + Default> Bindable for Option<T> {
    /// Binds an optional slot.
    ///
    /// An empty slot gets a fresh inner value which is installed only on
    /// success; on any error the slot stays `None`. A filled slot rebinds
    /// into the existing inner value, so repeated binds refine it in place.
    fn bind(&mut self, cfg: &ConfigRegistry, key: &ConfigKey) -> Result<()> {
        match self {
            Some(inner) => inner.bind(cfg, key),
            None => {
                let mut fresh = T::default();
                fresh.bind(cfg, key)?;
                *self = Some(fresh);
                Ok(())
            }
        }
    }
}

impl<T: Bindable> Bindable for Box<T> {
    fn bind(&mut self, cfg: &ConfigRegistry, key: &ConfigKey) -> Result<()> {
        (**self).bind(cfg, key)
    }
}

impl<T: Bindable, const N: usize> Bindable for [T; N] {
    /// Binds a fixed array element-wise at `key[0]` through `key[N-1]`.
    ///
    /// Missing elements keep their prior value; the array reports
    /// `KeyNotFound` only when every element was absent. A zero-length
    /// array succeeds without any lookups.
    fn bind(&mut self, cfg: &ConfigRegistry, key: &ConfigKey) -> Result<()> {
        if N == 0 {
            return Ok(());
        }
        let mut found = false;
        for (i, slot) in self.iter_mut().enumerate() {
            match slot.bind(cfg, &key.index(i)) {
                Ok(()) => found = true,
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(e),
            }
        }
        if found {
            Ok(())
        } else {
            Err(ConfigError::KeyNotFound {
                key: key.as_str().to_string(),
            })
        }
    }
}

impl<T: Bindable + Default> Bindable for Vec<T> {
    /// Binds a dynamic sequence by probing `key[0]`, `key[1]`, ...
    ///
    /// The first absent index defines the sequence length; there is no
    /// explicit length key. When at least one element binds, the
    /// destination is replaced with the rebuilt sequence. When nothing
    /// binds, the destination is left untouched and `KeyNotFound` is
    /// returned, so a pre-populated `Vec` survives a missed probe.
    fn bind(&mut self, cfg: &ConfigRegistry, key: &ConfigKey) -> Result<()> {
        let mut fresh: Vec<T> = Vec::new();
        loop {
            let mut elem = T::default();
            match elem.bind(cfg, &key.index(fresh.len())) {
                Ok(()) => fresh.push(elem),
                Err(e) if e.is_not_found() => break,
                Err(e) => return Err(e),
            }
        }
        if fresh.is_empty() {
            return Err(ConfigError::KeyNotFound {
                key: key.as_str().to_string(),
            });
        }
        *self = fresh;
        Ok(())
    }
}

impl<K, V, S> Bindable for HashMap<K, V, S> {
    /// Maps are not a decodable destination shape; the key grammar has no
    /// way to enumerate entries.
    fn bind(&mut self, _cfg: &ConfigRegistry, key: &ConfigKey) -> Result<()> {
        Err(ConfigError::UnsupportedShape {
            key: key.as_str().to_string(),
            shape: "map",
        })
    }
}

impl<K, V> Bindable for BTreeMap<K, V> {
    fn bind(&mut self, _cfg: &ConfigRegistry, key: &ConfigKey) -> Result<()> {
        Err(ConfigError::UnsupportedShape {
            key: key.as_str().to_string(),
            shape: "map",
        })
    }
}

/// An untyped destination slot.
///
/// The closed-union analogue of a dynamically typed slot: when `Unset`,
/// binding decodes a string (the engine's default coercion for untyped
/// destinations) and the slot becomes [`AnyValue::Str`]. A slot already
/// holding a value rebinds into that value's shape, so repeated binds
/// refine an already-typed slot.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::MapAdapter;
/// use layercfg::service::{AnyValue, ConfigRegistry};
///
/// let mut registry = ConfigRegistry::new();
/// registry.add_last(Box::new(MapAdapter::new("m").with_value("answer", "42")));
///
/// let mut slot = AnyValue::Unset;
/// registry.get("answer", &mut slot).unwrap();
/// assert_eq!(slot, AnyValue::Str("42".to_string()));
///
/// let mut typed = AnyValue::Int(0);
/// registry.get("answer", &mut typed).unwrap();
/// assert_eq!(typed, AnyValue::Int(42));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnyValue {
    /// No value has been bound yet.
    #[default]
    Unset,
    /// A string value.
    Str(String),
    /// A boolean value.
    Bool(bool),
    /// A signed integer value.
    Int(i64),
    /// An unsigned integer value.
    Uint(u64),
    /// A floating-point value.
    Float(f64),
}

impl Bindable for AnyValue {
    fn bind(&mut self, cfg: &ConfigRegistry, key: &ConfigKey) -> Result<()> {
        match self {
            AnyValue::Unset => {
                let s = cfg.get_string(key.as_str())?;
                *self = AnyValue::Str(s);
                Ok(())
            }
            AnyValue::Str(v) => v.bind(cfg, key),
            AnyValue::Bool(v) => v.bind(cfg, key),
            AnyValue::Int(v) => v.bind(cfg, key),
            AnyValue::Uint(v) => v.bind(cfg, key),
            AnyValue::Float(v) => v.bind(cfg, key),
        }
    }
}

/// Generates a [`Bindable`] impl for a record from a field descriptor list.
///
/// Each listed field is bound under the record's key. Field forms:
///
/// - `field`: key segment is the field identifier;
/// - `field as "segment"`: the literal is used verbatim as the key
///   segment (it may itself contain grammar, e.g. `"a.b"`);
/// - `field as skip`: the field is never queried and never counts toward
///   the record's found status;
/// - `field as flatten`: the field binds at the record's own key with no
///   extra segment (an embedded record sharing the parent namespace).
///
/// Fields not listed are never bound. The record reports `KeyNotFound`
/// only when every participating field was absent; a single bound field
/// makes the whole record succeed, leaving absent fields at their prior
/// values.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::MapAdapter;
/// use layercfg::service::ConfigRegistry;
///
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: i64,
///     secret: String,
/// }
///
/// layercfg::bind_fields!(Server {
///     host,
///     port as "listen_port",
///     secret as skip,
/// });
///
/// let mut registry = ConfigRegistry::new();
/// registry.add_last(Box::new(
///     MapAdapter::new("m")
///         .with_value("server.host", "0.0.0.0")
///         .with_value("server.listen_port", "8080"),
/// ));
///
/// let mut server = Server::default();
/// registry.get("server", &mut server).unwrap();
/// assert_eq!(server.host, "0.0.0.0");
/// assert_eq!(server.port, 8080);
/// assert_eq!(server.secret, "");
/// ```
#[macro_export]
macro_rules! bind_fields {
    ($name:ty { $($field:ident $(as $mode:tt)?),* $(,)? }) => {
        impl $crate::service::Bindable for $name {
            fn bind(
                &mut self,
                cfg: &$crate::service::ConfigRegistry,
                key: &$crate::domain::ConfigKey,
            ) -> $crate::domain::Result<()> {
                let mut found = false;
                $( $crate::bind_fields!(@field self, cfg, key, found, $field $(, $mode)?); )*
                if found {
                    Ok(())
                } else {
                    Err($crate::domain::ConfigError::KeyNotFound {
                        key: key.as_str().to_string(),
                    })
                }
            }
        }
    };
    (@field $slf:expr, $cfg:expr, $key:expr, $found:ident, $field:ident) => {
        match $crate::service::Bindable::bind(
            &mut $slf.$field,
            $cfg,
            &$key.child(stringify!($field)),
        ) {
            Ok(()) => $found = true,
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }
    };
    (@field $slf:expr, $cfg:expr, $key:expr, $found:ident, $field:ident, skip) => {
        // Field intentionally never queried; the reference only checks it exists.
        let _ = &$slf.$field;
    };
    (@field $slf:expr, $cfg:expr, $key:expr, $found:ident, $field:ident, flatten) => {
        match $crate::service::Bindable::bind(&mut $slf.$field, $cfg, $key) {
            Ok(()) => $found = true,
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }
    };
    (@field $slf:expr, $cfg:expr, $key:expr, $found:ident, $field:ident, $segment:literal) => {
        match $crate::service::Bindable::bind(&mut $slf.$field, $cfg, &$key.child($segment)) {
            Ok(()) => $found = true,
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }
    };
}
