// SPDX-License-Identifier: Apache-2.0

//! Integration tests for recursive binding of destination shapes.

use layercfg::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

mod common;

/// A source that records every key it is asked for.
struct RecordingSource {
    values: HashMap<String, String>,
    queried: Arc<Mutex<Vec<String>>>,
}

impl RecordingSource {
    fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            queried: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl ConfigSource for RecordingSource {
    fn name(&self) -> &str {
        "recording"
    }

    fn get(&self, key: &ConfigKey) -> Option<ConfigValue> {
        self.queried.lock().unwrap().push(key.as_str().to_string());
        self.values
            .get(key.as_str())
            .map(|v| ConfigValue::from(v.as_str()))
    }
}

fn registry_with(pairs: &[(&str, &str)]) -> ConfigRegistry {
    let mut adapter = MapAdapter::new("test");
    for (k, v) in pairs {
        adapter = adapter.with_value(*k, *v);
    }
    ConfigRegistry::builder()
        .with_source(Box::new(adapter))
        .build()
}

#[derive(Default)]
struct Replica {
    host: String,
    port: i64,
}

layercfg::bind_fields!(Replica { host, port });

#[derive(Default)]
struct Database {
    name: String,
    replicas: Vec<Replica>,
    timeout: Option<i64>,
}

layercfg::bind_fields!(Database {
    name,
    replicas,
    timeout,
});

#[test]
#[cfg(feature = "yaml")]
fn test_flatten_then_bind_round_trip() {
    common::init_tracing();
    // A nested document flattened by the parser must be reachable by the
    // binder probing the equivalent destination shape.
    let yaml = r#"
database:
  name: orders
  timeout: 30
  replicas:
    - host: db1.internal
      port: 5432
    - host: db2.internal
      port: 5433
"#;
    let registry = ConfigRegistry::builder()
        .with_source(Box::new(MapAdapter::from_yaml("doc", yaml).unwrap()))
        .build();

    let mut db = Database::default();
    registry.get("database", &mut db).unwrap();

    assert_eq!(db.name, "orders");
    assert_eq!(db.timeout, Some(30));
    assert_eq!(db.replicas.len(), 2);
    assert_eq!(db.replicas[0].host, "db1.internal");
    assert_eq!(db.replicas[0].port, 5432);
    assert_eq!(db.replicas[1].host, "db2.internal");
    assert_eq!(db.replicas[1].port, 5433);
}

#[test]
fn test_bind_across_layered_sources() {
    common::init_tracing();
    // Fields of one record may resolve from different layers.
    let registry = ConfigRegistry::builder()
        .with_source(Box::new(
            MapAdapter::new("overrides").with_value("db.name", "staging"),
        ))
        .with_source(Box::new(
            MapAdapter::new("defaults")
                .with_value("db.name", "production")
                .with_value("db.timeout", "60"),
        ))
        .build();

    let mut db = Database::default();
    registry.get("db", &mut db).unwrap();

    assert_eq!(db.name, "staging");
    assert_eq!(db.timeout, Some(60));
}

#[test]
fn test_partial_fill_preserves_existing_values() {
    let registry = registry_with(&[("db.timeout", "15")]);

    let mut db = Database {
        name: "preset".to_string(),
        replicas: vec![Replica {
            host: "kept".to_string(),
            port: 1,
        }],
        timeout: None,
    };
    registry.get("db", &mut db).unwrap();

    // Only timeout was found; everything else keeps its prior value.
    assert_eq!(db.name, "preset");
    assert_eq!(db.replicas.len(), 1);
    assert_eq!(db.replicas[0].host, "kept");
    assert_eq!(db.timeout, Some(15));
}

#[test]
fn test_all_fields_absent_is_not_found() {
    let registry = registry_with(&[("unrelated", "x")]);

    let mut db = Database::default();
    let err = registry.get("db", &mut db).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_type_mismatch_is_never_swallowed() {
    // One bad field aborts the bind even though its siblings resolve.
    let registry = registry_with(&[("db.name", "orders"), ("db.timeout", "soon")]);

    let mut db = Database::default();
    let err = registry.get("db", &mut db).unwrap_err();
    assert!(matches!(err, ConfigError::TypeMismatch { .. }));
}

#[test]
fn test_map_destination_is_unsupported() {
    let registry = registry_with(&[("m.a", "1"), ("m.b", "2")]);

    let mut m: HashMap<String, String> = HashMap::new();
    let err = registry.get("m", &mut m).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedShape { .. }));
}

#[test]
fn test_skipped_field_is_never_queried() {
    #[derive(Default)]
    struct Credentials {
        user: String,
        password: String,
    }

    layercfg::bind_fields!(Credentials {
        user,
        password as skip,
    });

    let source = RecordingSource::new(&[
        ("auth.user", "admin"),
        ("auth.password", "hunter2"),
    ]);
    let registry = ConfigRegistry::builder()
        .with_source(Box::new(source))
        .build();

    let mut creds = Credentials::default();
    registry.get("auth", &mut creds).unwrap();

    assert_eq!(creds.user, "admin");
    assert_eq!(creds.password, "");
}

#[test]
fn test_skip_tag_issues_no_lookup() {
    #[derive(Default)]
    struct Secret {
        token: String,
    }

    layercfg::bind_fields!(Secret {
        token as skip,
    });

    let source = RecordingSource::new(&[("s.token", "x")]);
    let queried = source.queried.clone();
    let registry = ConfigRegistry::builder()
        .with_source(Box::new(source))
        .build();

    let mut secret = Secret::default();
    let err = registry.get("s", &mut secret).unwrap_err();
    assert!(err.is_not_found());

    // No key was ever asked for during the bind.
    assert!(queried.lock().unwrap().is_empty());
}

#[test]
fn test_renamed_field_uses_literal_segment() {
    #[derive(Default)]
    struct Listener {
        port: i64,
    }

    layercfg::bind_fields!(Listener {
        port as "listen-port",
    });

    let registry = registry_with(&[("srv.listen-port", "8443")]);
    let mut listener = Listener::default();
    registry.get("srv", &mut listener).unwrap();
    assert_eq!(listener.port, 8443);
}

#[test]
fn test_flattened_field_shares_parent_namespace() {
    #[derive(Default)]
    struct Common {
        region: String,
    }
    layercfg::bind_fields!(Common { region });

    #[derive(Default)]
    struct Service {
        name: String,
        common: Common,
    }
    layercfg::bind_fields!(Service {
        name,
        common as flatten,
    });

    let registry = registry_with(&[("svc.name", "api"), ("svc.region", "eu-west-1")]);
    let mut service = Service::default();
    registry.get("svc", &mut service).unwrap();

    assert_eq!(service.name, "api");
    assert_eq!(service.common.region, "eu-west-1");
}

#[test]
fn test_sequence_growth_stops_at_first_gap() {
    let registry = registry_with(&[
        ("hosts[0]", "a"),
        ("hosts[1]", "b"),
        ("hosts[3]", "d"),
    ]);

    let hosts = registry.get_string_vec("hosts").unwrap();
    assert_eq!(hosts, vec!["a", "b"]);
}

#[test]
fn test_sequence_absent_leaves_destination() {
    let registry = registry_with(&[]);

    let mut hosts = vec!["preset".to_string()];
    let err = registry.get("hosts", &mut hosts).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(hosts, vec!["preset"]);
}

#[test]
fn test_option_rebind_terminates_and_refines() {
    let registry = registry_with(&[("limit", "10")]);

    let mut limit: Option<i64> = Some(1);
    registry.get("limit", &mut limit).unwrap();
    assert_eq!(limit, Some(10));

    // A second bind over the filled slot behaves identically.
    registry.get("limit", &mut limit).unwrap();
    assert_eq!(limit, Some(10));
}

#[test]
fn test_option_record_installed_only_on_success() {
    let registry = registry_with(&[("db.name", "orders")]);

    let mut slot: Option<Replica> = None;
    let err = registry.get("absent", &mut slot).unwrap_err();
    assert!(err.is_not_found());
    assert!(slot.is_none());

    let mut db_slot: Option<Database> = None;
    registry.get("db", &mut db_slot).unwrap();
    assert_eq!(db_slot.unwrap().name, "orders");
}

#[test]
fn test_any_value_slot() {
    let registry = registry_with(&[("v", "42")]);

    let mut untyped = AnyValue::Unset;
    registry.get("v", &mut untyped).unwrap();
    assert_eq!(untyped, AnyValue::Str("42".to_string()));

    let mut typed = AnyValue::Uint(0);
    registry.get("v", &mut typed).unwrap();
    assert_eq!(typed, AnyValue::Uint(42));
}

#[test]
#[cfg(all(feature = "cli", feature = "yaml"))]
fn test_bind_record_with_cli_override() {
    let yaml = "server:\n  host: 127.0.0.1\n  port: 8080\n";
    let registry = ConfigRegistry::builder()
        .with_cli_args(vec!["--server.port=9090"])
        .with_source(Box::new(MapAdapter::from_yaml("doc", yaml).unwrap()))
        .build();

    #[derive(Default)]
    struct Server {
        host: String,
        port: i64,
    }
    layercfg::bind_fields!(Server { host, port });

    let mut server = Server::default();
    registry.get("server", &mut server).unwrap();
    assert_eq!(server.host, "127.0.0.1");
    assert_eq!(server.port, 9090);
}
