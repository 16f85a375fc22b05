use pantry_domain::config::{ApiConfig, CatalogConfig, ServerConfig};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4583);
    assert!(server.address.is_unspecified());
    assert!(server.ssl.is_none());

    let catalog = CatalogConfig::default();
    assert!(catalog.seed.is_none());
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "127.0.0.1", "port": 8080 },
        "catalog": { "seed": "/srv/pantry/catalog.json" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert!(cfg.server.address.is_loopback());
    assert_eq!(cfg.catalog.seed, Some(PathBuf::from("/srv/pantry/catalog.json")));
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({ "server": { "port": 9000 } })).unwrap();
    assert_eq!(cfg.server.port, 9000);
    assert!(cfg.catalog.seed.is_none());
}

#[test]
fn clones_are_copy_on_write() {
    let original = ApiConfig::default();
    let mut changed = original.clone();
    changed.server.port = 1;

    assert_eq!(original.server.port, 4583);
    assert_eq!(changed.server.port, 1);
}

#[test]
fn socket_addr_joins_address_and_port() {
    let cfg: ApiConfig =
        serde_json::from_value(json!({ "server": { "address": "127.0.0.1", "port": 8081 } })).unwrap();
    assert_eq!(cfg.server.socket_addr().to_string(), "127.0.0.1:8081");
}
