use items_api::config::{AppConfig, MongoSection, StorageBackendKind, StorageSection};
use items_api::storage::StorageConfig;

#[test]
fn defaults_target_local_mongodb() {
    let config = AppConfig::default();

    assert_eq!(config.server.port, 8080);
    assert!(config.server.expose_errors);

    let storage = config
        .storage_runtime()
        .expect("default configuration should be valid");
    assert_eq!(
        storage,
        StorageConfig::MongoDb {
            uri: "mongodb://localhost:27017".into(),
            database: "testdb".into(),
            collection: "items".into(),
        }
    );
}

#[test]
fn blank_mongodb_fields_fail_validation() {
    for (uri, database, collection) in [
        ("  ", "testdb", "items"),
        ("mongodb://localhost:27017", "", "items"),
        ("mongodb://localhost:27017", "testdb", " "),
    ] {
        let config = AppConfig {
            storage: StorageSection {
                backend: StorageBackendKind::MongoDb,
                mongodb: MongoSection {
                    uri: uri.into(),
                    database: database.into(),
                    collection: collection.into(),
                },
            },
            ..Default::default()
        };

        assert!(
            config.storage_runtime().is_err(),
            "Expected ({uri:?}, {database:?}, {collection:?}) to fail validation"
        );
    }
}

#[test]
fn memory_backend_ignores_mongodb_section() {
    let config = AppConfig {
        storage: StorageSection {
            backend: StorageBackendKind::Memory,
            mongodb: MongoSection {
                uri: String::new(),
                ..Default::default()
            },
        },
        ..Default::default()
    };

    assert_eq!(config.storage_runtime().unwrap(), StorageConfig::Memory);
}

#[test]
fn mongodb_fields_are_trimmed() {
    let config = AppConfig {
        storage: StorageSection {
            backend: StorageBackendKind::MongoDb,
            mongodb: MongoSection {
                uri: " mongodb://db:27017 ".into(),
                database: " shop ".into(),
                collection: " items ".into(),
            },
        },
        ..Default::default()
    };

    match config.storage_runtime().unwrap() {
        StorageConfig::MongoDb {
            uri,
            database,
            collection,
        } => {
            assert_eq!(uri, "mongodb://db:27017");
            assert_eq!(database, "shop");
            assert_eq!(collection, "items");
        }
        other => panic!("Unexpected storage config: {other:?}"),
    }
}

#[test]
fn environment_overrides_nested_keys() {
    // Only test in this binary that touches the process environment
    std::env::set_var("ITEMS_CONFIG", "does-not-exist.toml");
    std::env::set_var("ITEMS_SERVER__EXPOSE_ERRORS", "false");
    std::env::set_var("ITEMS_SERVER__PORT", "9090");
    std::env::set_var("ITEMS_STORAGE__BACKEND", "memory");

    let config = AppConfig::load().expect("environment configuration should load");

    std::env::remove_var("ITEMS_CONFIG");
    std::env::remove_var("ITEMS_SERVER__EXPOSE_ERRORS");
    std::env::remove_var("ITEMS_SERVER__PORT");
    std::env::remove_var("ITEMS_STORAGE__BACKEND");

    assert!(!config.server.expose_errors);
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.storage.backend, StorageBackendKind::Memory);
}
