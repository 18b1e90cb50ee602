//! Configuration loading tests.

use std::fs;
use std::path::Path;

use xreflect_foundation::{ErrorKind, Type};
use xreflect_runtime::{Config, Session};

const CONFIG: &str = r#"{
    "imports": {
        "Player": "org.bukkit.entity.Player",
        "Players": "org.bukkit.entity.Player[]"
    },
    "aliases": [
        ["nms", "net.minecraft.server.v1_8_R3"],
        ["obc", "org.bukkit.craftbukkit.v1_8_R3"]
    ],
    "classes": ["org.bukkit.entity.Player"]
}"#;

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join("xreflect_test_config.json");
    fs::write(&path, CONFIG).unwrap();

    let config = Config::load(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(config.imports.len(), 2);
    assert_eq!(config.aliases.len(), 2);
    assert_eq!(config.classes, vec!["org.bukkit.entity.Player"]);
}

#[test]
fn missing_file_is_io_error() {
    let err = Config::load(Path::new("/nonexistent/xreflect.json")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(err.to_string().contains("/nonexistent/xreflect.json"));
}

#[test]
fn malformed_json_is_config_error() {
    let err = Config::from_json("{ \"imports\": [").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Config(_)));
    assert!(!err.is_parse_error());
}

#[test]
fn session_from_config() {
    let config = Config::from_json(CONFIG).unwrap();
    let session = Session::from_config(&config).unwrap();

    assert_eq!(
        session.import_table().get("Players"),
        Some(&Type::array(Type::class("org.bukkit.entity.Player"), 1))
    );
    assert_eq!(session.aliases().apply("obc.entity"), "org.bukkit.craftbukkit.v1_8_R3.entity");
}

#[test]
fn permissive_config_accepts_unregistered_imports() {
    let strict = Config::from_json(r#"{ "imports": { "W": "com.example.Widget" } }"#).unwrap();
    assert!(Session::from_config(&strict).is_err());

    let permissive = Config {
        permissive: true,
        ..strict
    };
    let session = Session::from_config(&permissive).unwrap();
    assert_eq!(
        session.import_table().get("W"),
        Some(&Type::class("com.example.Widget"))
    );
}
