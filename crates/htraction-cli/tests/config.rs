use htraction_cli::config::{
    HtractionConfig, LogFormat, load_config, load_or_default, read_config, save_config,
};

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = load_or_default(&dir.path().join("config.json")).unwrap();
    assert!(loaded.migrations.is_empty());
    let config = loaded.config;
    assert_eq!(config.config_version, 1);
    assert_eq!(config.log_format, LogFormat::Text);
    assert!(config.data_dir.is_none());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/config.json");
    let config = HtractionConfig {
        data_dir: Some(dir.path().join("data")),
        log_format: LogFormat::Json,
        ..HtractionConfig::default()
    };
    save_config(&path, &config).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(read_config(&path).unwrap().migrations.is_empty());
    assert_eq!(loaded.resolved_data_dir().unwrap(), dir.path().join("data"));
    assert!(!path.with_extension("json.tmp").exists());
}

#[cfg(unix)]
#[test]
fn saved_config_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_config(&path, &HtractionConfig::default()).unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "data_dir": "/tmp/htraction", "created_at": "2025-01-01T00:00:00Z" }"#,
    )
    .unwrap();

    let loaded = read_config(&path).unwrap();
    assert_eq!(loaded.migrations, ["v0 → v1 (added log_format)"]);
    let config = loaded.config;
    assert_eq!(config.config_version, 1);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.data_dir.as_deref(), Some(std::path::Path::new("/tmp/htraction")));
}

#[test]
fn newer_config_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 9, "created_at": "2025-01-01T00:00:00Z" }"#,
    )
    .unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "[]").unwrap();
    assert!(load_config(&path).is_err());
}
