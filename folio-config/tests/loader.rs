use std::fs;
use std::path::PathBuf;

use folio_carousel::PauseMode;
use folio_config::{
    ConfigGuardRailError, ConfigLoadError, ConfigLoader, ConfigSource,
    EnvConfig, SiteConfig,
};
use tempfile::TempDir;

fn isolated(root: &TempDir) -> ConfigLoader {
    ConfigLoader::new()
        .with_search_root(root.path())
        .with_env(EnvConfig::default())
}

#[test]
fn falls_back_to_presets() {
    let root = TempDir::new().unwrap();
    let load = isolated(&root).load().unwrap();
    assert_eq!(load.source, ConfigSource::Default);
    assert_eq!(load.config, SiteConfig::default());
    assert!(load.warnings.is_empty());
}

#[test]
fn picks_up_default_toml_file() {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join("folio.toml"),
        "[certificates]\nautoplay_interval_ms = 7000\n",
    )
    .unwrap();

    let load = isolated(&root).load().unwrap();
    assert_eq!(load.source, ConfigSource::File(root.path().join("folio.toml")));
    assert_eq!(load.config.certificates.autoplay_interval_ms, 7_000);
    assert_eq!(load.config.experience.autoplay_interval_ms, 4_000);
}

#[test]
fn nested_default_json_file_is_found() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("config")).unwrap();
    let path = root.path().join("config/folio.json");
    fs::write(&path, r#"{ "experience": { "pause_mode": "independent" } }"#)
        .unwrap();

    let load = isolated(&root).load().unwrap();
    assert_eq!(load.source, ConfigSource::File(path));
    assert_eq!(load.config.experience.pause_mode, PauseMode::Independent);
}

#[test]
fn env_path_beats_default_files() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("folio.toml"), "[experience]\nlabel = \"a\"\n")
        .unwrap();
    let custom = root.path().join("custom.conf");
    fs::write(&custom, "[experience]\nlabel = \"b\"\n").unwrap();

    let load = ConfigLoader::new()
        .with_search_root(root.path())
        .with_env(EnvConfig {
            config_path: Some(custom.clone()),
            config_json: Some(r#"{ "experience": { "label": "c" } }"#.into()),
        })
        .load()
        .unwrap();
    assert_eq!(load.source, ConfigSource::EnvPath(custom));
    assert_eq!(load.config.experience.label, "b");
}

#[test]
fn inline_json_beats_default_files() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("folio.toml"), "[experience]\nlabel = \"a\"\n")
        .unwrap();

    let load = ConfigLoader::new()
        .with_search_root(root.path())
        .with_env(EnvConfig {
            config_path: None,
            config_json: Some(r#"{ "experience": { "label": "c" } }"#.into()),
        })
        .load()
        .unwrap();
    assert_eq!(load.source, ConfigSource::EnvInline);
    assert_eq!(load.config.experience.label, "c");
}

#[test]
fn explicit_path_must_exist() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("nope.toml");
    let err = isolated(&root)
        .with_config_path(&missing)
        .load()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::MissingConfig { path } if path == missing
    ));
}

#[test]
fn zero_interval_is_a_guard_rail_error() {
    let root = TempDir::new().unwrap();
    let path = root.path().join("zero.toml");
    fs::write(&path, "[certificates]\nautoplay_interval_ms = 0\n").unwrap();

    let err = isolated(&root).with_config_path(&path).load().unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::ZeroAutoplayInterval {
            section: "certificates"
        })
    ));
}

#[test]
fn malformed_toml_reports_the_file() {
    let root = TempDir::new().unwrap();
    let path = root.path().join("broken.toml");
    fs::write(&path, "[certificates\n").unwrap();

    let err = isolated(&root).with_config_path(&path).load().unwrap_err();
    assert!(matches!(err, ConfigLoadError::ParseToml { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn warnings_surface_alongside_the_config() {
    let root = TempDir::new().unwrap();
    let path: PathBuf = root.path().join("folio.json");
    fs::write(
        &path,
        r#"{ "certificates": { "resume_delay_ms": 1000 } }"#,
    )
    .unwrap();

    let load = isolated(&root).load().unwrap();
    assert_eq!(load.warnings.len(), 1);
    assert!(load.warnings.items[0].message.starts_with("certificates:"));
}
