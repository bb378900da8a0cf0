//! Integration tests for Settings config loading with layered precedence.
//!
//! Precedence: compiled defaults → global config → local config → env vars.
//! These tests use temp directories for the local layer; a developer's
//! global config could shadow individual values, so assertions stick to
//! keys the tests control.

use std::fs;

use tempfile::TempDir;

use orggen::config::Settings;
use orggen::domain::error::GenerationError;
use orggen::domain::params::GenerationParams;

#[test]
fn given_no_config_when_loading_then_uses_compiled_defaults() {
    let empty = TempDir::new().unwrap();

    let settings = Settings::load(Some(empty.path())).expect("load settings");

    assert_eq!(settings.default_model, "flexible");
    assert_eq!(settings.flexible.total, 50);
    assert_eq!(settings.flexible.ratio, 4);
    assert_eq!(settings.fixed.levels, 3);
    assert_eq!(settings.strict.ratio, 3);
}

#[test]
fn given_local_config_when_loading_then_overrides_scalars() {
    let dir = TempDir::new().unwrap();
    let local_config = r#"
default_model = "strict"

[flexible]
total = 80
"#;
    fs::write(dir.path().join("orggen.toml"), local_config).unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.default_model, "strict");
    assert_eq!(settings.flexible.total, 80);
    // Unspecified keys inherit the defaults.
    assert_eq!(settings.flexible.ratio, 4);
    assert_eq!(settings.flexible.max, 6);
}

#[test]
fn given_env_override_when_loading_then_env_wins_over_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("orggen.toml"), "[fixed]\ntotal = 20\n").unwrap();
    std::env::set_var("ORGGEN_FIXED__TOTAL", "33");

    let settings = Settings::load(Some(dir.path())).expect("load settings");
    std::env::remove_var("ORGGEN_FIXED__TOTAL");

    assert_eq!(settings.fixed.total, 33);
}

#[test]
fn given_default_model_when_resolving_params_then_uses_configured_section() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("orggen.toml"),
        "default_model = \"strict\"\n\n[strict]\ntotal = 21\nratio = 4\n",
    )
    .unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");
    let params = settings.default_params().expect("resolve params");

    assert_eq!(
        params,
        GenerationParams::Strict {
            total: 21,
            ratio: 4
        }
    );
}

#[test]
fn given_bogus_default_model_when_resolving_params_then_fails_with_model_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("orggen.toml"), "default_model = \"bogus\"\n").unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");
    let result = settings.default_params();

    assert!(matches!(
        result,
        Err(GenerationError::UnknownModel(tag)) if tag == "bogus"
    ));
}
