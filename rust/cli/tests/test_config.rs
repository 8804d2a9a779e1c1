//! Precedence of table configuration sources: defaults < file < env.

use std::io::Write;

use serde_json::Value;
use serial_test::serial;
use tempfile::NamedTempFile;

use tablestakes_cli::config::{self, ValueSource};

const KEYS: [&str; 4] = [
    "TABLESTAKES_CONFIG",
    "TABLESTAKES_MIN_BET",
    "TABLESTAKES_CHIP_UNIT",
    "TABLESTAKES_OPEN_FOLD",
];

fn clear_env() {
    for key in KEYS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("temp file");
    f.write_all(contents.as_bytes()).expect("write config");
    f
}

fn cfg_json() -> (i32, Value, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = tablestakes_cli::run(["tablestakes", "cfg"], &mut out, &mut err);
    let json = serde_json::from_slice(&out).unwrap_or(Value::Null);
    (code, json, String::from_utf8(err).unwrap())
}

#[test]
#[serial]
fn defaults_when_nothing_is_set() {
    clear_env();
    let (code, json, err) = cfg_json();
    assert_eq!(code, 0, "{err}");
    assert_eq!(json["min_bet"]["value"].as_u64(), Some(100));
    assert_eq!(json["min_bet"]["source"].as_str(), Some("default"));
    assert_eq!(json["chip_unit"]["value"].as_u64(), Some(50));
    assert_eq!(json["fold_when_not_facing_bet"]["value"].as_bool(), Some(false));
    assert!(err.is_empty());
}

#[test]
#[serial]
fn file_then_env() {
    clear_env();
    let file = config_file("min_bet = 200\nchip_unit = 25\nfold_when_not_facing_bet = true\n");
    unsafe {
        std::env::set_var("TABLESTAKES_CONFIG", file.path());
        std::env::set_var("TABLESTAKES_MIN_BET", "300");
    }

    let resolved = config::load_with_sources().unwrap();
    assert_eq!(resolved.config.min_bet, 300);
    assert_eq!(resolved.sources.min_bet, ValueSource::Env);
    assert_eq!(resolved.config.chip_unit, 25);
    assert_eq!(resolved.sources.chip_unit, ValueSource::File);
    assert!(resolved.config.fold_when_not_facing_bet);
    assert_eq!(resolved.sources.fold_when_not_facing_bet, ValueSource::File);

    let (code, json, _) = cfg_json();
    clear_env();
    assert_eq!(code, 0);
    assert_eq!(json["min_bet"]["source"].as_str(), Some("env"));
    assert_eq!(json["chip_unit"]["source"].as_str(), Some("file"));
}

#[test]
#[serial]
fn inconsistent_values_are_rejected() {
    clear_env();
    unsafe {
        std::env::set_var("TABLESTAKES_MIN_BET", "120");
    }
    let (code, _, err) = cfg_json();
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("not a multiple of chip_unit"), "{err}");
}

#[test]
#[serial]
fn unparsable_env_and_file_are_errors() {
    clear_env();
    unsafe {
        std::env::set_var("TABLESTAKES_OPEN_FOLD", "sometimes");
    }
    assert!(config::load().is_err());
    clear_env();

    let file = config_file("min_bet = \"lots\"\n");
    unsafe {
        std::env::set_var("TABLESTAKES_CONFIG", file.path());
    }
    let err = config::load().unwrap_err();
    clear_env();
    assert!(err.to_string().starts_with("cannot parse config file"), "{err}");
}

#[test]
#[serial]
fn missing_file_is_an_error() {
    clear_env();
    unsafe {
        std::env::set_var("TABLESTAKES_CONFIG", "/nonexistent/tablestakes.toml");
    }
    let (code, _, err) = cfg_json();
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("cannot read config file"), "{err}");
}
