use std::fs;

use flipstone::{load_config_from_json, parse_config, SearchConfig, Weights};

#[test]
fn parse_full_config() {
    let data = r#"{
        "depth": 3,
        "weights": { "corner": 9, "edge": 2, "danger": -6, "interior": 0 }
    }"#;
    let config = parse_config(data).expect("valid config");
    assert_eq!(config.depth, 3);
    assert_eq!(
        config.weights,
        Weights {
            corner: 9,
            edge: 2,
            danger: -6,
            interior: 0
        }
    );
}

#[test]
fn omitted_weights_use_defaults() {
    let config = parse_config(r#"{ "depth": 5 }"#).expect("valid config");
    assert_eq!(config.depth, 5);
    assert_eq!(config.weights, Weights::default());
}

#[test]
fn zero_depth_is_rejected() {
    let err = parse_config(r#"{ "depth": 0 }"#).unwrap_err();
    assert!(err.contains("depth"), "unexpected error: {err}");
}

#[test]
fn malformed_json_is_reported() {
    let err = parse_config("{ depth: }").unwrap_err();
    assert!(err.starts_with("Failed to parse JSON"), "unexpected error: {err}");
}

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join("flipstone_config_test.json");
    fs::write(&path, r#"{ "depth": 2 }"#).expect("write temp config");

    let config = load_config_from_json(&path).expect("load config");
    assert_eq!(config, SearchConfig {
        depth: 2,
        weights: Weights::default()
    });

    fs::remove_file(&path).ok();
}

#[test]
fn missing_file_is_reported() {
    let err = load_config_from_json("does-not-exist.json").unwrap_err();
    assert!(err.starts_with("Failed to read JSON"), "unexpected error: {err}");
}
