#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::path::PathBuf;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.log_filter, "info");
    assert!(config.data_dir.ends_with("BudgetAdvisor") || config.data_dir.ends_with("budgetadvisor"));
}

#[test]
fn test_log_filter_from_env() {
    let config = Config::from_lookup(lookup_from(&[("BUDGETADVISOR_LOG", "debug")])).unwrap();
    assert_eq!(config.log_filter, "debug");
}

#[test]
fn test_blank_log_filter_uses_default() {
    let config = Config::from_lookup(lookup_from(&[("BUDGETADVISOR_LOG", "  ")])).unwrap();
    assert_eq!(config.log_filter, "info");
}

#[test]
fn test_export_dir_from_env() {
    let config =
        Config::from_lookup(lookup_from(&[("BUDGETADVISOR_EXPORT_DIR", "/tmp/exports")])).unwrap();
    assert_eq!(config.export_dir, PathBuf::from("/tmp/exports"));
}

#[test]
fn test_unrelated_secrets_are_ignored() {
    let with_token = Config::from_lookup(lookup_from(&[("HF_TOKEN", "hf_secret")])).unwrap();
    let without = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(with_token.log_filter, without.log_filter);
    assert_eq!(with_token.export_dir, without.export_dir);
}

#[test]
fn test_log_path_creates_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        log_filter: "info".into(),
        data_dir: dir.path().join("nested"),
        export_dir: dir.path().to_path_buf(),
    };
    let path = config.log_path().unwrap();
    assert!(dir.path().join("nested").is_dir());
    assert_eq!(path, dir.path().join("nested").join("budgetadvisor.log"));
}
