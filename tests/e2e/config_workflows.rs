//! E2E tests: config file on disk to formatted query

use ftsq_formatter::{AppConfig, Formatter};
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("app.config.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_configured_fields_workflow() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{
            "ecmHost": "http://localhost:8080",
            "search": { "aca:fields": ["cm:name", "cm:title"] }
        }"#,
    );

    let formatter = Formatter::from_config(&AppConfig::load(&path).unwrap());

    assert_eq!(
        formatter.format(Some("hello")).as_deref(),
        Some(r#"(cm:name:"hello*" OR cm:title:"hello*")"#)
    );
    assert_eq!(
        formatter.format(Some("big AND yellow AND banana")).as_deref(),
        Some(concat!(
            r#"(cm:name:"big*" OR cm:title:"big*") AND "#,
            r#"(cm:name:"yellow*" OR cm:title:"yellow*") AND "#,
            r#"(cm:name:"banana*" OR cm:title:"banana*")"#
        ))
    );
}

#[test]
fn test_unconfigured_fields_workflow() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "search": { "aca:fields": null } }"#);

    let formatter = Formatter::from_config(&AppConfig::load(&path).unwrap());

    assert_eq!(
        formatter.format(Some("hello")).as_deref(),
        Some(r#"(cm:name:"hello*")"#)
    );
}

#[test]
fn test_config_reread_picks_up_changes() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{ "search": { "aca:fields": ["cm:name"] } }"#);
    let before = Formatter::from_config(&AppConfig::load(&path).unwrap());

    write_config(&dir, r#"{ "search": { "aca:fields": ["cm:title"] } }"#);
    let after = Formatter::from_config(&AppConfig::load(&path).unwrap());

    assert_eq!(before.format(Some("a")).as_deref(), Some(r#"(cm:name:"a*")"#));
    assert_eq!(after.format(Some("a")).as_deref(), Some(r#"(cm:title:"a*")"#));
}

#[test]
fn test_invalid_input_workflow() {
    let formatter = Formatter::from_config(&AppConfig::default());

    assert_eq!(formatter.format(None), None);
    assert_eq!(formatter.format(Some("")), None);
    assert_eq!(
        formatter.format(Some(r#""Hello World""#)).as_deref(),
        Some(r#""Hello World""#)
    );
}
