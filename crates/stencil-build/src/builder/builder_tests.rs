#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;

const SCHEMA: &str = r#"[
    { "name": "User", "props": [
        { "name": "Id", "type": "int", "key": true },
        { "name": "Name", "type": "string" }
    ] }
]"#;

const INVALID_SCHEMA: &str = r#"[
    { "name": "User", "props": [{ "name": "Id", "type": "int", "key": true }] },
    { "name": "Log", "props": [{ "name": "Line", "type": "string" }] }
]"#;

fn schema_dir(text: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("api.json"), text).unwrap();
    dir
}

#[test]
fn Builder___generate___writes_into_out_dir() {
    let dir = schema_dir(SCHEMA);
    let out = dir.path().join("out");

    let report = Builder::new()
        .schema(dir.path().join("api.json"))
        .out_dir(&out)
        .emit_directives(false)
        .generate()
        .unwrap();

    assert_eq!(report.artifacts.len(), 2);
    let user = fs::read_to_string(out.join("user_api.generated.rs")).unwrap();
    assert!(user.starts_with("// @generated"));
    assert!(out.join("repositories.generated.rs").exists());
}

#[test]
fn Builder___generate___without_inputs___is_error() {
    let dir = TempDir::new().unwrap();

    let err = Builder::new().out_dir(dir.path()).generate().unwrap_err();

    assert!(err.to_string().contains("No inputs"));
}

#[test]
fn Builder___deny_failures___fails_on_skipped_entity() {
    let dir = schema_dir(INVALID_SCHEMA);
    let mut config = GeneratorConfig::default();
    config.api.on_invalid_entity = stencil_core::InvalidEntityPolicy::Skip;

    let result = Builder::new()
        .schema(dir.path().join("api.json"))
        .config(config)
        .out_dir(dir.path().join("out"))
        .emit_directives(false)
        .deny_failures(true)
        .generate();

    assert!(result.is_err());
    assert!(dir.path().join("out/user_api.generated.rs").exists());
}

#[test]
fn Builder___skip_policy___keeps_valid_entities() {
    let dir = schema_dir(INVALID_SCHEMA);
    let mut config = GeneratorConfig::default();
    config.api.on_invalid_entity = stencil_core::InvalidEntityPolicy::Skip;

    let report = Builder::new()
        .schema(dir.path().join("api.json"))
        .config(config)
        .out_dir(dir.path().join("out"))
        .emit_directives(false)
        .generate()
        .unwrap();

    assert_eq!(report.failures.len(), 1);
    assert!(report.artifact("log_api.generated.rs").is_none());
}

#[test]
fn Builder___manifest___loads_inputs_and_config() {
    let dir = schema_dir(INVALID_SCHEMA);
    let manifest = dir.path().join("stencil.toml");
    fs::write(
        &manifest,
        "[inputs]\nschema = \"api.json\"\n\n[generator.api]\non_invalid_entity = \"skip\"\n",
    )
    .unwrap();

    let builder = Builder::new().manifest(&manifest).unwrap();
    let directives = builder.directives();
    let report = builder
        .out_dir(dir.path().join("out"))
        .emit_directives(false)
        .generate()
        .unwrap();

    assert_eq!(report.failures.len(), 1);
    assert_eq!(
        directives,
        vec![
            format!("cargo:rerun-if-changed={}", manifest.display()),
            format!(
                "cargo:rerun-if-changed={}",
                dir.path().join("api.json").display()
            ),
        ]
    );
}

#[test]
fn Builder___manifest___invalid_manifest___is_error() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("stencil.toml");
    fs::write(&manifest, "[generator]\nruntime_path = \"::stencil\"\n").unwrap();

    assert!(Builder::new().manifest(&manifest).is_err());
}

#[test]
fn Builder___directives___cover_each_input() {
    let builder = Builder::new().schema("api.json").sources("src");

    assert_eq!(
        builder.directives(),
        vec![
            "cargo:rerun-if-changed=api.json".to_string(),
            "cargo:rerun-if-changed=src".to_string(),
        ]
    );
}
