mod common;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use studyhub_catalog::cli::{self, execute, load_catalog, Command, Params};
use studyhub_catalog::core::snapshot;
use studyhub_catalog::{builtin_catalog, CatalogConfig, SharedRegistry, TopicRegistry};
use studyhub_model::Difficulty;
use crate::common::{folder_to_use, topic};

fn sample_registry() -> SharedRegistry {
    let mut strings = topic("strings", "Strings");
    strings.difficulty = Difficulty::Advanced;
    Arc::new(TopicRegistry::new(vec![topic("arrays", "Arrays"), strings]).unwrap())
}

fn run(command: Command, registry: &SharedRegistry) -> (anyhow::Result<()>, String) {
    let mut out = Vec::new();
    let result = execute(&command, registry, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_list_prints_registration_order() {
    let (result, out) = run(Command::List { difficulty: None }, &sample_registry());
    result.unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("arrays"));
    assert!(lines[0].contains("Beginner"));
    assert!(lines[1].starts_with("strings"));
}

#[test]
fn test_list_filters_by_difficulty() {
    let command = Command::List { difficulty: Some(Difficulty::Advanced) };
    let (result, out) = run(command, &sample_registry());
    result.unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("strings"));
    assert!(lines[0].contains("Advanced"));
}

#[test]
fn test_difficulty_flag_parses_case_insensitively() {
    let params = Params::try_parse_from(["studyhub", "list", "--difficulty", "intermediate"])
        .expect("valid difficulty");
    assert_eq!(params.command, Command::List { difficulty: Some(Difficulty::Intermediate) });
}

#[test]
fn test_difficulty_flag_rejects_unknown_label() {
    let err = Params::try_parse_from(["studyhub", "list", "--difficulty", "expert"]).unwrap_err();
    assert!(err.to_string().contains("Unknown difficulty: expert"));
}

#[test]
fn test_show_prints_topic_json() {
    let (result, out) = run(Command::Show { id: "strings".to_string() }, &sample_registry());
    result.unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["id"], "strings");
    assert_eq!(value["title"], "Strings");
}

#[test]
fn test_show_unknown_topic_fails() {
    let (result, out) = run(Command::Show { id: "graphs".to_string() }, &sample_registry());
    assert_eq!(result.unwrap_err().to_string(), "topic not found: graphs");
    assert!(out.is_empty());
}

#[test]
fn test_export_to_file_round_trips() {
    let dir = folder_to_use();
    let path = dir.join("export.json");
    let registry = sample_registry();

    let (result, _) = run(Command::Export { out: Some(path.clone()) }, &registry);
    result.unwrap();

    let loaded = snapshot::load_from_file(&path).unwrap();
    assert_eq!(&loaded, registry.as_ref());
}

#[test]
fn test_export_to_stdout() {
    let (result, out) = run(Command::Export { out: None }, &sample_registry());
    result.unwrap();
    assert_eq!(snapshot::from_json(&out).unwrap().len(), 2);
}

#[test]
fn test_audit_fails_when_findings_exist() {
    let mut arrays = topic("arrays", "Arrays");
    arrays.problems = 9;
    let registry = Arc::new(TopicRegistry::new(vec![arrays]).unwrap());

    let (result, out) = run(Command::Audit, &registry);
    assert!(result.is_err());
    assert!(out.contains("declares 9 problems but lists 1"));
}

#[test]
fn test_audit_passes_on_clean_catalog() {
    let (result, out) = run(Command::Audit, &sample_registry());
    result.unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_load_catalog_prefers_snapshot_path() {
    let dir = folder_to_use();
    let path = dir.join("catalog.json");
    snapshot::save_to_file(&sample_registry(), &path).unwrap();

    let config = CatalogConfig { catalog_path: Some(path), ..CatalogConfig::default() };
    let registry = load_catalog(&config).unwrap();
    assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["arrays", "strings"]);
}

#[test]
fn test_load_catalog_defaults_to_builtin() {
    let registry = load_catalog(&CatalogConfig::default()).unwrap();
    assert!(registry.contains("dynamic-programming"));
}

#[test]
fn test_load_catalog_shares_the_builtin_registry() {
    let config = CatalogConfig { audit_on_load: false, ..CatalogConfig::default() };
    let first = load_catalog(&config).unwrap();
    let second = load_catalog(&config).unwrap();
    let builtin = builtin_catalog().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &builtin));
    assert_eq!(first.list_topics().as_ptr(), builtin.list_topics().as_ptr());
}

#[test]
fn test_run_uses_the_given_config() {
    let dir = folder_to_use();
    let path = dir.join("catalog.json");
    let only_graphs = TopicRegistry::new(vec![topic("graphs", "Graphs")]).unwrap();
    snapshot::save_to_file(&only_graphs, &path).unwrap();

    let config = CatalogConfig { catalog_path: Some(path), ..CatalogConfig::default() };
    let mut out = Vec::new();
    cli::run(&config, &Command::List { difficulty: None }, &mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("graphs"));
}

#[test]
fn test_load_catalog_reports_missing_snapshot() {
    let config = CatalogConfig {
        catalog_path: Some(PathBuf::from("/definitely/not/here.json")),
        ..CatalogConfig::default()
    };
    let err = load_catalog(&config).unwrap_err();
    assert!(format!("{err:#}").contains("loading catalog snapshot"));
}
