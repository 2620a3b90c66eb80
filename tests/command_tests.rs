use esperf_collapse::aggregator::{CollapseOptions, QueryLabel};
use esperf_collapse::commands::{execute_collapse, validate_args, CollapseArgs};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

const RESPONSE: &str = include_str!("fixtures/search_response.json");

fn write_input(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_collapse_multiple_files_sums() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_input(&dir, "a.json", RESPONSE);
    let b = write_input(&dir, "b.json", RESPONSE);
    let output = dir.path().join("out.folded");

    let args = CollapseArgs {
        inputs: vec![a, b],
        output: Some(output.clone()),
        options: CollapseOptions::new()
            .with_detail("".parse().unwrap())
            .with_breakdown(false),
        no_warning: true,
    };

    validate_args(&args).unwrap();
    execute_collapse(&args).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    let first_line = written.lines().next().unwrap();
    assert_eq!(first_line, "search;rewrite 10000");
}

#[test]
fn test_malformed_file_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_input(&dir, "good.json", RESPONSE);
    let bad = write_input(&dir, "bad.json", r#"{ "shards": [ { "cluster": "c" } ] }"#);
    let output = dir.path().join("out.folded");

    let args = CollapseArgs {
        inputs: vec![good, bad],
        output: Some(output.clone()),
        ..Default::default()
    };

    let err = execute_collapse(&args).unwrap_err();
    assert!(format!("{:#}", err).contains("bad.json"));
    assert!(!output.exists());
}

#[test]
fn test_invalid_json_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let bad = write_input(&dir, "bad.json", "not json at all");

    let args = CollapseArgs {
        inputs: vec![bad],
        output: Some(dir.path().join("out.folded")),
        ..Default::default()
    };

    assert!(execute_collapse(&args).is_err());
}

#[test]
fn test_description_mode_writes_descriptions() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "in.json", RESPONSE);
    let output = dir.path().join("out.folded");

    let args = CollapseArgs {
        inputs: vec![input],
        output: Some(output.clone()),
        options: CollapseOptions::new()
            .with_detail("s".parse().unwrap())
            .with_query_label(QueryLabel::Description),
        no_warning: false,
    };

    execute_collapse(&args).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("s1;search;query;title:rust 80\n"));
}

#[test]
fn test_validate_args_missing_input() {
    let args = CollapseArgs {
        inputs: vec![PathBuf::from("does/not/exist.json")],
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}
