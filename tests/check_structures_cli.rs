//! End-to-end tests for the `check_structures` binary

use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

const DEFAULT_DOMAIN: &str = "data/domains/default.toml";

/// Two structures: well separated squares, then two squares 2 apart
const POPULATION: &str = r#"[
    {"polygons": [
        {"id": "a", "points": [
            {"kind": "planar", "x": 10, "y": 10}, {"kind": "planar", "x": 15, "y": 10},
            {"kind": "planar", "x": 15, "y": 15}, {"kind": "planar", "x": 10, "y": 15},
            {"kind": "planar", "x": 10, "y": 10}]},
        {"id": "b", "points": [
            {"kind": "planar", "x": 60, "y": 60}, {"kind": "planar", "x": 65, "y": 60},
            {"kind": "planar", "x": 65, "y": 65}, {"kind": "planar", "x": 60, "y": 65},
            {"kind": "planar", "x": 60, "y": 60}]}
    ]},
    {"polygons": [
        {"id": "c", "points": [
            {"kind": "planar", "x": 10, "y": 10}, {"kind": "planar", "x": 15, "y": 10},
            {"kind": "planar", "x": 15, "y": 15}, {"kind": "planar", "x": 10, "y": 15},
            {"kind": "planar", "x": 10, "y": 10}]},
        {"id": "d", "points": [
            {"kind": "planar", "x": 17, "y": 10}, {"kind": "planar", "x": 22, "y": 10},
            {"kind": "planar", "x": 22, "y": 15}, {"kind": "planar", "x": 17, "y": 15},
            {"kind": "planar", "x": 17, "y": 10}]}
    ]}
]"#;

const INVERTED_DOMAIN: &str = r#"
name = "inverted"

[bounds]
min_x = 100.0
max_x = 0.0
min_y = 0.0
max_y = 100.0
"#;

/// Write `content` to a uniquely named file in the temp directory
fn temp_file(suffix: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("polycheck-{}{}", uuid::Uuid::new_v4(), suffix));
    fs::write(&path, content).unwrap();
    path
}

fn check_structures(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_check_structures"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn test_json_report_shape() {
    let structures = temp_file(".json", POPULATION);
    let output = check_structures(&[
        "--domain",
        DEFAULT_DOMAIN,
        "--structures",
        structures.to_str().unwrap(),
    ]);
    fs::remove_file(&structures).ok();

    // violating structures are reported, not failed
    assert!(output.status.success());

    let results: Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 2);

    for (i, result) in results.iter().enumerate() {
        let keys: Vec<&str> = result.as_object().unwrap().keys().map(String::as_str).collect();
        for key in ["index", "polygons", "admissible", "violated", "report"] {
            assert!(keys.contains(&key), "missing {key} in {result}");
        }
        assert_eq!(result["index"], i);
        assert_eq!(result["polygons"], 2);
        assert_eq!(result["report"]["results"].as_array().unwrap().len(), 5);
    }

    // neither structure has an intersecting pair, which the intersection check flags
    assert_eq!(results[0]["admissible"], false);
    assert_eq!(results[0]["violated"], serde_json::json!(["intersection"]));
    assert_eq!(
        results[1]["violated"],
        serde_json::json!(["intersection", "too_close"])
    );
}

#[test]
fn test_only_selects_constraints_for_text_output() {
    let structures = temp_file(".json", POPULATION);
    let output = check_structures(&[
        "-d",
        DEFAULT_DOMAIN,
        "-s",
        structures.to_str().unwrap(),
        "--only",
        "too_close,unclosed_poly",
        "--format",
        "text",
    ]);
    fs::remove_file(&structures).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "#0 (2 polygons): too_close=0 unclosed_poly=0",
            "#1 (2 polygons): too_close=1 unclosed_poly=0",
        ]
    );
}

#[test]
fn test_unknown_constraint_fails() {
    let structures = temp_file(".json", POPULATION);
    let output = check_structures(&[
        "-d",
        DEFAULT_DOMAIN,
        "-s",
        structures.to_str().unwrap(),
        "--only",
        "too_close,too_far",
    ]);
    fs::remove_file(&structures).ok();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_strict_domain_rejects_inverted_bounds() {
    let domain = temp_file(".toml", INVERTED_DOMAIN);
    let structures = temp_file(".json", POPULATION);
    let domain_arg = domain.to_str().unwrap();
    let structures_arg = structures.to_str().unwrap();

    let lenient = check_structures(&["-d", domain_arg, "-s", structures_arg]);
    let strict = check_structures(&["-d", domain_arg, "-s", structures_arg, "--strict-domain"]);
    fs::remove_file(&domain).ok();
    fs::remove_file(&structures).ok();

    assert!(lenient.status.success());
    assert!(!strict.status.success());
    assert!(strict.stdout.is_empty());
}

#[test]
fn test_unreadable_inputs_fail() {
    let structures = temp_file(".json", POPULATION);
    let missing_domain = check_structures(&[
        "-d",
        "data/domains/does_not_exist.toml",
        "-s",
        structures.to_str().unwrap(),
    ]);
    fs::remove_file(&structures).ok();
    assert!(!missing_domain.status.success());

    let missing_structures = check_structures(&[
        "-d",
        DEFAULT_DOMAIN,
        "-s",
        "data/does_not_exist.json",
    ]);
    assert!(!missing_structures.status.success());

    let malformed = temp_file(".json", "[{\"polygons\": 3}]");
    let malformed_structures =
        check_structures(&["-d", DEFAULT_DOMAIN, "-s", malformed.to_str().unwrap()]);
    fs::remove_file(&malformed).ok();
    assert!(!malformed_structures.status.success());
}
