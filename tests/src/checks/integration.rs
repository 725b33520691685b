#![cfg(test)]
use scanlens_core::checks::{CheckContext, CheckSuite, Fixture};
use serde_json::json;

use crate::util::{export, export_file, host};

fn run_against(content: &str, expected_hosts: Option<usize>) -> Vec<bool> {
    let file = export_file(content);
    let ctx = CheckContext::new(Fixture::File(file.path().to_path_buf()), expected_hosts);
    CheckSuite::standard(ctx)
        .run()
        .outcomes
        .iter()
        .map(|o| o.passed())
        .collect()
}

#[test]
fn bundled_suite_passes() {
    let report = CheckSuite::standard(CheckContext::default()).run();
    assert_eq!(report.passed(), 4, "outcomes: {:?}", report.outcomes);
}

#[test]
fn complete_export_passes_with_expected_count() {
    let content = export(vec![
        host("192.0.2.1", Some("high"), json!([{"port": 443}])),
        host("192.0.2.2", Some("low"), json!([])),
    ]);

    assert_eq!(run_against(&content, Some(2)), vec![true; 4]);
    assert_eq!(run_against(&content, Some(3)), vec![false, true, true, true]);
}

#[test]
fn export_missing_keys_fails_loading_check_only() {
    let content = export(vec![json!({"ip": "192.0.2.1"})]);
    assert_eq!(run_against(&content, None), vec![false, true, true, true]);
}

#[test]
fn non_dataset_file_fails_both_file_checks() {
    assert_eq!(
        run_against(r#"{"results": []}"#, None),
        vec![false, true, true, false]
    );
}
