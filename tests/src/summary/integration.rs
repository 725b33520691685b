#![cfg(test)]
use scanlens_common::error::LoadError;
use scanlens_core::{SAMPLE_DATA, loader, metrics::Metrics};
use serde_json::json;

use crate::util::{export, export_file, host};

/// Loads the bundled sample from disk, the way the CLI does, and checks the headline numbers.
#[test]
fn sample_export_from_disk() {
    let file = export_file(SAMPLE_DATA);

    let dataset = loader::from_path(file.path()).expect("sample export should load");
    let metrics = Metrics::extract(&dataset);

    assert_eq!(metrics.total_hosts, 3);
    assert_eq!(metrics.critical_count(), 1);
    assert_eq!(metrics.high_count(), 1);
    assert_eq!(metrics.count_for("medium"), 1);
    assert_eq!(metrics.unrated_hosts, 0);
}

#[test]
fn partially_rated_export() {
    let content = export(vec![
        host("10.0.0.1", Some("critical"), json!([{"port": 22, "vulnerabilities": [{"cve_id": "CVE-1"}]}])),
        host("10.0.0.2", Some("critical"), json!([])),
        host("10.0.0.3", None, json!([{"port": 80}, {"port": 443}])),
        json!({"ip": "10.0.0.4"}),
    ]);

    let dataset = loader::from_str(&content).unwrap();
    let metrics = Metrics::extract(&dataset);

    assert_eq!(metrics.total_hosts, 4);
    assert_eq!(metrics.critical_count(), 2);
    assert_eq!(metrics.unrated_hosts, 2);
    assert_eq!(metrics.total_services, 3);
    assert_eq!(metrics.total_vulnerabilities, 1);
    assert_eq!(metrics.hosts_with_vulnerabilities, 1);
}

#[test]
fn metrics_serialize_for_reporting() {
    let dataset = loader::from_str(SAMPLE_DATA).unwrap();
    let value = serde_json::to_value(Metrics::extract(&dataset)).unwrap();

    assert_eq!(value["total_hosts"], 3);
    assert_eq!(value["risk_levels"]["critical"], 1);
    assert_eq!(value["ports"]["443"], 2);
}

#[test]
fn truncated_upload_is_malformed() {
    let content = export(vec![host("1.1.1.1", Some("low"), json!([]))]);
    let truncated = &content[..content.len() - 2];

    let err = loader::from_reader(truncated.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::MalformedInput(_)), "unexpected error: {err}");
}

#[test]
fn wrong_shape_is_schema_error() {
    for content in [r#"{}"#, r#"{"hosts": null}"#, r#"{"hosts": "1.1.1.1"}"#, "42"] {
        let err = loader::from_str(content).unwrap_err();
        assert!(err.is_schema(), "{content} gave {err}");
    }
}
