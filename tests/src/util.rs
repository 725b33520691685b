use std::io::Write;

use serde_json::{Value, json};
use tempfile::NamedTempFile;

pub fn export_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp export");
    file.write_all(content.as_bytes()).expect("write temp export");
    file
}

pub fn host(ip: &str, risk_level: Option<&str>, services: Value) -> Value {
    let mut host = json!({
        "ip": ip,
        "location": {"country": "Testland"},
        "services": services,
    });
    if let Some(risk_level) = risk_level {
        host["threat_intelligence"] = json!({ "risk_level": risk_level });
    }
    host
}

pub fn export(hosts: Vec<Value>) -> String {
    json!({ "hosts": hosts }).to_string()
}
