use serde::{Deserialize, Serialize};

/// A CVE reported against a service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub cve_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvss_score: Option<f64>,
}

impl Vulnerability {
    pub fn new(cve_id: impl Into<String>) -> Self {
        Self {
            cve_id: cve_id.into(),
            ..Default::default()
        }
    }
}

/// A service exposed on a host port.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub vulnerabilities: Vec<Vulnerability>,
}

impl ServiceRecord {
    pub fn new(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    pub fn with_vulnerability(mut self, vulnerability: Vulnerability) -> Self {
        self.vulnerabilities.push(vulnerability);
        self
    }

    pub fn is_vulnerable(&self) -> bool {
        !self.vulnerabilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_without_vulnerabilities_key() {
        let service: ServiceRecord = serde_json::from_str(r#"{"port": 80}"#).unwrap();
        assert_eq!(service.port, 80);
        assert!(!service.is_vulnerable());
    }

    #[test]
    fn null_vulnerabilities_mean_none() {
        let service: ServiceRecord =
            serde_json::from_str(r#"{"port": 443, "vulnerabilities": null}"#).unwrap();
        assert!(service.vulnerabilities.is_empty());
        assert!(!service.is_vulnerable());
    }

    #[test]
    fn non_list_vulnerabilities_are_rejected() {
        assert!(serde_json::from_str::<ServiceRecord>(r#"{"port": 443, "vulnerabilities": "none"}"#).is_err());
    }

    #[test]
    fn unknown_vulnerability_fields_are_ignored() {
        let service: ServiceRecord = serde_json::from_str(
            r#"{"port": 22, "service_name": "SSH",
                "vulnerabilities": [{"cve_id": "CVE-123", "severity": "high", "cvss_score": 7.5, "exploit": true}]}"#,
        )
        .unwrap();
        assert_eq!(service.service_name.as_deref(), Some("SSH"));
        assert_eq!(service.vulnerabilities[0].cve_id, "CVE-123");
        assert_eq!(service.vulnerabilities[0].cvss_score, Some(7.5));
    }

    #[test]
    fn port_out_of_range_is_rejected() {
        assert!(serde_json::from_str::<ServiceRecord>(r#"{"port": -1}"#).is_err());
        assert!(serde_json::from_str::<ServiceRecord>(r#"{"port": 70000}"#).is_err());
    }
}
