use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::models::service::ServiceRecord;

/// Threat summary attached to a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThreatIntelligence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
}

/// One scanned host.
///
/// `location` is kept as raw JSON, its shape differs between scan sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostRecord {
    pub ip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub services: Vec<ServiceRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat_intelligence: Option<ThreatIntelligence>,
}

impl HostRecord {
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            ..Default::default()
        }
    }

    pub fn with_risk_level(mut self, risk_level: impl Into<String>) -> Self {
        self.threat_intelligence = Some(ThreatIntelligence {
            risk_level: Some(risk_level.into()),
        });
        self
    }

    pub fn with_service(mut self, service: ServiceRecord) -> Self {
        self.services.push(service);
        self
    }

    /// The host's risk label, if threat intelligence carries one.
    pub fn risk_level(&self) -> Option<&str> {
        self.threat_intelligence
            .as_ref()
            .and_then(|ti| ti.risk_level.as_deref())
    }

    /// `ip` parsed as an address. `None` when the string is not a valid IP.
    pub fn ip_addr(&self) -> Option<IpAddr> {
        self.ip.parse().ok()
    }

    pub fn vulnerability_count(&self) -> usize {
        self.services.iter().map(|s| s.vulnerabilities.len()).sum()
    }

    pub fn has_vulnerabilities(&self) -> bool {
        self.services.iter().any(ServiceRecord::is_vulnerable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::service::Vulnerability;

    #[test]
    fn missing_threat_intelligence_has_no_risk_level() {
        let host: HostRecord = serde_json::from_str(r#"{"ip": "1.1.1.1"}"#).unwrap();
        assert_eq!(host.risk_level(), None);
        assert!(host.services.is_empty());
        assert!(host.location.is_none());
    }

    #[test]
    fn empty_threat_intelligence_has_no_risk_level() {
        let host: HostRecord =
            serde_json::from_str(r#"{"ip": "1.1.1.1", "threat_intelligence": {}}"#).unwrap();
        assert!(host.threat_intelligence.is_some());
        assert_eq!(host.risk_level(), None);
    }

    #[test]
    fn null_services_mean_no_services() {
        let host: HostRecord =
            serde_json::from_str(r#"{"ip": "1.1.1.1", "services": null, "threat_intelligence": null}"#)
                .unwrap();
        assert!(host.services.is_empty());
        assert!(!host.has_vulnerabilities());
        assert_eq!(host.risk_level(), None);
    }

    #[test]
    fn risk_level_is_read_verbatim() {
        let host = HostRecord::new("10.0.0.1").with_risk_level("Critical");
        assert_eq!(host.risk_level(), Some("Critical"));
    }

    #[test]
    fn ip_addr_parses_v4_and_v6() {
        assert!(HostRecord::new("192.168.1.5").ip_addr().is_some());
        assert!(HostRecord::new("::1").ip_addr().is_some());
        assert!(HostRecord::new("not-an-ip").ip_addr().is_none());
    }

    #[test]
    fn vulnerability_count_spans_services() {
        let host = HostRecord::new("1.1.1.1")
            .with_service(
                ServiceRecord::new(22)
                    .with_vulnerability(Vulnerability::new("CVE-2023-0001"))
                    .with_vulnerability(Vulnerability::new("CVE-2023-0002")),
            )
            .with_service(ServiceRecord::new(80))
            .with_service(ServiceRecord::new(443).with_vulnerability(Vulnerability::new("CVE-2023-0003")));

        assert_eq!(host.vulnerability_count(), 3);
        assert!(host.has_vulnerabilities());
    }

    #[test]
    fn location_is_kept_opaque() {
        let host: HostRecord = serde_json::from_str(
            r#"{"ip": "1.1.1.1", "location": {"country": "DE", "coordinates": [1, 2]}}"#,
        )
        .unwrap();
        let location = host.location.unwrap();
        assert_eq!(location["country"], "DE");
    }
}
