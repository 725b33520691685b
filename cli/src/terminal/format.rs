use std::net::IpAddr;

use crate::terminal::colors;
use colored::*;
use scanlens_common::config::Config;
use scanlens_common::models::host::HostRecord;
use scanlens_common::models::service::ServiceRecord;
use scanlens_core::metrics;

pub type Detail = (String, ColoredString);

pub fn risk_color(label: &str) -> Color {
    match label.to_ascii_lowercase().as_str() {
        metrics::CRITICAL => colors::RISK_CRITICAL,
        metrics::HIGH => colors::RISK_HIGH,
        metrics::MEDIUM => colors::RISK_MEDIUM,
        metrics::LOW => colors::RISK_LOW,
        _ => colors::TEXT_DEFAULT,
    }
}

/// Masks everything after the network-identifying prefix of an address.
pub fn redact_ip(ip: &str) -> String {
    match ip.parse::<IpAddr>() {
        Ok(IpAddr::V4(ipv4_addr)) => format!("{}.x.x.x", ipv4_addr.octets()[0]),
        Ok(IpAddr::V6(ipv6_addr)) => format!("{:x}:x:x:x:x:x:x:x", ipv6_addr.segments()[0]),
        Err(_) => String::from("<redacted>"),
    }
}

pub fn ip_to_detail(host: &HostRecord, cfg: &Config) -> Detail {
    let (key, color) = match host.ip_addr() {
        Some(IpAddr::V6(_)) => ("IPv6", colors::IPV6_ADDR),
        Some(IpAddr::V4(_)) => ("IPv4", colors::IPV4_ADDR),
        None => ("IP", colors::TEXT_DEFAULT),
    };
    let value: String = if cfg.redact {
        redact_ip(&host.ip)
    } else {
        host.ip.clone()
    };
    (key.to_string(), value.color(color))
}

pub fn risk_to_detail(host: &HostRecord) -> Detail {
    let value: ColoredString = match host.risk_level() {
        Some(label) => label.to_uppercase().color(risk_color(label)).bold(),
        None => "unrated".color(colors::RISK_NONE),
    };
    ("Risk".to_string(), value)
}

pub fn service_to_detail(service: &ServiceRecord) -> Detail {
    let name: &str = service.service_name.as_deref().unwrap_or("unknown");
    let port: ColoredString = service.port.to_string().color(colors::PORT);
    let mut value: String = format!("{port}/{name}");

    if service.is_vulnerable() {
        let cves: String = service
            .vulnerabilities
            .iter()
            .map(|v| v.cve_id.as_str())
            .collect::<Vec<&str>>()
            .join(", ");
        value = format!("{value} {}", format!("[{cves}]").color(colors::CVE));
    }

    ("Port".to_string(), value.normal())
}

pub fn host_details(host: &HostRecord, cfg: &Config) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![ip_to_detail(host, cfg), risk_to_detail(host)];
    details.extend(host.services.iter().map(service_to_detail));
    details
}
