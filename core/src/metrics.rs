//! Aggregate metrics over a loaded dataset.
//!
//! Extraction is a single pass over the hosts. Every count is a sum over
//! hosts, so host order never changes the result.

use std::collections::{BTreeMap, BTreeSet};

use scanlens_common::models::dataset::Dataset;
use serde::Serialize;

pub const CRITICAL: &str = "critical";
pub const HIGH: &str = "high";
pub const MEDIUM: &str = "medium";
pub const LOW: &str = "low";

/// Display order for the well-known risk labels. Other labels follow alphabetically.
pub const KNOWN_RISK_LEVELS: [&str; 4] = [CRITICAL, HIGH, MEDIUM, LOW];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub total_hosts: usize,
    /// Hosts per risk label. Labels are matched exactly, including case.
    pub risk_levels: BTreeMap<String, usize>,
    /// Hosts without `threat_intelligence` or without a `risk_level`.
    pub unrated_hosts: usize,
    pub total_services: usize,
    pub total_vulnerabilities: usize,
    pub hosts_with_vulnerabilities: usize,
    pub unique_cves: usize,
    /// Services per port.
    pub ports: BTreeMap<u16, usize>,
}

impl Metrics {
    pub fn extract(dataset: &Dataset) -> Self {
        let mut metrics = Self {
            total_hosts: dataset.len(),
            ..Default::default()
        };
        let mut cves: BTreeSet<&str> = BTreeSet::new();

        for host in dataset {
            match host.risk_level() {
                Some(label) => *metrics.risk_levels.entry(label.to_owned()).or_insert(0) += 1,
                None => metrics.unrated_hosts += 1,
            }

            if host.has_vulnerabilities() {
                metrics.hosts_with_vulnerabilities += 1;
            }

            for service in &host.services {
                metrics.total_services += 1;
                *metrics.ports.entry(service.port).or_insert(0) += 1;
                metrics.total_vulnerabilities += service.vulnerabilities.len();
                cves.extend(service.vulnerabilities.iter().map(|v| v.cve_id.as_str()));
            }
        }

        metrics.unique_cves = cves.len();
        metrics
    }

    /// Hosts rated exactly `label`. Zero for labels never seen.
    pub fn count_for(&self, label: &str) -> usize {
        self.risk_levels.get(label).copied().unwrap_or(0)
    }

    pub fn critical_count(&self) -> usize {
        self.count_for(CRITICAL)
    }

    pub fn high_count(&self) -> usize {
        self.count_for(HIGH)
    }

    pub fn rated_hosts(&self) -> usize {
        self.risk_levels.values().sum()
    }

    /// Risk labels with counts, well-known labels first.
    pub fn ordered_risk_levels(&self) -> Vec<(&str, usize)> {
        let known = KNOWN_RISK_LEVELS
            .iter()
            .filter_map(|label| self.risk_levels.get(*label).map(|count| (*label, *count)));
        let other = self
            .risk_levels
            .iter()
            .filter(|(label, _)| !KNOWN_RISK_LEVELS.contains(&label.as_str()))
            .map(|(label, count)| (label.as_str(), *count));

        known.chain(other).collect()
    }
}
