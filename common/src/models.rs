//! # Scan Models
//!
//! The data structures describing a host-scan export.
//!
//! ## Core Entities
//! * [`dataset::Dataset`]: The full collection of scanned hosts.
//! * [`host::HostRecord`]: One scanned network host with its metadata.
//!
//! ## Value Objects
//! * [`host::ThreatIntelligence`]: Threat summary attached to a host.
//! * [`service::ServiceRecord`]: A service exposed on a port.
//! * [`service::Vulnerability`]: A CVE reported against a service.
//!
//! All models are immutable once loaded. Optional fields are plain `Option`s
//! or empty collections so absence is never an error.

pub mod dataset;
pub mod host;
pub mod service;

use serde::{Deserialize, Deserializer};

/// Reads an absent or `null` list as empty.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
