//! # Scanlens Common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`models`]**: The host-scan data model (datasets, hosts, services, vulnerabilities).
//! * **[`error`]**: Errors raised while turning raw input into a [`models::dataset::Dataset`].
//! * **[`config`]**: Runtime switches passed down from the command line.
//! * **[`log`]**: Logging macros layered on top of `tracing`.

pub mod config;
pub mod error;
pub mod log;
pub mod models;
