//! # Scanlens Core
//!
//! Turns host-scan exports into aggregate metrics.
//!
//! * **[`loader`]**: Parses raw JSON text and validates it into a [`Dataset`].
//! * **[`metrics`]**: Pure aggregation over a loaded [`Dataset`].
//! * **[`checks`]**: A fixed self-check suite exercising the two above.
//!
//! [`Dataset`]: scanlens_common::models::dataset::Dataset

pub mod checks;
pub mod loader;
pub mod metrics;

/// Sample export bundled with the crate, three hosts rated critical, high and medium.
pub const SAMPLE_DATA: &str = include_str!("../fixtures/sample_data.json");
