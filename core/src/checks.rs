//! # Self-Check Suite
//!
//! A fixed sequence of checks that exercises the loader and the metrics
//! extractor against a fixture export and a few hand-computed inputs.
//!
//! Each check returns `anyhow::Result<()>`; a failed assertion or a load error
//! marks the check as failed without stopping the suite.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail, ensure};
use scanlens_common::error::LoadError;
use scanlens_common::models::dataset::Dataset;
use serde_json::Value;
use tracing::debug;

use crate::SAMPLE_DATA;
use crate::loader;
use crate::metrics::Metrics;

/// Host count of [`SAMPLE_DATA`].
pub const SAMPLE_HOST_COUNT: usize = 3;

const VALID_JSON: &str = r#"{"hosts": [{"ip": "1.1.1.1"}]}"#;
const TRUNCATED_JSON: &str = r#"{"hosts": [{"ip": "1.1.1.1"}"#;

/// Where the fixture export comes from.
#[derive(Debug, Clone)]
pub enum Fixture {
    /// The export compiled into the crate.
    Bundled,
    /// An export on disk.
    File(PathBuf),
}

impl Fixture {
    pub fn read(&self) -> anyhow::Result<String> {
        match self {
            Fixture::Bundled => Ok(SAMPLE_DATA.to_owned()),
            Fixture::File(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read fixture {}", path.display())),
        }
    }

    pub fn load(&self) -> Result<Dataset, LoadError> {
        match self {
            Fixture::Bundled => loader::from_str(SAMPLE_DATA),
            Fixture::File(path) => loader::from_path(path),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Fixture::Bundled => String::from("bundled sample data"),
            Fixture::File(path) => path.display().to_string(),
        }
    }
}

/// Inputs shared by every check.
#[derive(Debug, Clone)]
pub struct CheckContext {
    pub fixture: Fixture,
    /// Host count the fixture must have. `None` skips the count assertion.
    pub expected_hosts: Option<usize>,
}

impl CheckContext {
    /// Context for `fixture`. The bundled fixture always expects [`SAMPLE_HOST_COUNT`] hosts.
    pub fn new(fixture: Fixture, expected_hosts: Option<usize>) -> Self {
        let expected_hosts = match fixture {
            Fixture::Bundled => expected_hosts.or(Some(SAMPLE_HOST_COUNT)),
            Fixture::File(_) => expected_hosts,
        };
        Self {
            fixture,
            expected_hosts,
        }
    }
}

impl Default for CheckContext {
    fn default() -> Self {
        Self::new(Fixture::Bundled, None)
    }
}

type CheckFn = fn(&CheckContext) -> anyhow::Result<()>;

pub struct Check {
    pub name: &'static str,
    run: CheckFn,
}

impl Check {
    pub fn new(name: &'static str, run: CheckFn) -> Self {
        Self { name, run }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: &'static str,
    /// Failure reason. `None` when the check passed.
    pub error: Option<String>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

pub struct CheckSuite {
    context: CheckContext,
    checks: Vec<Check>,
}

impl CheckSuite {
    /// The standard suite: fixture loading, JSON validation, metrics extraction
    /// and upload simulation, in that order.
    pub fn standard(context: CheckContext) -> Self {
        Self::with_checks(
            context,
            vec![
                Check::new("Sample data loading", sample_data_loading),
                Check::new("JSON validation", json_validation),
                Check::new("Metrics extraction", metrics_extraction),
                Check::new("File upload simulation", file_upload_simulation),
            ],
        )
    }

    pub fn with_checks(context: CheckContext, checks: Vec<Check>) -> Self {
        Self { context, checks }
    }

    pub fn context(&self) -> &CheckContext {
        &self.context
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checks.iter().map(|c| c.name)
    }

    pub fn run(&self) -> SuiteReport {
        self.run_with(|_| {})
    }

    /// Runs every check in order, handing each outcome to `on_outcome` as soon as it is known.
    pub fn run_with<F>(&self, mut on_outcome: F) -> SuiteReport
    where
        F: FnMut(&CheckOutcome),
    {
        let mut report = SuiteReport::default();

        for check in &self.checks {
            let error = (check.run)(&self.context).err().map(|e| format!("{e:#}"));
            debug!(check = check.name, passed = error.is_none(), "check finished");

            let outcome = CheckOutcome {
                name: check.name,
                error,
            };
            on_outcome(&outcome);
            report.outcomes.push(outcome);
        }

        report
    }
}

fn sample_data_loading(ctx: &CheckContext) -> anyhow::Result<()> {
    let dataset = ctx.fixture.load()?;

    if let Some(expected) = ctx.expected_hosts {
        ensure!(
            dataset.len() == expected,
            "should have {expected} hosts, found {}",
            dataset.len()
        );
    }

    let document = loader::parse_document(&ctx.fixture.read()?)?;
    if let Some((idx, key)) = loader::missing_host_keys(&document).first() {
        bail!("host #{idx} should contain `{key}`");
    }

    Ok(())
}

fn json_validation(_: &CheckContext) -> anyhow::Result<()> {
    let dataset = loader::from_str(VALID_JSON).context("valid JSON was rejected")?;
    ensure!(
        dataset.len() == 1,
        "valid JSON should yield 1 host, found {}",
        dataset.len()
    );

    match loader::from_str(TRUNCATED_JSON) {
        Err(LoadError::MalformedInput(_)) => Ok(()),
        Err(other) => bail!("truncated JSON raised the wrong error: {other}"),
        Ok(_) => bail!("truncated JSON should have been rejected"),
    }
}

fn metrics_extraction(_: &CheckContext) -> anyhow::Result<()> {
    let dataset = loader::from_str(
        r#"{"hosts": [
            {
                "ip": "1.1.1.1",
                "threat_intelligence": {"risk_level": "critical"},
                "services": [{"port": 22, "vulnerabilities": [{"cve_id": "CVE-123"}]}]
            },
            {
                "ip": "2.2.2.2",
                "threat_intelligence": {"risk_level": "high"},
                "services": [{"port": 80}]
            }
        ]}"#,
    )?;

    let metrics = Metrics::extract(&dataset);
    ensure!(metrics.total_hosts == 2, "should have 2 hosts");
    ensure!(metrics.critical_count() == 1, "should have 1 critical risk host");
    ensure!(metrics.high_count() == 1, "should have 1 high risk host");
    ensure!(
        metrics.total_vulnerabilities == 1,
        "should have 1 vulnerability"
    );

    Ok(())
}

fn file_upload_simulation(ctx: &CheckContext) -> anyhow::Result<()> {
    let content = ctx.fixture.read()?;

    let document = loader::parse_document(&content)?;
    ensure!(document.is_object(), "data should be an object");
    ensure!(
        document.get("hosts").is_some_and(Value::is_array),
        "data should contain a `hosts` array"
    );

    let dataset = loader::from_reader(content.as_bytes())?;
    debug!(hosts = dataset.len(), "upload accepted");

    Ok(())
}
