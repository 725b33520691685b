use std::path::PathBuf;
use std::process::ExitCode;

use colored::*;
use tracing::warn;

use crate::terminal::{colors, print};
use scanlens_common::{config::Config, failure, success};
use scanlens_core::checks::{CheckContext, CheckOutcome, CheckSuite, Fixture, SuiteReport};

pub fn check(file: Option<PathBuf>, expect_hosts: Option<usize>, cfg: &Config) -> anyhow::Result<ExitCode> {
    let fixture: Fixture = file.map_or(Fixture::Bundled, Fixture::File);
    let suite: CheckSuite = CheckSuite::standard(CheckContext::new(fixture, expect_hosts));

    if cfg.shows_sections() {
        print::print_status(format!("Fixture: {}", suite.context().fixture.describe()));
    }

    let report: SuiteReport = suite.run_with(report_outcome);
    print_results(&report, cfg);

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn report_outcome(outcome: &CheckOutcome) {
    match &outcome.error {
        None => success!("{} check passed", outcome.name),
        Some(reason) => failure!("{} check failed: {reason}", outcome.name),
    }
}

fn print_results(report: &SuiteReport, cfg: &Config) {
    let passed: ColoredString = format!("{}/{}", report.passed(), report.total()).bold();
    let passed: ColoredString = if report.all_passed() {
        passed.green()
    } else {
        passed.red()
    };
    let output: &ColoredString =
        &format!("Test Results: {passed} checks passed").color(colors::TEXT_DEFAULT);

    if cfg.shows_sections() {
        print::fat_separator();
        print::centerln(&output.to_string());
        print::end_of_program();
    } else {
        print::print(&output.to_string());
    }

    if report.all_passed() {
        success!("All checks passed!");
    } else {
        warn!("Some checks failed. Check the output above.");
    }
}
