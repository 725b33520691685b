use std::path::Path;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;

use crate::{mprint, terminal::{colors, format, print}};
use scanlens_common::{config::Config, models::dataset::Dataset, models::host::HostRecord, success};
use scanlens_core::{loader, metrics::Metrics};

pub fn summarize(path: &Path, json: bool, cfg: &Config) -> anyhow::Result<ExitCode> {
    let start_time: Instant = Instant::now();
    let dataset: Dataset = loader::from_path(path)
        .with_context(|| format!("could not load {}", path.display()))?;
    let metrics: Metrics = Metrics::extract(&dataset);

    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(ExitCode::SUCCESS);
    }

    let unit: &str = if dataset.len() == 1 { "host has" } else { "hosts have" };
    success!("{} {unit} been loaded from {}", dataset.len(), path.display());

    summary_ends(&dataset, &metrics, start_time.elapsed(), cfg);
    Ok(ExitCode::SUCCESS)
}

fn summary_ends(dataset: &Dataset, metrics: &Metrics, total_time: Duration, cfg: &Config) {
    if dataset.is_empty() {
        no_hosts_found(cfg);
        return;
    }

    if !cfg.shows_sections() {
        mprint!();
    }

    print::header("host overview", cfg.quiet);
    let mut hosts: Vec<&HostRecord> = dataset.iter().collect();
    hosts.sort_by(|a, b| a.ip_addr().cmp(&b.ip_addr()).then_with(|| a.ip.cmp(&b.ip)));
    print_hosts(&hosts, cfg);
    print_metrics(metrics, cfg);
    print_summary(metrics, total_time, cfg);
}

fn no_hosts_found(cfg: &Config) {
    print::header("zero hosts in export", cfg.quiet);
    print::no_results();
    print::end_of_program();
}

fn print_hosts(hosts: &[&HostRecord], cfg: &Config) {
    if !cfg.shows_host_tree() {
        return;
    }

    for (idx, host) in hosts.iter().enumerate() {
        print::tree_head(idx, &host_title(host, cfg));
        print::as_tree_one_level(format::host_details(host, cfg));
        if idx + 1 != hosts.len() {
            mprint!();
        }
    }
}

fn host_title(host: &HostRecord, cfg: &Config) -> String {
    if cfg.redact {
        format::redact_ip(&host.ip)
    } else {
        host.ip.clone()
    }
}

fn print_metrics(metrics: &Metrics, cfg: &Config) {
    if !cfg.shows_sections() {
        return;
    }

    print::header("metrics", cfg.quiet);

    let risk_levels: Vec<(&str, usize)> = metrics.ordered_risk_levels();
    let fixed_keys: [&str; 6] = [
        "Total hosts",
        "Unrated",
        "Services",
        "Vulnerabilities",
        "Vulnerable hosts",
        "Unique CVEs",
    ];
    print::align_keys(fixed_keys.into_iter().chain(risk_levels.iter().map(|(label, _)| *label)));

    print::aligned_line("Total hosts", metrics.total_hosts.to_string());
    for (label, count) in &risk_levels {
        let value: ColoredString = count.to_string().color(format::risk_color(label)).bold();
        print::aligned_line(label, value);
    }
    print::aligned_line("Unrated", metrics.unrated_hosts.to_string());
    print::aligned_line("Services", metrics.total_services.to_string());
    print::aligned_line(
        "Vulnerabilities",
        metrics.total_vulnerabilities.to_string().color(colors::CVE),
    );
    print::aligned_line("Vulnerable hosts", metrics.hosts_with_vulnerabilities.to_string());
    print::aligned_line("Unique CVEs", metrics.unique_cves.to_string());
}

fn print_summary(metrics: &Metrics, total_time: Duration, cfg: &Config) {
    let hosts: ColoredString = format!("{} hosts", metrics.total_hosts).bold().green();
    let critical: ColoredString = format!("{} critical", metrics.critical_count())
        .bold()
        .color(colors::RISK_CRITICAL);
    let high: ColoredString = format!("{} high", metrics.high_count())
        .bold()
        .color(colors::RISK_HIGH);
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: &ColoredString = &format!("Summary Complete: {hosts} ({critical}, {high}) in {total_time}")
        .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
            print::end_of_program();
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn sample_export_summarizes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(scanlens_core::SAMPLE_DATA.as_bytes()).unwrap();

        let cfg = Config {
            quiet: 2,
            redact: true,
            ..Default::default()
        };
        assert_eq!(summarize(file.path(), false, &cfg).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn malformed_export_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"hosts\": [").unwrap();

        let err = summarize(file.path(), true, &Config::default()).unwrap_err();
        assert!(format!("{err:#}").contains("malformed input"));
    }
}
