pub mod check;
pub mod summarize;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scanlens")]
#[command(about = "Summarizes host-scan exports.", version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output, repeat for less (-qq)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Mask IP addresses in the output
    #[arg(long, global = true)]
    pub redact: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print host details and aggregate metrics for a scan export
    #[command(alias = "s")]
    Summarize {
        /// JSON export with a top-level `hosts` array
        file: PathBuf,
        /// Print the metrics as JSON instead of the report
        #[arg(long)]
        json: bool,
    },
    /// Run the self-check suite against a fixture export
    #[command(alias = "c")]
    Check {
        /// Fixture export, defaults to the bundled sample data
        file: Option<PathBuf>,
        /// Host count the fixture must contain
        #[arg(long)]
        expect_hosts: Option<usize>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_is_consistent() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn parses_summarize_with_global_flags() {
        let cli = CommandLine::try_parse_from(["scanlens", "s", "scan.json", "--json", "-qq", "--redact"]).unwrap();
        assert_eq!(cli.quiet, 2);
        assert!(cli.redact);
        assert!(matches!(cli.command, Commands::Summarize { json: true, .. }));
    }

    #[test]
    fn check_file_is_optional() {
        let cli = CommandLine::try_parse_from(["scanlens", "check"]).unwrap();
        assert!(matches!(cli.command, Commands::Check { file: None, expect_hosts: None }));

        let cli = CommandLine::try_parse_from(["scanlens", "c", "hosts.json", "--expect-hosts", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Check { file: Some(_), expect_hosts: Some(3) }));
    }
}
