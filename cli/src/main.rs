mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, check, summarize};
use scanlens_common::{config::Config, failure};
use terminal::{logging, print};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    if let Err(e) = logging::init() {
        eprintln!("failed to initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        redact: commands.redact,
    };

    let result = match commands.command {
        Commands::Summarize { file, json } => {
            if !json {
                print::banner(cfg.no_banner, cfg.quiet);
                print::header("loading scan export", cfg.quiet);
            }
            summarize::summarize(&file, json, &cfg)
        }
        Commands::Check { file, expect_hosts } => {
            print::banner(cfg.no_banner, cfg.quiet);
            print::header("running checks", cfg.quiet);
            check::check(file, expect_hosts, &cfg)
        }
    };

    exit_code(result)
}

/// Command errors are reported and turned into a failing exit status.
fn exit_code(result: anyhow::Result<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(e) => {
            failure!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
