//! Yoke CLI - Main Entry Point
//!
//! Selects WebdriverIO spec files, runs them, and summarizes failures
//! from the generated reports. The exit code is the runner's own code
//! on a completed run; every other path has a fixed code (see
//! `RunOutcome`). This is the only place that terminates the process.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use yoke_core::orchestrator::{Yoke, YokeConfig};
use yoke_core::report::ReportConfig;
use yoke_core::selector::SelectorConfig;
use yoke_core::{host, CiEnvironment, WdioLauncher};

/// Yoke - WebdriverIO E2E harness
#[derive(Parser, Debug)]
#[command(name = "yoke")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Spec base-names to run (default: every spec in the spec directory)
    specs: Vec<String>,

    /// Directory containing the spec files
    #[arg(long, default_value = "wdio/test")]
    spec_dir: PathBuf,

    /// Filename suffix identifying a spec
    #[arg(long, default_value = ".spec.ts")]
    spec_suffix: String,

    /// WebdriverIO config file
    #[arg(long, default_value = "wdio.conf.js")]
    config: PathBuf,

    /// Directory the runner writes its reports into
    #[arg(long, default_value = "reports")]
    reports: PathBuf,

    /// Write a JSON run summary to this path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Skip the Hyper-V host check
    #[arg(long)]
    skip_host_check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    if !cli.skip_host_check && !confirm_host() {
        std::process::exit(0);
    }

    let config = YokeConfig {
        selector: SelectorConfig {
            base_dir: cli.spec_dir,
            spec_suffix: cli.spec_suffix,
        },
        reports: ReportConfig {
            reports_dir: cli.reports,
            ..Default::default()
        },
        summary_path: cli.summary,
    };
    let yoke = Yoke::new(config, CiEnvironment::capture());
    let launcher = WdioLauncher::new(cli.config);

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let code = match rt.block_on(yoke.run(&cli.specs, &launcher)) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {:#}", anyhow::Error::from(e));
            2
        }
    };
    std::process::exit(code);
}

/// Gate the run on the expected Hyper-V host, with an interactive
/// override. Returns false when the user declines.
fn confirm_host() -> bool {
    let manufacturer = match host::board_manufacturer() {
        Ok(value) => value,
        Err(e) => {
            debug!("Manufacturer probe failed: {}", e);
            "unknown".to_string()
        }
    };
    if host::is_expected_manufacturer(&manufacturer) {
        return true;
    }

    println!("Not running in HyperV. Mfr = {}", manufacturer);
    print!("E2ETest is meant to be run in a HyperV VM. Continue? (Y/N) ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    host::is_affirmative(&answer)
}
