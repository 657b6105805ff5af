//! Top-level run flow: select specs, launch the runner, summarize
//!
//! The flow is a straight line with three exits. Every path reduces
//! to a [`RunOutcome`] value; the binary owns the actual process exit.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::YokeResult;
use crate::filter::CiEnvironment;
use crate::launcher::Launcher;
use crate::report::{self, ReportConfig};
use crate::selector::{self, SelectorConfig, SpecRef};

/// Combined configuration for one run
#[derive(Debug, Clone, Default)]
pub struct YokeConfig {
    pub selector: SelectorConfig,
    pub reports: ReportConfig,

    /// Where to write the JSON run summary, if anywhere
    pub summary_path: Option<PathBuf>,
}

/// Terminal state of a run, with its exit code projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Selection produced nothing to run
    NoSpecs,

    /// The runner itself failed to start
    LaunchFailed,

    /// The runner completed; its code passes through verbatim
    Completed { code: i32, failing: Vec<String> },
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::NoSpecs => -1,
            RunOutcome::LaunchFailed => 1,
            RunOutcome::Completed { code, .. } => *code,
        }
    }
}

/// JSON artifact describing a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub selected: Vec<String>,
    pub code: i32,
    pub failing: Vec<String>,
}

/// The orchestrator: owns configuration and the captured environment.
pub struct Yoke {
    config: YokeConfig,
    env: CiEnvironment,
}

impl Yoke {
    pub fn new(config: YokeConfig, env: CiEnvironment) -> Self {
        Self { config, env }
    }

    /// Run the pipeline: select, launch, summarize.
    ///
    /// `Err` is reserved for selection-setup failures (an unknown
    /// metadata tag, an unreadable spec directory); everything past
    /// selection folds into the returned [`RunOutcome`].
    pub async fn run(
        &self,
        explicit: &[String],
        launcher: &dyn Launcher,
    ) -> YokeResult<RunOutcome> {
        let specs = selector::select_specs(&self.config.selector, explicit, &self.env)?;
        if specs.is_empty() {
            info!("No specs to run");
            return Ok(RunOutcome::NoSpecs);
        }
        info!("Selected tests: {}", display_paths(&specs));

        let code = match launcher.run(&specs).await {
            Ok(code) => code,
            Err(e) => {
                error!("Launcher failed to start the test: {}", e);
                return Ok(RunOutcome::LaunchFailed);
            }
        };

        let failing = report::collect_failures(&self.config.reports);
        for name in &failing {
            println!("Failed test: {}", name);
        }

        let outcome = RunOutcome::Completed { code, failing };
        self.write_summary(&specs, &outcome);
        Ok(outcome)
    }

    /// Write the JSON summary if a destination was configured. The
    /// summary never influences the exit code, so write failures are
    /// logged and swallowed.
    fn write_summary(&self, specs: &[SpecRef], outcome: &RunOutcome) {
        let (path, code, failing) = match (&self.config.summary_path, outcome) {
            (Some(path), RunOutcome::Completed { code, failing }) => (path, code, failing),
            _ => return,
        };
        let summary = RunSummary {
            selected: specs.iter().map(|s| s.name.clone()).collect(),
            code: *code,
            failing: failing.clone(),
        };
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => info!("Summary written to: {}", path.display()),
                Err(e) => error!("Cannot write summary to {}: {}", path.display(), e),
            },
            Err(e) => error!("Cannot serialize summary: {}", e),
        }
    }
}

fn display_paths(specs: &[SpecRef]) -> String {
    specs
        .iter()
        .map(|s| s.path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
