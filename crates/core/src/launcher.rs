//! Launcher seam for the external WebdriverIO runner

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{info, warn};

use crate::error::{YokeError, YokeResult};
use crate::selector::SpecRef;

/// Runs a list of specs and reports the runner's completion code.
///
/// The runner is a black box: individual test failures still count as
/// a completed run and come back through the code, not as an `Err`.
/// `Err` means the runner itself failed to start.
#[async_trait]
pub trait Launcher: Send + Sync {
    async fn run(&self, specs: &[SpecRef]) -> YokeResult<i32>;
}

/// Production launcher: `npx wdio run <config> --spec <path>...`
pub struct WdioLauncher {
    config_path: PathBuf,
}

impl WdioLauncher {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }
}

#[async_trait]
impl Launcher for WdioLauncher {
    async fn run(&self, specs: &[SpecRef]) -> YokeResult<i32> {
        // Resolve the config up front so a missing file is a launch
        // failure, not a wdio stack trace.
        let config = self.config_path.canonicalize().map_err(|e| {
            YokeError::Launch(format!(
                "cannot resolve runner config {}: {}",
                self.config_path.display(),
                e
            ))
        })?;
        info!("{}", config.display());

        let mut cmd = Command::new("npx");
        cmd.arg("wdio").arg("run").arg(&config);
        for spec in specs {
            cmd.arg("--spec").arg(&spec.path);
        }

        // Stdio stays inherited so runner output streams to the console.
        let status = cmd
            .status()
            .await
            .map_err(|e| YokeError::Launch(format!("failed to spawn wdio: {}", e)))?;

        match status.code() {
            Some(code) => Ok(code),
            None => {
                warn!("Runner terminated by signal, reporting failure");
                Ok(1)
            }
        }
    }
}
