//! # matugen Workflow
//!
//! Runs matugen's full wallpaper workflow: matugen analyses the image itself
//! and writes its own templates. The only inputs are the light/dark mode
//! and the wallpaper path:
//!
//! ```text
//! matugen -m <light|dark> image <wallpaper>
//! ```
//!
//! Failures are classified (not installed, non-zero exit, anything else),
//! logged, and never propagated.

use crate::common::errors::{ToolError, ToolOutcome};
use crate::model::{ColorMode, ModeOverrides};
use crate::utils::process::{ToolOutput, run_captured};
use std::time::Duration;

pub const DEFAULT_MATUGEN_PROGRAM: &str = "matugen";
pub const DEFAULT_MATUGEN_TIMEOUT: Duration = Duration::from_secs(60);

/// Full command line, program first.
pub fn matugen_command(program: &str, mode: ColorMode, wallpaper: &str) -> Vec<String> {
    vec![
        program.to_string(),
        "-m".to_string(),
        mode.as_str().to_string(),
        "image".to_string(),
        wallpaper.to_string(),
    ]
}

#[derive(Debug, Clone)]
pub struct MatugenRunner {
    program: String,
    timeout: Duration,
}

impl MatugenRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            timeout: DEFAULT_MATUGEN_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn command(&self, mode: ColorMode, wallpaper: &str) -> Vec<String> {
        matugen_command(&self.program, mode, wallpaper)
    }

    pub async fn run(&self, mode: ColorMode, wallpaper: &str) -> Result<ToolOutput, ToolError> {
        let command = self.command(mode, wallpaper);
        log::debug!("Matugen command: {}", command.join(" "));
        run_captured(&self.program, &command[1..], self.timeout).await
    }
}

impl Default for MatugenRunner {
    fn default() -> Self {
        Self::new(DEFAULT_MATUGEN_PROGRAM)
    }
}

/// Run the matugen workflow for `wallpaper` in the mode picked by `overrides`.
pub async fn apply_matugen_schemes(
    runner: &MatugenRunner,
    wallpaper: &str,
    overrides: &ModeOverrides,
) -> ToolOutcome {
    let mode = overrides.resolve();
    log::info!("Running full matugen workflow...");

    match runner.run(mode, wallpaper).await {
        Ok(output) => {
            log::info!("Matugen workflow completed successfully");
            log_output(&output.stdout, &output.stderr);
            ToolOutcome::Completed
        }
        Err(ToolError::NotFound { .. }) => {
            log::warn!("Matugen not found, skipping matugen workflow");
            ToolOutcome::Unavailable
        }
        Err(ToolError::NonZeroExit {
            code,
            stdout,
            stderr,
            ..
        }) => {
            match code {
                Some(code) => log::error!("Matugen command failed with exit code {code}"),
                None => log::error!("Matugen command was terminated by a signal"),
            }
            log_output(&stdout, &stderr);
            ToolOutcome::Failed
        }
        Err(e) => {
            log::error!("Unexpected error running matugen workflow: {e}");
            ToolOutcome::Failed
        }
    }
}

fn log_output(stdout: &str, stderr: &str) {
    if !stdout.is_empty() {
        log::debug!("Matugen stdout: {stdout}");
    }
    if !stderr.is_empty() {
        log::debug!("Matugen stderr: {stderr}");
    }
}
