//! # pywal Integration
//!
//! Pushes a wal scheme into pywal: escape sequences go to every open
//! terminal, every template is exported, and the desktop environment
//! (xrdb, i3, polybar, ...) is reloaded.
//!
//! pywal itself is an optional dependency. When it is not installed the
//! step is skipped with a warning, and any failure while applying is
//! logged and swallowed so the rest of the theming run continues.
//!
//! ## Usage
//!
//! ```no_run
//! use engine::pywal::{WalCli, apply_schemes};
//! use engine::{ModeOverrides, SchemePair};
//!
//! async fn example(schemes: &SchemePair) {
//!     let backend = WalCli::new("wal");
//!     let overrides = ModeOverrides::new(None, Some(true), None);
//!     let outcome = apply_schemes(&overrides, true, schemes, &backend).await;
//!     println!("pywal step: {outcome:?}");
//! }
//! ```

use crate::common::errors::{ToolError, ToolOutcome};
use crate::model::{ModeOverrides, WalScheme};
use crate::source::SchemeSource;
use crate::utils::process::{find_program, run_captured};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name of the scheme handed to `wal`
pub const WAL_SCHEME_FILE: &str = "wal-colors.json";

/// Default deadline for a `wal` run; pywal occasionally hangs
pub const DEFAULT_WAL_TIMEOUT: Duration = Duration::from_secs(10);

/// A tool able to apply a wal scheme to the running session.
#[async_trait]
pub trait PaletteBackend: Send + Sync {
    /// Human readable tool name for log messages
    fn name(&self) -> &str;

    /// Whether the tool is installed
    fn is_available(&self) -> bool;

    /// Send sequences to terminals, export templates and reload the environment.
    async fn apply(&self, scheme: &WalScheme) -> Result<(), ToolError>;
}

/// [`PaletteBackend`] driving the `wal` command line tool.
#[derive(Debug, Clone)]
pub struct WalCli {
    program: String,
    vte_fix: bool,
    timeout: Duration,
    cache_dir: PathBuf,
}

impl WalCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            vte_fix: false,
            timeout: DEFAULT_WAL_TIMEOUT,
            cache_dir: default_cache_dir(),
        }
    }

    /// Enable the fix for VTE based terminals (gnome-terminal, xfce4-terminal, termite)
    pub fn with_vte_fix(mut self, vte_fix: bool) -> Self {
        self.vte_fix = vte_fix;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }

    pub fn scheme_path(&self) -> PathBuf {
        self.cache_dir.join(WAL_SCHEME_FILE)
    }

    /// Arguments for `wal` given the scheme file location.
    pub fn arguments(&self, scheme_path: &Path) -> Vec<String> {
        let mut args = vec!["-n".to_string()];
        if self.vte_fix {
            args.push("--vte".to_string());
        }
        args.push("-f".to_string());
        args.push(scheme_path.display().to_string());
        args
    }

    async fn write_scheme(&self, scheme: &WalScheme) -> Result<PathBuf, ToolError> {
        let path = self.scheme_path();
        let json = scheme.to_json().map_err(|e| ToolError::Prepare {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        tokio::fs::create_dir_all(&self.cache_dir)
            .await
            .map_err(|e| ToolError::Prepare {
                path: self.cache_dir.clone(),
                reason: e.to_string(),
            })?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| ToolError::Prepare {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        Ok(path)
    }
}

#[async_trait]
impl PaletteBackend for WalCli {
    fn name(&self) -> &str {
        "pywal"
    }

    fn is_available(&self) -> bool {
        find_program(&self.program).is_some()
    }

    async fn apply(&self, scheme: &WalScheme) -> Result<(), ToolError> {
        let path = self.write_scheme(scheme).await?;
        let args = self.arguments(&path);
        log::debug!("pywal command: {} {}", self.program, args.join(" "));

        let output = run_captured(&self.program, &args, self.timeout).await?;
        if !output.stderr.is_empty() {
            log::debug!("pywal stderr: {}", output.stderr);
        }
        Ok(())
    }
}

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("hueshift")
}

/// Apply the scheme selected by `overrides` through `backend`.
///
/// Never fails: a disabled step, a missing tool and a failing tool are
/// all logged and reported through the returned [`ToolOutcome`].
pub async fn apply_schemes<S, B>(
    overrides: &ModeOverrides,
    use_pywal: bool,
    schemes: &S,
    backend: &B,
) -> ToolOutcome
where
    S: SchemeSource + ?Sized,
    B: PaletteBackend + ?Sized,
{
    if !use_pywal {
        return ToolOutcome::Skipped;
    }

    if !backend.is_available() {
        log::warn!(
            "{} option enabled but {} is not installed, ignored",
            backend.name(),
            backend.name()
        );
        return ToolOutcome::Unavailable;
    }

    let mode = overrides.resolve();
    let scheme = schemes.scheme_for(mode);

    log::info!("Setting {} colors ({mode})...", backend.name());
    match backend.apply(scheme).await {
        Ok(()) => ToolOutcome::Completed,
        Err(e) => {
            log::error!("Failed setting {} colors: {e}", backend.name());
            ToolOutcome::Failed
        }
    }
}
