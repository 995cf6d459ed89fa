//! Command handlers.
//!
//! Each handler takes a validated [`AppConfig`] plus its parsed arguments
//! and writes user-facing output to the supplied writer, so the binary
//! passes stdout while tests pass a buffer.

use crate::cli::{ApplyArgs, Command, PrintArgs, SchemeArgs};
use crate::config::AppConfig;
use crate::config::setup;
use crate::error::{AppError, AppResult};
use crate::scheme::SchemeLoader;
use engine::matugen::{MatugenRunner, apply_matugen_schemes};
use engine::pywal::{WalCli, apply_schemes};
use engine::swatch::print_palette;
use engine::{ColorMode, ModeOverrides, SchemePair, SchemeSource, ToolOutcome};
use std::io::Write;
use std::path::PathBuf;

/// What `apply` did with each external tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyReport {
    pub mode: ColorMode,
    pub pywal: ToolOutcome,
    pub matugen: ToolOutcome,
}

/// Dispatch a parsed command
pub async fn run<W: Write>(command: &Command, config: &AppConfig, out: &mut W) -> AppResult<()> {
    match command {
        Command::Apply(args) => {
            let report = apply(config, args, out).await?;
            log::debug!("Apply finished: {report:?}");
            Ok(())
        }
        Command::Print(args) => print(config, args, out),
        Command::Init => {
            let dir = init()?;
            writeln!(out, "Configuration directory: {}", dir.display()).map_err(io_error)
        }
        Command::Config => show_config(config, out),
    }
}

/// Push the selected scheme into pywal, optionally print it, then run matugen.
///
/// Scheme problems abort before any tool runs. Tool failures never do;
/// they are logged and reported in the returned [`ApplyReport`].
pub async fn apply<W: Write>(
    config: &AppConfig,
    args: &ApplyArgs,
    out: &mut W,
) -> AppResult<ApplyReport> {
    let overrides = effective_overrides(config, args.mode.overrides());
    let schemes = load_schemes(config, &args.schemes)?;
    let mode = overrides.resolve();

    let use_pywal = args.pywal_switch().unwrap_or_else(|| config.pywal().enabled());
    let mut backend = WalCli::new(config.pywal().program())
        .with_vte_fix(config.pywal().vte_fix())
        .with_timeout(config.pywal().timeout());
    if let Some(cache_dir) = config.pywal().cache_dir() {
        backend = backend.with_cache_dir(cache_dir);
    }
    let pywal = apply_schemes(&overrides, use_pywal, &schemes, &backend).await;

    if args.print {
        print_palette(schemes.scheme_for(mode), out)?;
    }

    let wallpaper = args.matugen.as_deref().or_else(|| config.matugen().wallpaper());
    let matugen = match wallpaper {
        Some(wallpaper) => {
            let runner = MatugenRunner::new(config.matugen().program())
                .with_timeout(config.matugen().timeout());
            apply_matugen_schemes(&runner, wallpaper, &overrides).await
        }
        None => ToolOutcome::Skipped,
    };

    Ok(ApplyReport {
        mode,
        pywal,
        matugen,
    })
}

/// Print a swatch of the scheme selected by configuration and flags
pub fn print<W: Write>(config: &AppConfig, args: &PrintArgs, out: &mut W) -> AppResult<()> {
    let overrides = effective_overrides(config, args.mode.overrides());
    let schemes = load_schemes(config, &args.schemes)?;
    print_palette(schemes.scheme_for(overrides.resolve()), out)?;
    Ok(())
}

/// Create the standard configuration directory if needed
pub fn init() -> AppResult<PathBuf> {
    if setup::is_config_initialized() {
        log::info!("Configuration already initialized");
    }
    Ok(setup::initialize_config_dir()?)
}

/// Write the effective configuration as TOML
pub fn show_config<W: Write>(config: &AppConfig, out: &mut W) -> AppResult<()> {
    let rendered = toml::to_string_pretty(&config.resolved())
        .map_err(|e| AppError::Config(format!("Failed to render configuration: {e}")))?;
    out.write_all(rendered.as_bytes()).map_err(io_error)
}

fn effective_overrides(config: &AppConfig, flags: ModeOverrides) -> ModeOverrides {
    let overrides = config.mode().overrides().overridden_by(flags);
    log::debug!("Mode signals: {overrides:?} -> {}", overrides.resolve());
    overrides
}

fn load_schemes(config: &AppConfig, args: &SchemeArgs) -> AppResult<SchemePair> {
    SchemeLoader::from_config(
        config.schemes(),
        args.light_scheme.as_deref(),
        args.dark_scheme.as_deref(),
    )
    .load_pair()
}

fn io_error(e: std::io::Error) -> AppError {
    AppError::Io(e.to_string())
}
