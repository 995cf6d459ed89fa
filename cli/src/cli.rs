//! CLI argument definitions using clap derive macros.

use crate::config::limits::LOG_LEVELS;
use clap::{Args, Parser, Subcommand};
use engine::ModeOverrides;
use std::path::PathBuf;

/// Apply precomputed light/dark palettes through pywal and matugen
#[derive(Parser, Debug)]
#[command(name = "hueshift", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (default: ./config.toml, then ~/.config/hueshift/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true, value_parser = LOG_LEVELS)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply the selected palette with pywal, then optionally print it and run matugen
    Apply(ApplyArgs),
    /// Print a swatch of the selected palette
    Print(PrintArgs),
    /// Create the configuration directory and default config.toml
    Init,
    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub mode: ModeArgs,

    #[command(flatten)]
    pub schemes: SchemeArgs,

    /// Push the palette into pywal (overrides [pywal] enabled)
    #[arg(long)]
    pub pywal: bool,

    /// Skip pywal even when enabled in the configuration
    #[arg(long)]
    pub no_pywal: bool,

    /// Print a swatch of the applied palette
    #[arg(long)]
    pub print: bool,

    /// Run the matugen workflow with this wallpaper (overrides [matugen] wallpaper)
    #[arg(long, value_name = "WALLPAPER")]
    pub matugen: Option<String>,
}

impl ApplyArgs {
    /// Tri-state pywal switch: `None` defers to the configuration
    pub fn pywal_switch(&self) -> Option<bool> {
        if self.no_pywal {
            Some(false)
        } else if self.pywal {
            Some(true)
        } else {
            None
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct PrintArgs {
    #[command(flatten)]
    pub mode: ModeArgs,

    #[command(flatten)]
    pub schemes: SchemeArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ModeArgs {
    /// Use the light palette
    #[arg(long, conflicts_with = "dark")]
    pub light: bool,

    /// Use the dark palette
    #[arg(long)]
    pub dark: bool,

    /// Force the light palette for the terminal only
    #[arg(long, conflicts_with = "pywal_dark")]
    pub pywal_light: bool,

    /// Force the dark palette for the terminal only
    #[arg(long)]
    pub pywal_dark: bool,
}

impl ModeArgs {
    /// Signals given on the command line; `dark_light` only comes from configuration
    pub fn overrides(&self) -> ModeOverrides {
        ModeOverrides::new(
            flag_pair(self.pywal_light, self.pywal_dark),
            flag_pair(self.light, self.dark),
            None,
        )
    }
}

fn flag_pair(light: bool, dark: bool) -> Option<bool> {
    match (light, dark) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct SchemeArgs {
    /// Light scheme file (overrides [schemes])
    #[arg(long, value_name = "PATH")]
    pub light_scheme: Option<PathBuf>,

    /// Dark scheme file (overrides [schemes])
    #[arg(long, value_name = "PATH")]
    pub dark_scheme: Option<PathBuf>,
}
