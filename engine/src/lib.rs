//! # hueshift Engine Library
//!
//! Core library for applying precomputed light/dark color palettes.
//! This library owns the wal scheme model, light/dark mode resolution,
//! terminal swatch rendering, and the integrations with the external
//! theming tools (pywal and matugen).
//!
//! ## Modules
//!
//! - [`common`] - Error types and tool outcomes shared across the crate
//! - [`model`] - Colors, wal schemes and mode resolution
//! - [`source`] - Access to a light/dark scheme pair
//! - [`swatch`] - ANSI 24-bit palette swatch rendering
//! - [`pywal`] - Pushing a palette into pywal's live state and templates
//! - [`matugen`] - Wallpaper based theming through the matugen CLI
//! - [`utils`] - Process helpers

pub mod common;
pub mod matugen;
pub mod model;
pub mod pywal;
pub mod source;
pub mod swatch;
pub mod utils;

pub use common::{SchemeError, SwatchError, ToolError, ToolOutcome};
pub use model::{ColorMode, ModeOverrides, Rgb, Special, WalScheme};
pub use source::{SchemePair, SchemeSource};
