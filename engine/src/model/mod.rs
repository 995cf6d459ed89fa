//! Data model for wal color schemes.
//!
//! - [`Rgb`] - A parsed 24-bit color
//! - [`WalScheme`] / [`Special`] - The pywal `colors.json` document
//! - [`ColorMode`] / [`ModeOverrides`] - Light/dark selection

pub mod color;
pub mod mode;
pub mod scheme;

pub use color::Rgb;
pub use mode::{ColorMode, ModeOverrides};
pub use scheme::{Special, WalScheme};
