//! # hueshift CLI Library
//!
//! Command line front end for applying precomputed light/dark palettes.
//!
//! ## Modules
//!
//! - [`app`] - Command handlers wiring configuration, schemes and tools together
//! - [`cli`] - Command line argument definitions
//! - [`config`] - Configuration loading, validation and first-run setup
//! - [`constants`] - Environment variable names and shared values
//! - [`error`] - Application error type
//! - [`logger`] - Logging configuration
//! - [`scheme`] - Loading and validating wal scheme files
//! - [`validation`] - The shared validator trait
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logger;
pub mod scheme;
pub mod validation;

pub use error::{AppError, AppResult};
pub use validation::Validator;
