//! Utility helpers shared by the tool integrations.
//!
//! - [`process`] - `PATH` lookup and captured subprocess execution

pub mod process;

pub use process::{ToolOutput, find_program, run_captured};
