pub mod errors;

pub use errors::{SchemeError, SwatchError, ToolError, ToolOutcome};
