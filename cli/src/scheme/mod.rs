//! # Scheme Files
//!
//! Loading of the precomputed light and dark wal schemes. Schemes use
//! pywal's `colors.json` layout and are looked up in the configured
//! schemes directory (`light.json` / `dark.json`) unless explicit paths
//! are given on the command line or in `config.toml`.
//!
//! Every file is checked before use:
//!
//! - **Path** - it exists, is a regular file and has a `.json` extension
//! - **Content** - the palette is not empty and every color is a hex triplet
//!
//! ```no_run
//! use hueshift::AppResult;
//! use hueshift::scheme::SchemeLoader;
//!
//! fn load() -> AppResult<()> {
//!     let loader = SchemeLoader::new("schemes/light.json", "schemes/dark.json");
//!     let pair = loader.load_pair()?;
//!     println!("{} light colors", pair.light.len());
//!     Ok(())
//! }
//! ```

pub mod loader;
pub mod validation;

pub use loader::SchemeLoader;
