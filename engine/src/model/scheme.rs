use crate::common::errors::SchemeError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Special (non-palette) colors of a wal scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Special {
    pub background: String,
    pub foreground: String,
    pub cursor: String,
}

/// A pywal color scheme, as found in `colors.json`.
///
/// ```json
/// {
///   "wallpaper": "/home/user/wall.png",
///   "alpha": "100",
///   "special": { "background": "#1e1e2e", "foreground": "#cdd6f4", "cursor": "#cdd6f4" },
///   "colors": { "color0": "#1e1e2e", "color1": "#f38ba8", ... }
/// }
/// ```
///
/// `colors` preserves the order of the document so swatches come out in
/// the order the palette was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalScheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallpaper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<String>,
    pub special: Special,
    pub colors: IndexMap<String, String>,
}

impl WalScheme {
    pub fn from_json(content: &str) -> Result<Self, SchemeError> {
        serde_json::from_str(content).map_err(SchemeError::Parse)
    }

    pub fn to_json(&self) -> Result<String, SchemeError> {
        serde_json::to_string_pretty(self).map_err(SchemeError::Serialize)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
