use serde::{Deserialize, Serialize};
use std::fmt;

/// Which palette variant to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub fn from_light(light: bool) -> Self {
        if light {
            ColorMode::Light
        } else {
            ColorMode::Dark
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three signals that can select the light or dark palette.
///
/// - `pywal_light` - a mode forced only for the terminal palette
/// - `light` - the mode requested for the whole theme
/// - `dark_light` - the desktop's current preference, used as the fallback
///
/// The first signal that is set wins, in the order above. When none is
/// set the dark palette is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeOverrides {
    pub pywal_light: Option<bool>,
    pub light: Option<bool>,
    pub dark_light: Option<bool>,
}

impl ModeOverrides {
    pub fn new(pywal_light: Option<bool>, light: Option<bool>, dark_light: Option<bool>) -> Self {
        Self {
            pywal_light,
            light,
            dark_light,
        }
    }

    pub fn resolve(&self) -> ColorMode {
        let light = self
            .pywal_light
            .or(self.light)
            .or(self.dark_light)
            .unwrap_or(false);
        ColorMode::from_light(light)
    }

    /// Layer `other` on top of `self`: every signal set in `other` wins.
    pub fn overridden_by(self, other: ModeOverrides) -> Self {
        Self {
            pywal_light: other.pywal_light.or(self.pywal_light),
            light: other.light.or(self.light),
            dark_light: other.dark_light.or(self.dark_light),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pywal_light_wins_over_everything() {
        let overrides = ModeOverrides::new(Some(false), Some(true), Some(true));
        assert_eq!(overrides.resolve(), ColorMode::Dark);

        let overrides = ModeOverrides::new(Some(true), Some(false), Some(false));
        assert_eq!(overrides.resolve(), ColorMode::Light);
    }

    #[test]
    fn test_light_wins_over_dark_light() {
        let overrides = ModeOverrides::new(None, Some(false), Some(true));
        assert_eq!(overrides.resolve(), ColorMode::Dark);

        let overrides = ModeOverrides::new(None, Some(true), Some(false));
        assert_eq!(overrides.resolve(), ColorMode::Light);
    }

    #[test]
    fn test_dark_light_is_the_fallback() {
        assert_eq!(
            ModeOverrides::new(None, None, Some(true)).resolve(),
            ColorMode::Light
        );
        assert_eq!(
            ModeOverrides::new(None, None, Some(false)).resolve(),
            ColorMode::Dark
        );
    }

    #[test]
    fn test_nothing_set_means_dark() {
        assert_eq!(ModeOverrides::default().resolve(), ColorMode::Dark);
    }

    #[test]
    fn test_overridden_by_keeps_unset_signals() {
        let base = ModeOverrides::new(Some(true), None, Some(false));
        let merged = base.overridden_by(ModeOverrides::new(None, Some(true), None));
        assert_eq!(merged, ModeOverrides::new(Some(true), Some(true), Some(false)));
    }

    #[test]
    fn test_mode_strings() {
        assert_eq!(ColorMode::Light.as_str(), "light");
        assert_eq!(ColorMode::Dark.to_string(), "dark");
    }
}
