use super::{
    LoggingConfig,
    defaults::{
        DARK_SCHEME_FILE, DEFAULT_MATUGEN_PROGRAM, DEFAULT_MATUGEN_TIMEOUT_SECS,
        DEFAULT_PYWAL_PROGRAM, DEFAULT_PYWAL_TIMEOUT_SECS, LIGHT_SCHEME_FILE,
    },
    limits::*,
    setup,
    validation::ConfigValidationError,
};
use engine::ModeOverrides;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    schemes: SchemesConfig,
    #[serde(default)]
    mode: ModeConfig,
    #[serde(default)]
    pywal: PywalConfig,
    #[serde(default)]
    matugen: MatugenConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        for (key, seconds) in [
            ("pywal.timeout_secs", self.pywal.timeout_secs()),
            ("matugen.timeout_secs", self.matugen.timeout_secs()),
        ] {
            if !(MIN_TOOL_TIMEOUT_SECS..=MAX_TOOL_TIMEOUT_SECS).contains(&seconds) {
                errors.push(ConfigValidationError::ToolTimeout {
                    key: key.to_string(),
                    configured: seconds,
                    min_limit: MIN_TOOL_TIMEOUT_SECS,
                    max_limit: MAX_TOOL_TIMEOUT_SECS,
                });
            }
        }

        for (key, program) in [
            ("pywal.program", self.pywal.program()),
            ("matugen.program", self.matugen.program()),
        ] {
            if program.trim().is_empty() {
                errors.push(ConfigValidationError::EmptyProgram {
                    key: key.to_string(),
                });
            }
        }

        let level = self.logging.level().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Copy of this configuration with every default filled in
    pub fn resolved(&self) -> Self {
        Self {
            schemes: SchemesConfig {
                dir: Some(self.schemes.dir()),
                light: Some(self.schemes.light_path()),
                dark: Some(self.schemes.dark_path()),
            },
            mode: self.mode.clone(),
            pywal: PywalConfig {
                enabled: Some(self.pywal.enabled()),
                program: Some(self.pywal.program().to_string()),
                vte_fix: Some(self.pywal.vte_fix()),
                timeout_secs: Some(self.pywal.timeout_secs()),
                cache_dir: self.pywal.cache_dir.clone(),
            },
            matugen: MatugenConfig {
                program: Some(self.matugen.program().to_string()),
                timeout_secs: Some(self.matugen.timeout_secs()),
                wallpaper: self.matugen.wallpaper.clone(),
            },
            logging: self.logging.resolved(),
        }
    }

    // Configuration section accessors
    pub fn schemes(&self) -> &SchemesConfig {
        &self.schemes
    }

    pub fn mode(&self) -> &ModeConfig {
        &self.mode
    }

    pub fn pywal(&self) -> &PywalConfig {
        &self.pywal
    }

    pub fn matugen(&self) -> &MatugenConfig {
        &self.matugen
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

/// Where the light and dark scheme files live
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct SchemesConfig {
    dir: Option<PathBuf>,
    light: Option<PathBuf>,
    dark: Option<PathBuf>,
}

impl SchemesConfig {
    pub fn dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            setup::get_schemes_dir().unwrap_or_else(|_| PathBuf::from("schemes"))
        })
    }

    pub fn light_path(&self) -> PathBuf {
        self.light
            .clone()
            .unwrap_or_else(|| self.dir().join(LIGHT_SCHEME_FILE))
    }

    pub fn dark_path(&self) -> PathBuf {
        self.dark
            .clone()
            .unwrap_or_else(|| self.dir().join(DARK_SCHEME_FILE))
    }
}

/// Light/dark selection signals
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ModeConfig {
    pywal_light: Option<bool>,
    light: Option<bool>,
    dark_light: Option<bool>,
}

impl ModeConfig {
    pub fn overrides(&self) -> ModeOverrides {
        ModeOverrides::new(self.pywal_light, self.light, self.dark_light)
    }
}

/// pywal integration settings
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct PywalConfig {
    enabled: Option<bool>,
    program: Option<String>,
    vte_fix: Option<bool>,
    timeout_secs: Option<u64>,
    cache_dir: Option<PathBuf>,
}

impl PywalConfig {
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    pub fn program(&self) -> &str {
        self.program.as_deref().unwrap_or(DEFAULT_PYWAL_PROGRAM)
    }

    pub fn vte_fix(&self) -> bool {
        self.vte_fix.unwrap_or(false)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_PYWAL_TIMEOUT_SECS)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs())
    }

    /// Where the scheme handed to pywal is written; `None` uses the user cache
    pub fn cache_dir(&self) -> Option<&Path> {
        self.cache_dir.as_deref()
    }
}

/// matugen workflow settings
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct MatugenConfig {
    program: Option<String>,
    timeout_secs: Option<u64>,
    wallpaper: Option<String>,
}

impl MatugenConfig {
    pub fn program(&self) -> &str {
        self.program.as_deref().unwrap_or(DEFAULT_MATUGEN_PROGRAM)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_MATUGEN_TIMEOUT_SECS)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs())
    }

    pub fn wallpaper(&self) -> Option<&str> {
        self.wallpaper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_ok!(config.validate());
        assert!(!config.pywal().enabled());
        assert_eq!(config.matugen().program(), "matugen");
        assert_none!(config.matugen().wallpaper());
        assert_eq!(config.mode().overrides(), ModeOverrides::default());
    }

    #[test]
    fn test_scheme_paths_follow_dir() {
        let config: AppConfig = toml::from_str(
            r#"
            [schemes]
            dir = "/themes"
            dark = "/elsewhere/night.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.schemes().light_path(), PathBuf::from("/themes/light.json"));
        assert_eq!(config.schemes().dark_path(), PathBuf::from("/elsewhere/night.json"));
    }

    #[test]
    fn test_mode_section_maps_to_overrides() {
        let config: AppConfig = toml::from_str(
            r#"
            [mode]
            light = true
            dark_light = false
            "#,
        )
        .unwrap();
        assert_eq!(
            config.mode().overrides(),
            ModeOverrides::new(None, Some(true), Some(false))
        );
    }

    #[test]
    fn test_validation_collects_every_problem() {
        let config: AppConfig = toml::from_str(
            r#"
            [pywal]
            timeout_secs = 0
            program = " "

            [matugen]
            timeout_secs = 601

            [logging]
            level = "loud"
            "#,
        )
        .unwrap();
        let errors = assert_err!(config.validate());
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_resolved_config_serializes() {
        let config: AppConfig = toml::from_str("[schemes]\ndir = \"/s\"\n").unwrap();
        let rendered = toml::to_string_pretty(&config.resolved()).unwrap();
        assert!(rendered.contains("program = \"wal\""));
        assert!(rendered.contains("/s/dark.json"));
    }
}
