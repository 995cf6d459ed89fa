use crate::config::app::SchemesConfig;
use crate::error::{AppError, AppResult};
use crate::scheme::validation::{SchemePathValidator, SchemeValidator};
use crate::validation::Validator;
use engine::{SchemePair, WalScheme};
use std::fs;
use std::path::{Path, PathBuf};

/// Scheme loader responsible for reading the light/dark wal schemes from disk
pub struct SchemeLoader {
    light_path: PathBuf,
    dark_path: PathBuf,
    path_validator: SchemePathValidator,
    scheme_validator: SchemeValidator,
}

impl SchemeLoader {
    pub fn new(light_path: impl Into<PathBuf>, dark_path: impl Into<PathBuf>) -> Self {
        Self {
            light_path: light_path.into(),
            dark_path: dark_path.into(),
            path_validator: SchemePathValidator,
            scheme_validator: SchemeValidator,
        }
    }

    /// Build a loader from configuration, letting explicit paths win
    pub fn from_config(
        config: &SchemesConfig,
        light_override: Option<&Path>,
        dark_override: Option<&Path>,
    ) -> Self {
        let light = light_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.light_path());
        let dark = dark_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.dark_path());
        Self::new(light, dark)
    }

    pub fn light_path(&self) -> &Path {
        &self.light_path
    }

    pub fn dark_path(&self) -> &Path {
        &self.dark_path
    }

    pub fn load_scheme(&self, path: &Path) -> AppResult<WalScheme> {
        self.path_validator.validate(path)?;

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Scheme(format!(
                "Failed to read scheme file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let scheme = WalScheme::from_json(&content).map_err(|e| {
            AppError::Scheme(format!(
                "Failed to parse scheme file '{}': {}",
                path.display(),
                e
            ))
        })?;

        self.scheme_validator.validate(&scheme)?;

        log::debug!(
            "Loaded scheme '{}' with {} colors",
            path.display(),
            scheme.len()
        );
        Ok(scheme)
    }

    pub fn load_pair(&self) -> AppResult<SchemePair> {
        let light = self.load_scheme(&self.light_path)?;
        let dark = self.load_scheme(&self.dark_path)?;
        Ok(SchemePair::new(light, dark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIGHT: &str = r##"{
        "special": { "background": "#eff1f5", "foreground": "#4c4f69", "cursor": "#dc8a78" },
        "colors": { "color0": "#5c5f77", "color1": "#d20f39" }
    }"##;

    const DARK: &str = r##"{
        "special": { "background": "#1e1e2e", "foreground": "#cdd6f4", "cursor": "#f5e0dc" },
        "colors": { "color0": "#45475a", "color1": "#f38ba8" }
    }"##;

    #[test]
    fn test_load_pair_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("light.json"), LIGHT).unwrap();
        fs::write(dir.path().join("dark.json"), DARK).unwrap();

        let loader = SchemeLoader::new(dir.path().join("light.json"), dir.path().join("dark.json"));
        let pair = loader.load_pair().unwrap();
        assert_eq!(pair.light.special.background, "#eff1f5");
        assert_eq!(pair.dark.special.background, "#1e1e2e");
    }

    #[test]
    fn test_missing_scheme_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let loader = SchemeLoader::new(dir.path().join("light.json"), dir.path().join("dark.json"));

        match loader.load_pair() {
            Err(AppError::Scheme(msg)) => assert!(msg.contains("light.json")),
            other => panic!("expected a scheme error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dark.json");
        fs::write(&path, "{ not json").unwrap();

        let loader = SchemeLoader::new(&path, &path);
        match loader.load_scheme(&path) {
            Err(AppError::Scheme(msg)) => assert!(msg.contains("Failed to parse scheme file")),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_overrides_win_over_config() {
        let config: crate::config::AppConfig =
            toml::from_str("[schemes]\ndir = \"/configured\"\n").unwrap();
        let loader = SchemeLoader::from_config(
            config.schemes(),
            Some(Path::new("/tmp/custom-light.json")),
            None,
        );
        assert_eq!(loader.light_path(), Path::new("/tmp/custom-light.json"));
        assert_eq!(loader.dark_path(), Path::new("/configured/dark.json"));
    }
}
