use super::defaults::DEFAULT_CONFIG;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR_NAME: &str = "hueshift";
const CONFIG_FILE_NAME: &str = "config.toml";
const SCHEMES_DIR_NAME: &str = "schemes";

#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum SetupError {
    #[error("Failed to determine config directory: {0}")]
    ConfigDirError(String),
    #[error("Failed to create directory {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write file {path}: {source}")]
    WriteFileError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to set file permissions for {path}: {source}")]
    PermissionError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Get the standard configuration directory for the current platform
pub fn get_config_dir() -> Result<PathBuf, SetupError> {
    // Prefer ~/.config/hueshift on Unix-like systems, fall back to platform defaults
    if cfg!(unix) {
        if let Some(mut home_path) = dirs::home_dir() {
            home_path.push(".config");
            home_path.push(APP_DIR_NAME);
            return Ok(home_path);
        }
    }

    dirs::config_dir()
        .map(|mut path| {
            path.push(APP_DIR_NAME);
            path
        })
        .ok_or_else(|| {
            SetupError::ConfigDirError("Unable to determine config directory".to_string())
        })
}

/// Get the standard configuration file path
pub fn get_config_file_path() -> Result<PathBuf, SetupError> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Get the schemes directory path
pub fn get_schemes_dir() -> Result<PathBuf, SetupError> {
    Ok(get_config_dir()?.join(SCHEMES_DIR_NAME))
}

/// Check if the standard config file exists
pub fn is_config_initialized() -> bool {
    match get_config_file_path() {
        Ok(config_path) => config_path.exists(),
        Err(_) => false,
    }
}

/// Initialize the standard config directory with default files
pub fn initialize_config_dir() -> Result<PathBuf, SetupError> {
    let config_dir = get_config_dir()?;
    initialize_config_dir_at(&config_dir)?;
    Ok(config_dir)
}

/// Initialize `config_dir` with a schemes directory and the default config.
///
/// An existing `config.toml` is left untouched.
pub fn initialize_config_dir_at(config_dir: &Path) -> Result<(), SetupError> {
    create_dir_if_not_exists(config_dir)?;

    let schemes_dir = config_dir.join(SCHEMES_DIR_NAME);
    create_dir_if_not_exists(&schemes_dir)?;

    let config_file = config_dir.join(CONFIG_FILE_NAME);
    if config_file.exists() {
        log::info!(
            "Keeping existing configuration file: {}",
            config_file.display()
        );
    } else {
        write_file_with_permissions(&config_file, DEFAULT_CONFIG)?;
        log::info!("Created configuration file: {}", config_file.display());
    }

    log::info!(
        "Place light.json and dark.json wal schemes in: {}",
        schemes_dir.display()
    );
    log::info!("Config directory initialized: {}", config_dir.display());
    Ok(())
}

/// Create directory if it doesn't exist
fn create_dir_if_not_exists(path: &Path) -> Result<(), SetupError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| SetupError::CreateDirError {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Write file with appropriate permissions (600 for config files)
fn write_file_with_permissions(path: &Path, content: &str) -> Result<(), SetupError> {
    fs::write(path, content).map_err(|source| SetupError::WriteFileError {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = fs::Permissions::from_mode(0o600); // rw-------
        fs::set_permissions(path, permissions).map_err(|source| SetupError::PermissionError {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(())
}

/// Find config file using discovery priority
pub fn find_config_file() -> Option<PathBuf> {
    // Priority order:
    // 1. ./config.toml (current directory)
    // 2. Standard OS config directory

    let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
    if current_dir_config.exists() {
        return Some(current_dir_config);
    }

    match get_config_file_path() {
        Ok(standard_config) if standard_config.exists() => Some(standard_config),
        _ => None,
    }
}
