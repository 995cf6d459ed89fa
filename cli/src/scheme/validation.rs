use crate::error::AppError;
use crate::validation::Validator;
use engine::model::{Rgb, WalScheme};
use std::path::Path;

/// Validation errors specific to scheme files
#[derive(Debug, Clone, PartialEq)]
pub enum SchemeValidationError {
    InvalidSchemePath { path: String, reason: String },
    InvalidFileExtension { path: String, expected: String },
    EmptyPalette,
    InvalidColor { name: String, value: String },
}

impl SchemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            SchemeValidationError::InvalidSchemePath { path, reason } => {
                format!(
                    "Invalid scheme path: '{path}'\n\n\
                    Reason: {reason}\n\n\
                    Please ensure the scheme file exists and is accessible, or run `hueshift init`."
                )
            }
            SchemeValidationError::InvalidFileExtension { path, expected } => {
                format!(
                    "Invalid file extension for: '{path}'\n\n\
                    Expected: '{expected}' files\n\n\
                    Scheme files use pywal's colors.json format."
                )
            }
            SchemeValidationError::EmptyPalette => "Scheme palette is empty\n\n\
                Please ensure the scheme contains a \"colors\" table with color0 .. color15."
                .to_string(),
            SchemeValidationError::InvalidColor { name, value } => {
                format!(
                    "Invalid color '{value}' for '{name}'\n\n\
                    Colors must be hex triplets such as #1e1e2e."
                )
            }
        }
    }
}

impl From<SchemeValidationError> for AppError {
    fn from(error: SchemeValidationError) -> Self {
        AppError::Scheme(error.user_message())
    }
}

/// Validator for scheme file paths
pub struct SchemePathValidator;

impl Validator<Path> for SchemePathValidator {
    type Error = SchemeValidationError;

    fn validate(&self, input: &Path) -> Result<(), Self::Error> {
        if !input.exists() {
            return Err(SchemeValidationError::InvalidSchemePath {
                path: input.display().to_string(),
                reason: "Path does not exist".to_string(),
            });
        }

        if !input.is_file() {
            return Err(SchemeValidationError::InvalidSchemePath {
                path: input.display().to_string(),
                reason: "Path is not a file".to_string(),
            });
        }

        if input.extension().and_then(|s| s.to_str()) != Some("json") {
            return Err(SchemeValidationError::InvalidFileExtension {
                path: input.display().to_string(),
                expected: "json".to_string(),
            });
        }

        Ok(())
    }
}

/// Validator for loaded scheme content
pub struct SchemeValidator;

impl Validator<WalScheme> for SchemeValidator {
    type Error = SchemeValidationError;

    fn validate(&self, input: &WalScheme) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(SchemeValidationError::EmptyPalette);
        }

        let special = [
            ("special.background", &input.special.background),
            ("special.foreground", &input.special.foreground),
            ("special.cursor", &input.special.cursor),
        ];
        let palette = input
            .colors
            .iter()
            .map(|(name, value)| (name.as_str(), value));

        for (name, value) in special.into_iter().chain(palette) {
            if Rgb::from_hex(value).is_err() {
                return Err(SchemeValidationError::InvalidColor {
                    name: name.to_string(),
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}
