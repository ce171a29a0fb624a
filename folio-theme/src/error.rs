//! # Theme Error Types
//!
//! This module provides the error types of the theme engine. Only input
//! validation errors ever reach the caller of a [ThemeStore](crate::manager::ThemeStore)
//! operation; storage errors are recovered from inside the store.

use std::path::PathBuf;
use thiserror::Error;

use crate::palette::PaletteField;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A seed or hex color was not in `#rgb` or `#rrggbb` form.
    #[error("Invalid hex color '{value}': expected #rgb or #rrggbb")]
    InvalidHexColor {
        /// The rejected input.
        value: String,
    },

    /// A palette field was given a value that is not a CSS color.
    #[error("Invalid color value '{value}' for palette field '{field}'")]
    InvalidColorValue {
        /// The field that was being edited.
        field: PaletteField,
        /// The rejected value.
        value: String,
    },

    /// Theme with the specified name was not found.
    #[error("Theme '{name}' not found")]
    UnknownTheme {
        /// The name of the theme that was not found.
        name: String,
    },

    /// Palette field with the specified name does not exist.
    #[error("Palette field '{name}' not found")]
    UnknownField {
        /// The unknown field name.
        name: String,
    },

    /// Reading or writing a durable storage entry failed.
    #[error("Storage error for key '{key}': {details}")]
    Storage {
        /// The storage key involved.
        key: String,
        /// Details about the failure.
        details: String,
    },

    /// Error parsing a theme configuration file.
    #[error("Failed to parse theme config {path:?}: {details}")]
    ConfigParse {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing or deserializing theme data.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create an invalid hex color error.
    pub fn invalid_hex(value: impl Into<String>) -> Self {
        Self::InvalidHexColor {
            value: value.into(),
        }
    }

    /// Create an invalid color value error.
    pub fn invalid_color(field: PaletteField, value: impl Into<String>) -> Self {
        Self::InvalidColorValue {
            field,
            value: value.into(),
        }
    }

    /// Create a theme not found error.
    pub fn unknown_theme(name: impl Into<String>) -> Self {
        Self::UnknownTheme { name: name.into() }
    }

    /// Create an unknown palette field error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Create a storage error.
    pub fn storage(key: impl Into<String>, details: impl ToString) -> Self {
        Self::Storage {
            key: key.into(),
            details: details.to_string(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            details: details.into(),
        }
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
