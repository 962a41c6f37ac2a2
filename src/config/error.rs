//! Validation and access errors for schema-driven configuration.
//!
//! All validation errors for one resolution pass are collected and reported
//! together, so an operator sees every problem in a single report instead of
//! fixing them one at a time.

use crate::config::types::ConfigType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single configuration validation or access failure.
///
/// These are data errors, recoverable by correcting the input. Duplicate key
/// definitions are not represented here: defining the same key twice is a
/// programmer error and panics during schema construction.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("Missing required configuration key '{key}'")]
    MissingRequiredKey { key: String },

    #[error("Invalid value '{value}' for configuration key '{key}': expected {expected}")]
    TypeCoercion {
        key: String,
        value: String,
        expected: ConfigType,
    },

    #[error("Configuration key '{key}' has type {actual}, not {expected}")]
    WrongType {
        key: String,
        expected: ConfigType,
        actual: ConfigType,
    },

    #[error("Unknown configuration key '{key}'")]
    UnknownKey { key: String },
}

/// Result type for configuration resolution operations.
///
/// The error side carries every failure found in one pass.
pub type ConfigResult<T> = Result<T, Vec<ConfigError>>;
