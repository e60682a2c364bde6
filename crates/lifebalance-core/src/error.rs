//! Core error types for lifebalance-core.
//!
//! Validation rejections (empty task text, empty ingredient text) are NOT
//! errors -- they are silent no-ops at the widget boundary. The types here
//! cover the failures that can actually surface: configuration, profile
//! persistence, and the suggestion service.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lifebalance-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Profile store errors
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Suggestion service errors
    #[error("Suggestion error: {0}")]
    Suggestion(#[from] SuggestionError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Profile-store errors.
///
/// The store is a caller-supplied collaborator; these cover the reference
/// implementations shipped with the crate. Forward failures propagate
/// as-is -- the coordinator never retries.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Failed to read the stored profile
    #[error("Failed to load profile from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to write the profile
    #[error("Failed to save profile to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Store rejected the update
    #[error("Profile store rejected update: {0}")]
    Rejected(String),
}

/// Suggestion-service errors.
///
/// The external service's failures are opaque strings -- they are never
/// parsed for structured error codes.
#[derive(Error, Debug)]
pub enum SuggestionError {
    /// No API key stored for the service
    #[error("Suggestion service API key not configured")]
    MissingApiKey,

    /// Transport-level failure
    #[error("Suggestion request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-success status
    #[error("Suggestion service error (HTTP {status}): {message}")]
    Service { status: u16, message: String },

    /// Service responded without any usable text
    #[error("Suggestion service returned no text")]
    EmptyResponse,

    /// Credential store failure while looking up the API key
    #[error("Credential store error: {0}")]
    Keyring(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
