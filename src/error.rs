//! Error types for handspell.

use crate::landmark::LandmarkGroup;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandspellError {
    // Configuration errors
    #[error("Failed to parse configuration: {message}")]
    ConfigParse { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Feature schema errors (load time, never retried)
    #[error("Unrecognized feature name {name:?}: {reason}")]
    Schema { name: String, reason: String },

    // Frame mapping errors (the frame is rejected, the session survives)
    #[error("Landmark group {group} has {actual} points, expected {expected}")]
    DimensionMismatch {
        group: LandmarkGroup,
        expected: usize,
        actual: usize,
    },

    // Inference errors (propagated from the external model, never retried)
    #[error("Inference failed: {message}")]
    Inference { message: String },

    // Session lifecycle errors
    #[error("Clip session already reached {state}; reset before pushing frames")]
    SessionTerminal { state: String },

    #[error("No session registered under id {id:?}")]
    SessionNotFound { id: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, HandspellError>;
