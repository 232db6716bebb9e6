use crate::defaults;
use crate::error::{HandspellError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub streaming: StreamingConfig,
    pub decode: DecodeConfig,
}

/// Streaming-mode (debouncer) configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StreamingConfig {
    /// Sliding window capacity, in frames.
    pub buffer_size: usize,
    /// Fraction of the window that must agree before a symbol is emitted.
    pub confidence_fraction: f32,
}

/// Clip-mode (autoregressive decoder) configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DecodeConfig {
    /// Maximum number of decode steps per clip.
    pub max_out_length: usize,
    /// Minimum confidence a step must exceed to be accepted.
    pub confidence_threshold: f32,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            buffer_size: defaults::BUFFER_SIZE,
            confidence_fraction: defaults::CONFIDENCE_FRACTION,
        }
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_out_length: defaults::MAX_OUT_LENGTH,
            confidence_threshold: defaults::CONFIDENCE_THRESHOLD,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Returns errors for invalid TOML.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(e) => {
                if e.downcast_ref::<std::io::Error>()
                    .map(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
                    .unwrap_or(false)
                {
                    Ok(Self::default())
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - HANDSPELL_BUFFER_SIZE → streaming.buffer_size
    /// - HANDSPELL_CONFIDENCE_FRACTION → streaming.confidence_fraction
    /// - HANDSPELL_MAX_OUT_LENGTH → decode.max_out_length
    /// - HANDSPELL_CONFIDENCE_THRESHOLD → decode.confidence_threshold
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(value) = std::env::var("HANDSPELL_BUFFER_SIZE")
            && let Ok(buffer_size) = value.parse()
        {
            self.streaming.buffer_size = buffer_size;
        }

        if let Ok(value) = std::env::var("HANDSPELL_CONFIDENCE_FRACTION")
            && let Ok(fraction) = value.parse()
        {
            self.streaming.confidence_fraction = fraction;
        }

        if let Ok(value) = std::env::var("HANDSPELL_MAX_OUT_LENGTH")
            && let Ok(max_out_length) = value.parse()
        {
            self.decode.max_out_length = max_out_length;
        }

        if let Ok(value) = std::env::var("HANDSPELL_CONFIDENCE_THRESHOLD")
            && let Ok(threshold) = value.parse()
        {
            self.decode.confidence_threshold = threshold;
        }

        self
    }

    /// Check every value against its documented range.
    ///
    /// Called once after loading; sessions constructed from a validated
    /// config cannot hit range errors later.
    pub fn validate(&self) -> Result<()> {
        if self.streaming.buffer_size < 1 {
            return Err(invalid("streaming.buffer_size", "must be at least 1"));
        }
        if !(self.streaming.confidence_fraction > 0.0
            && self.streaming.confidence_fraction <= 1.0)
        {
            return Err(invalid(
                "streaming.confidence_fraction",
                "must be in (0, 1]",
            ));
        }
        if self.decode.max_out_length < 1 {
            return Err(invalid("decode.max_out_length", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.decode.confidence_threshold) {
            return Err(invalid(
                "decode.confidence_threshold",
                "must be in [0, 1]",
            ));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> HandspellError {
    HandspellError::ConfigInvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}
