//! # Configuration Management
//!
//! Centralized configuration and wire constants for the codec.
//!
//! This module provides structured configuration for the buffer layer and
//! the frame codec: initial buffer sizing and frame length limits.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//!
//! ## Security Considerations
//! - `max_frame_len` bounds the allocation a single inbound frame can force
//!   (a hostile peer controls the declared length field)
//! - Defaults match the wire format's own ceilings, not the host's memory

use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Terminator byte closing every wire string.
pub const STRING_TERMINATOR: u8 = 10;

/// Initial capacity of a freshly constructed write buffer.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Max body length a frame may declare (the ceiling of a two-byte length
/// field; one-byte frames are bounded at 255 by their width alone).
pub const MAX_FRAME_LEN: usize = 65535;

/// Tunable limits for buffers and framing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WireConfig {
    /// Capacity of a freshly constructed write buffer, in bytes.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Maximum body length an inbound frame may declare, in bytes.
    #[serde(default = "default_max_frame_len")]
    pub max_frame_len: usize,
}

fn default_initial_capacity() -> usize {
    DEFAULT_INITIAL_CAPACITY
}

fn default_max_frame_len() -> usize {
    MAX_FRAME_LEN
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_frame_len: MAX_FRAME_LEN,
        }
    }
}

impl WireConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| ProtocolError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.initial_capacity == 0 {
            errors.push("Initial capacity must be greater than 0".to_string());
        } else if self.initial_capacity > 1024 * 1024 {
            errors.push(format!(
                "Initial capacity very large: {} bytes (buffers are per-packet)",
                self.initial_capacity
            ));
        }

        if self.max_frame_len == 0 {
            errors.push("Max frame length must be greater than 0".to_string());
        } else if self.max_frame_len > MAX_FRAME_LEN {
            errors.push(format!(
                "Max frame length too large: {} (two-byte length fields cap at {})",
                self.max_frame_len, MAX_FRAME_LEN
            ));
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProtocolError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}
