//! Load, circuit and configuration errors.
//!
//! This module defines every error the library can return. It provides:
//! 1. **Load Errors:** Fatal failures while decoding or validating a blueprint; no model is produced.
//! 2. **Circuit Errors:** Recoverable failures of commands on a loaded model; nothing is mutated.
//! 3. **Config Errors:** Failures while reading or parsing a JSON configuration.
//!
//! Simulation steps never fail: every id a gate holds was validated during extraction.

use super::id::WireId;

/// Failure to build a circuit model from an image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The image could not be read or decoded.
    #[error("failed to decode blueprint image: {0}")]
    Decode(#[from] image::ImageError),

    /// The image has no pixels.
    #[error("blueprint image is empty ({width}x{height})")]
    Empty {
        /// Reported width.
        width: u32,
        /// Reported height.
        height: u32,
    },

    /// The image exceeds the configured pixel limit.
    #[error("blueprint image has {pixels} pixels, limit is {limit}")]
    TooLarge {
        /// Pixel count of the rejected image.
        pixels: u64,
        /// Configured maximum (`load.max_pixels`).
        limit: u64,
    },
}

/// Failure of a command issued against a loaded circuit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CircuitError {
    /// The wire id does not name a wire of this circuit.
    #[error("wire id {id} out of range (circuit has {count} wires)")]
    InvalidWireId {
        /// The rejected index.
        id: usize,
        /// Number of wires in the circuit.
        count: usize,
    },

    /// The wire is driven by a gate; only simulation may change it.
    #[error("wire {0} is driven by a gate and cannot be toggled")]
    NotTouchable(WireId),
}

/// Failure to load a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for [`Config`](crate::Config).
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
