//! Common utilities and types used throughout the blueprint simulator.
//!
//! This module provides the building blocks shared by extraction, the circuit
//! model and the simulation engine. It includes:
//! 1. **Coordinates:** Pixel coordinates and the four cardinal directions.
//! 2. **Identifiers:** Strongly typed gate and wire indices.
//! 3. **Error Handling:** Load, circuit and configuration errors.

/// Pixel coordinate and direction types.
pub mod coord;

/// Error types for loading, toggling and configuration.
pub mod error;

/// Arena index types for gates and wires.
pub mod id;

pub use coord::{Direction, PixelCoord};
pub use error::{CircuitError, ConfigError, LoadError};
pub use id::{GateId, WireId};
