//! Circuit model and its records.
//!
//! Gates and wires are stored in `Vec` arenas inside [`CircuitModel`] and refer
//! to each other by [`WireId`](crate::common::WireId), never by reference.

/// Gate records and kinds.
pub mod gate;
/// Pixel ownership index.
pub mod index;
/// The circuit aggregate.
pub mod model;
/// Serializable state export.
pub mod snapshot;
/// Wire records and logic levels.
pub mod wire;

pub use gate::{Gate, GateKind};
pub use index::PixelIndex;
pub use model::CircuitModel;
pub use snapshot::{CircuitSnapshot, WireSnapshot};
pub use wire::{Level, Wire};
