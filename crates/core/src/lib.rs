//! Pixel-blueprint logic simulator library.
//!
//! This crate turns a raster image into an executable digital-logic model. It provides:
//! 1. **Extraction:** Color classification, gate detection, wire flood fill and gate-to-wire linking.
//! 2. **Circuit:** The `CircuitModel` aggregate owning gates, wires and crossings for one image.
//! 3. **Simulation:** A clear/evaluate/swap tick engine and a fixed-rate real-time driver.
//! 4. **Support:** Configuration, statistics and a serializable state snapshot.

/// Common types (pixel coordinates, directions, ids, errors).
pub mod common;
/// Circuit model (gates, wires, pixel index, snapshot).
pub mod circuit;
/// Simulator configuration (defaults and JSON deserialization).
pub mod config;
/// Blueprint extraction pipeline (classifier, gates, wires, linker).
pub mod extract;
/// Tick engine and real-time driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// The loaded circuit; construct with `CircuitModel::load` or `CircuitModel::open`.
pub use crate::circuit::CircuitModel;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Fixed-rate driver that maps wall-clock time to simulation ticks.
pub use crate::sim::driver::RealtimeDriver;
