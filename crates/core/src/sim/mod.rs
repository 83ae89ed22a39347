//! Simulation: the tick engine and the real-time driver.
//!
//! The engine advances a circuit one discrete tick at a time and knows nothing
//! about wall-clock time; the driver decides how many ticks to run per frame.

/// Fixed-rate real-time driver.
pub mod driver;
/// Clear/evaluate/swap tick engine.
pub mod engine;

pub use driver::{DriverReport, RealtimeDriver};
pub use engine::{Phase, SimulationEngine};
