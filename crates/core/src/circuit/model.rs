//! The circuit model: one loaded blueprint and its simulation state.
//!
//! A `CircuitModel` is built once by running the extraction pipeline over an
//! image and is then changed only by [`toggle`](CircuitModel::toggle) (external
//! input) and [`step`](CircuitModel::step) (simulation). Both take `&mut self`,
//! so callers cannot run them concurrently on the same model.

use std::path::Path;

use tracing::{debug, info};

use super::gate::Gate;
use super::index::PixelIndex;
use super::snapshot::CircuitSnapshot;
use super::wire::Wire;
use crate::common::{CircuitError, GateId, LoadError, PixelCoord, WireId};
use crate::config::Config;
use crate::extract::{self, Extraction, PixelGrid, PixelSource};
use crate::sim::engine::SimulationEngine;
use crate::stats::SimStats;

/// Gates, wires and crossings of one blueprint image.
#[derive(Debug)]
pub struct CircuitModel {
    width: u32,
    height: u32,
    gates: Vec<Gate>,
    wires: Vec<Wire>,
    crossings: Vec<PixelCoord>,
    index: PixelIndex,
    engine: SimulationEngine,
    stats: SimStats,
}

impl CircuitModel {
    /// Builds a model from any pixel source with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`load_with_config`](Self::load_with_config).
    pub fn load<S: PixelSource + ?Sized>(source: &S) -> Result<Self, LoadError> {
        Self::load_with_config(source, &Config::default())
    }

    /// Builds a model from any pixel source.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] for a zero-sized image and
    /// [`LoadError::TooLarge`] when the image exceeds `config.load.max_pixels`
    /// (capped at [`PixelIndex::MAX_PIXELS`]).
    pub fn load_with_config<S: PixelSource + ?Sized>(
        source: &S,
        config: &Config,
    ) -> Result<Self, LoadError> {
        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return Err(LoadError::Empty { width, height });
        }
        let pixels = u64::from(width) * u64::from(height);
        let limit = config.load.max_pixels.min(PixelIndex::MAX_PIXELS);
        if pixels > limit {
            return Err(LoadError::TooLarge { pixels, limit });
        }

        let Extraction {
            gates,
            wires,
            crossings,
            index,
            inert_gates,
        } = extract::extract(PixelGrid::from_source(source));

        let stats = SimStats::for_circuit(
            gates.len(),
            inert_gates,
            wires.len(),
            wires.iter().filter(|w| w.touchable).count(),
            crossings.len(),
        );
        info!(
            gates = stats.gates,
            inert = stats.inert_gates,
            wires = stats.wires,
            crossings = stats.crossings,
            "ready"
        );

        Ok(Self {
            width,
            height,
            gates,
            wires,
            crossings,
            index,
            engine: SimulationEngine::new(config.general.trace_ticks),
            stats,
        })
    }

    /// Decodes an image file and builds a model with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Decode`] if the file cannot be read or decoded, and
    /// any error of [`load_with_config`](Self::load_with_config).
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::open_with_config(path, &Config::default())
    }

    /// Decodes an image file and builds a model.
    ///
    /// # Errors
    ///
    /// As for [`open`](Self::open).
    pub fn open_with_config(path: impl AsRef<Path>, config: &Config) -> Result<Self, LoadError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading blueprint");
        let image = image::open(path)?.into_rgba8();
        Self::load_with_config(&image, config)
    }

    /// Decodes an in-memory encoded image (PNG or BMP) and builds a model.
    ///
    /// # Errors
    ///
    /// As for [`open`](Self::open).
    pub fn from_bytes(bytes: &[u8], config: &Config) -> Result<Self, LoadError> {
        let image = image::load_from_memory(bytes)?.into_rgba8();
        Self::load_with_config(&image, config)
    }

    /// Image `(width, height)`.
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// All gates; a gate's position in the slice is its [`GateId`].
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// All wires; a wire's position in the slice is its [`WireId`].
    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// Distinct crossing pixels in first-seen order.
    pub fn crossings(&self) -> &[PixelCoord] {
        &self.crossings
    }

    /// The gate with id `id`.
    pub fn gate(&self, id: GateId) -> Option<&Gate> {
        self.gates.get(id.index())
    }

    /// The wire with id `id`.
    pub fn wire(&self, id: WireId) -> Option<&Wire> {
        self.wires.get(id.index())
    }

    /// Wire owning the pixel at `coord`.
    pub fn wire_at(&self, coord: PixelCoord) -> Option<WireId> {
        self.index.wire_at(coord)
    }

    /// First gate whose input or type marker is at `coord`.
    pub fn gate_at(&self, coord: PixelCoord) -> Option<GateId> {
        self.index.gate_at(coord)
    }

    /// Statistics collected so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    pub(crate) const fn stats_mut(&mut self) -> &mut SimStats {
        &mut self.stats
    }

    /// Flips a touchable wire between low and high.
    ///
    /// # Errors
    ///
    /// Returns [`CircuitError::InvalidWireId`] for an unknown id and
    /// [`CircuitError::NotTouchable`] for a gate-driven wire. Nothing changes on error.
    pub fn toggle(&mut self, id: WireId) -> Result<(), CircuitError> {
        let count = self.wires.len();
        let wire = self
            .wires
            .get_mut(id.index())
            .ok_or(CircuitError::InvalidWireId {
                id: id.index(),
                count,
            })?;
        if !wire.touchable {
            return Err(CircuitError::NotTouchable(id));
        }
        wire.state = wire.state.toggled();
        self.stats.toggles += 1;
        debug!(wire = %id, state = %wire.state, "toggled");
        Ok(())
    }

    /// Toggles the wire under pixel `coord`, as a click handler would.
    ///
    /// Returns `Ok(None)` when no wire owns the pixel.
    ///
    /// # Errors
    ///
    /// Returns [`CircuitError::NotTouchable`] when the wire there is driven.
    pub fn toggle_at(&mut self, coord: PixelCoord) -> Result<Option<WireId>, CircuitError> {
        let Some(id) = self.index.wire_at(coord) else {
            return Ok(None);
        };
        self.toggle(id)?;
        Ok(Some(id))
    }

    /// Advances the simulation by `n` ticks.
    pub fn step(&mut self, n: u64) {
        self.engine
            .step(&self.gates, &mut self.wires, n, &mut self.stats);
    }

    /// Serializable copy of the current state.
    pub fn snapshot(&self) -> CircuitSnapshot {
        CircuitSnapshot::capture(self)
    }
}
