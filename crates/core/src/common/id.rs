//! Gate and wire identifiers.
//!
//! Gates and wires live in `Vec` arenas owned by the circuit model. Cross
//! references (a gate's input and output wire) are plain indices wrapped in
//! these newtypes, so an unresolved link is simply `Option::None`.

use std::fmt;

use serde::Serialize;

/// Index of a wire in [`CircuitModel::wires`](crate::CircuitModel::wires).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct WireId(pub usize);

/// Index of a gate in [`CircuitModel::gates`](crate::CircuitModel::gates).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct GateId(pub usize);

impl WireId {
    /// Returns the arena index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl GateId {
    /// Returns the arena index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}
