//! Engine configuration.
//!
//! `EngineConfig::default()` gives a 512x512 grid split into 16 blocks on a
//! rayon pool sized by rayon itself. Individual knobs are set through the
//! consuming builder methods.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// How the grid is cut into tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Partition {
    /// Horizontal stripes, one band of rows per tile.
    Rows,
    /// Vertical stripes, one band of columns per tile.
    Columns,
    /// Roughly square 2D blocks.
    #[default]
    Blocks,
}

/// Which generation backend drives the tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BackendKind {
    /// Whole grid as a single tile on the calling thread.
    Sequential,
    /// Tiles dispatched on a rayon pool.
    #[default]
    Tiled,
}

/// Configuration for an [`Engine`](crate::automaton::Engine).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Side length of the square grid.
    pub dim: usize,
    /// Requested number of tiles. Clamped so that no tile is empty.
    pub tile_count: usize,
    /// Tiling scheme used by the tiled backend.
    pub partition: Partition,
    /// Worker threads for the tiled backend. `None` lets rayon decide.
    pub threads: Option<usize>,
    /// Backend selection.
    pub backend: BackendKind,
    /// Halt `run` at the first generation that changes nothing.
    pub stop_when_stable: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dim: 512,
            tile_count: 16,
            partition: Partition::Blocks,
            threads: None,
            backend: BackendKind::Tiled,
            stop_when_stable: true,
        }
    }
}

impl EngineConfig {
    /// Set the grid side length.
    pub fn dim(mut self, dim: usize) -> Self {
        self.dim = dim;
        self
    }

    /// Set the requested tile count.
    pub fn tile_count(mut self, n: usize) -> Self {
        self.tile_count = n;
        self
    }

    /// Set the tiling scheme.
    pub fn partition(mut self, partition: Partition) -> Self {
        self.partition = partition;
        self
    }

    /// Set an explicit worker thread count.
    pub fn threads(mut self, n: usize) -> Self {
        self.threads = Some(n.max(1));
        self
    }

    /// Select the backend.
    pub fn backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Choose whether `run` halts on stabilization.
    pub fn stop_when_stable(mut self, stop: bool) -> Self {
        self.stop_when_stable = stop;
        self
    }

    /// Reject configurations that cannot produce an engine.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.dim == 0 {
            return Err(EngineError::InvalidDimension { dim: 0 });
        }
        if self.tile_count == 0 {
            return Err(EngineError::InvalidTileCount);
        }
        Ok(())
    }
}
