//! Engine error types.

use thiserror::Error;

/// Errors that can occur while building or stepping an engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Grid side length was zero (or negative through the C ABI).
    #[error("invalid grid dimension: {dim}")]
    InvalidDimension { dim: i64 },

    /// The buffer pair could not be allocated.
    #[error("cannot allocate {cells} cells per buffer")]
    AllocationFailure { cells: u128 },

    /// A layout was requested with zero tiles.
    #[error("tile count must be at least 1")]
    InvalidTileCount,

    /// The worker pool could not be built.
    #[error("cannot build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A backend was built for a different grid size.
    #[error("backend built for a {backend}x{backend} grid, got {grid}x{grid}")]
    DimensionMismatch { backend: usize, grid: usize },

    /// A tile did not complete; the generation is unusable.
    #[error("tile scheduling failed: {reason}")]
    TileScheduling { reason: String },

    /// A run stopped on a failed generation.
    #[error("run aborted after {completed} completed generations")]
    RunAborted {
        completed: u64,
        #[source]
        source: Box<EngineError>,
    },

    /// Cell access outside `[0, dim)`.
    #[error("cell ({row}, {col}) is outside a {dim}x{dim} grid")]
    OutOfRange { row: usize, col: usize, dim: usize },

    /// Seed pattern name not recognised.
    #[error("unknown seed pattern: {0}")]
    UnknownPattern(String),
}
