//! Core automaton logic: storage, rule, tiles, scheduling and the driver.
//!
//! The FFI layer in `ffi/` calls into these modules.

pub mod driver;
pub mod grid;
pub mod patterns;
pub mod region;
pub mod rule;
pub mod tile;
pub mod tiling;

pub use driver::{Engine, RunOutcome, RunState, RunSummary};
pub use grid::{Buffer, Grid};
pub use patterns::SeedPattern;
pub use region::{extract_region, import_region};
pub use rule::{count_live_neighbors, is_alive, next_state, ALIVE, DEAD};
pub use tile::{evaluate_tile, Tile, TileView};
pub use tiling::{GenerationBackend, SequentialScheduler, TileLayout, TiledScheduler};
