//! Tiled Life - double-buffered, tile-parallel Game of Life engine.
//!
//! A square grid of `u32` cells (0 = dead, non-zero = alive) is advanced one
//! generation at a time under the B3/S23 rule. Each generation reads the
//! `current` buffer, writes `next` in disjoint tiles on a rayon pool, then
//! swaps the two. Runs can stop early once a generation changes nothing.
//!
//! The Rust API lives in [`automaton`]; [`ffi`] exposes a C ABI for render
//! loops and benchmark drivers written in other languages.
//!
//! ```
//! use tiled_life::{Engine, EngineConfig, RunOutcome, ALIVE};
//!
//! let mut engine = Engine::new(&EngineConfig::default().dim(16).tile_count(4)).unwrap();
//! for col in 3..6 {
//!     engine.set_cell(8, col, ALIVE).unwrap();
//! }
//! let summary = engine.run(10).unwrap();
//! assert_eq!(summary.outcome, RunOutcome::Exhausted);
//! ```

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;


pub use automaton::{
    Buffer, Engine, GenerationBackend, Grid, RunOutcome, RunState, RunSummary, SeedPattern, Tile,
    TileLayout, ALIVE, DEAD,
};
pub use config::{BackendKind, EngineConfig, Partition};
pub use error::EngineError;
