//! C FFI layer for render loops and benchmark drivers.
//!
//! This module exports C ABI functions over an opaque `Engine` handle.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions.

pub mod grid;
pub mod lifecycle;
pub mod patterns;
pub mod region;

pub use grid::{tl_get_cell, tl_run, tl_set_cell, tl_set_stop_when_stable, tl_step};
pub use lifecycle::{tl_create, tl_destroy, tl_get_dim, tl_get_generation};
pub use patterns::tl_seed;
pub use region::{tl_extract_region, tl_import_region};
