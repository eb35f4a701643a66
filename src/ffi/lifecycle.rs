//! Engine creation, destruction, and generation queries.

use crate::automaton::Engine;
use crate::config::EngineConfig;

/// Creates a new engine with a zero-filled `dim x dim` grid.
///
/// `tile_count` tiles are laid out as 2D blocks; `num_threads == 0` lets the
/// pool size itself.
///
/// # Returns
/// A pointer to a new Engine, or null if `dim <= 0`, `tile_count == 0`,
/// or the grid or worker pool cannot be created.
///
/// # Safety
/// The returned pointer must eventually be freed with `tl_destroy()`.
#[no_mangle]
pub extern "C" fn tl_create(dim: i32, tile_count: u32, num_threads: u8) -> *mut Engine {
    if dim <= 0 {
        tracing::warn!(dim, "rejecting non-positive grid dimension");
        return std::ptr::null_mut();
    }

    let mut config = EngineConfig::default()
        .dim(dim as usize)
        .tile_count(tile_count as usize);
    if num_threads != 0 {
        config = config.threads(num_threads as usize);
    }

    match Engine::new(&config) {
        Ok(engine) => Box::into_raw(Box::new(engine)),
        Err(err) => {
            tracing::warn!(%err, "cannot create engine");
            std::ptr::null_mut()
        }
    }
}

/// Destroys an engine and frees both buffers.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `tl_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn tl_destroy(ptr: *mut Engine) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the number of completed generations.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn tl_get_generation(ptr: *const Engine) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// Gets the grid side length.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// The dimension, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn tl_get_dim(ptr: *const Engine) -> i32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).dim() as i32
}
