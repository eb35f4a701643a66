//! Cell access, stepping, and bounded runs.

use crate::automaton::{Engine, RunOutcome};
use crate::error::EngineError;

/// Writes a raw value into the current generation (0 = dead, non-zero = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine
///
/// Out-of-bounds coordinates are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn tl_set_cell(ptr: *mut Engine, row: i32, col: i32, value: u32) {
    if ptr.is_null() || row < 0 || col < 0 {
        return;
    }

    let engine = &mut *ptr;
    let _ = engine.set_cell(row as usize, col as usize, value);
}

/// Reads a cell of the current generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine
///
/// # Returns
/// The stored value, or 0 if out of bounds or null pointer.
#[no_mangle]
pub unsafe extern "C" fn tl_get_cell(ptr: *const Engine, row: i32, col: i32) -> u32 {
    if ptr.is_null() || row < 0 || col < 0 {
        return 0;
    }

    let engine = &*ptr;
    engine.cell(row as usize, col as usize).unwrap_or(0)
}

/// Advances the automaton by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine
///
/// # Returns
/// 1 if some cell changed, 0 if the generation was stable, -1 on error or null pointer.
#[no_mangle]
pub unsafe extern "C" fn tl_step(ptr: *mut Engine) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    let engine = &mut *ptr;
    match engine.step() {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(err) => {
            tracing::warn!(%err, "step failed");
            -1
        }
    }
}

/// Runs up to `max_generations` generations.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine
/// - `out_executed` must be null or point to a writable u64
///
/// The number of generations completed is written to `out_executed` when it
/// is non-null, including on failure.
///
/// # Returns
/// 0 if the run stabilized, 1 if the budget was exhausted, -1 on error or null pointer.
#[no_mangle]
pub unsafe extern "C" fn tl_run(ptr: *mut Engine, max_generations: u64, out_executed: *mut u64) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    let engine = &mut *ptr;
    let (code, executed) = match engine.run(max_generations) {
        Ok(summary) => match summary.outcome {
            RunOutcome::Stabilized => (0, summary.generations),
            RunOutcome::Exhausted => (1, summary.generations),
        },
        Err(EngineError::RunAborted { completed, .. }) => (-1, completed),
        Err(_) => (-1, 0),
    };

    if !out_executed.is_null() {
        *out_executed = executed;
    }
    code
}

/// Chooses whether `tl_run` halts on the first unchanged generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
#[no_mangle]
pub unsafe extern "C" fn tl_set_stop_when_stable(ptr: *mut Engine, stop: u8) {
    if ptr.is_null() {
        return;
    }

    (*ptr).set_stop_when_stable(stop != 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::ALIVE;
    use crate::ffi::lifecycle;
    use std::ptr;

    #[test]
    fn test_set_and_get_cell() {
        unsafe {
            let engine = lifecycle::tl_create(8, 4, 1);

            tl_set_cell(engine, 0, 0, ALIVE);
            assert_eq!(tl_get_cell(engine, 0, 0), ALIVE);

            tl_set_cell(engine, 0, 0, 0);
            assert_eq!(tl_get_cell(engine, 0, 0), 0);

            lifecycle::tl_destroy(engine);
        }
    }

    #[test]
    fn test_out_of_bounds_access() {
        unsafe {
            let engine = lifecycle::tl_create(4, 4, 1);

            assert_eq!(tl_get_cell(engine, -1, 0), 0);
            assert_eq!(tl_get_cell(engine, 4, 0), 0);

            // Should not crash
            tl_set_cell(engine, -1, 0, ALIVE);
            tl_set_cell(engine, 0, 4, ALIVE);
            assert_eq!((*engine).grid().population(), 0);

            lifecycle::tl_destroy(engine);
        }
    }

    #[test]
    fn test_step_blinker() {
        unsafe {
            let engine = lifecycle::tl_create(8, 4, 2);
            tl_set_cell(engine, 4, 3, ALIVE);
            tl_set_cell(engine, 4, 4, ALIVE);
            tl_set_cell(engine, 4, 5, ALIVE);

            assert_eq!(tl_step(engine), 1);
            assert_eq!(lifecycle::tl_get_generation(engine), 1);
            assert_eq!(tl_get_cell(engine, 3, 4), ALIVE);
            assert_eq!(tl_get_cell(engine, 4, 3), 0);

            lifecycle::tl_destroy(engine);
        }
    }

    #[test]
    fn test_run_codes() {
        unsafe {
            let engine = lifecycle::tl_create(8, 4, 1);
            let mut executed = 0u64;

            // Empty grid stabilizes on the first generation
            assert_eq!(tl_run(engine, 100, &mut executed), 0);
            assert_eq!(executed, 1);

            tl_set_stop_when_stable(engine, 0);
            assert_eq!(tl_run(engine, 5, &mut executed), 1);
            assert_eq!(executed, 5);

            // Null out pointer is allowed
            assert_eq!(tl_run(engine, 2, ptr::null_mut()), 1);
            assert_eq!(lifecycle::tl_get_generation(engine), 8);

            lifecycle::tl_destroy(engine);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            tl_set_cell(ptr::null_mut(), 0, 0, 1); // Should not crash
            assert_eq!(tl_get_cell(ptr::null(), 0, 0), 0);
            assert_eq!(tl_step(ptr::null_mut()), -1);
            assert_eq!(tl_run(ptr::null_mut(), 10, ptr::null_mut()), -1);
            tl_set_stop_when_stable(ptr::null_mut(), 1); // Should not crash
        }
    }
}
