//! Bulk transfer of the current generation for renderers and dump writers.

use crate::automaton::{self, Engine};

/// Copies a rectangle of the current generation into a flat output buffer.
/// The buffer is filled row-major (row changes slowest, column fastest).
/// Bounds are half-open and clamped to the grid.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine
/// - `out_buf` must point to at least `buf_len` writable u32 values
///
/// # Returns
/// Number of cells written, or 0 on error (null pointer, empty region, short buffer).
#[no_mangle]
pub unsafe extern "C" fn tl_extract_region(
    ptr: *const Engine,
    out_buf: *mut u32,
    buf_len: u64,
    min_row: i32,
    min_col: i32,
    max_row: i32,
    max_col: i32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let engine = &*ptr;
    let out_slice = std::slice::from_raw_parts_mut(out_buf, buf_len as usize);
    automaton::extract_region(
        engine.grid(),
        out_slice,
        min_row as i64,
        min_col as i64,
        max_row as i64,
        max_col as i64,
    ) as u64
}

/// Writes a rectangle of the current generation from a flat buffer.
///
/// Buffer layout matches `tl_extract_region`. Input values are normalized:
/// 0 = dead, non-zero = alive.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine
/// - `in_buf` must point to at least `buf_len` readable u32 values
///
/// # Returns
/// Number of cells read, or 0 on error (null pointer, empty region, short buffer).
#[no_mangle]
pub unsafe extern "C" fn tl_import_region(
    ptr: *mut Engine,
    in_buf: *const u32,
    buf_len: u64,
    min_row: i32,
    min_col: i32,
    max_row: i32,
    max_col: i32,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let engine = &mut *ptr;
    let in_slice = std::slice::from_raw_parts(in_buf, buf_len as usize);
    automaton::import_region(
        engine.grid_mut(),
        in_slice,
        min_row as i64,
        min_col as i64,
        max_row as i64,
        max_col as i64,
    ) as u64
}
