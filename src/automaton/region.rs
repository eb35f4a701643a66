//! Region extraction and import operations on the current generation.

use crate::automaton::grid::Grid;
use crate::automaton::rule::{encode, is_alive};

/// Clamp a half-open rectangle to the grid. `None` if it is empty.
fn clamp_region(
    grid: &Grid,
    min_row: i64,
    min_col: i64,
    max_row: i64,
    max_col: i64,
) -> Option<(usize, usize, usize, usize)> {
    let dim = grid.dim() as i64;
    let min_row = min_row.clamp(0, dim) as usize;
    let min_col = min_col.clamp(0, dim) as usize;
    let max_row = max_row.clamp(0, dim) as usize;
    let max_col = max_col.clamp(0, dim) as usize;

    if min_row >= max_row || min_col >= max_col {
        return None;
    }
    Some((min_row, min_col, max_row, max_col))
}

/// Copy a rectangle of the current generation into a flat buffer.
///
/// # Layout
/// The buffer is filled row-major (row changes slowest, column fastest),
/// the same order `import_region` reads. Bounds are half-open and clamped
/// to the grid.
///
/// # Returns
/// Number of cells written, or 0 if the region is empty or `out_buf` is too small.
pub fn extract_region(
    grid: &Grid,
    out_buf: &mut [u32],
    min_row: i64,
    min_col: i64,
    max_row: i64,
    max_col: i64,
) -> usize {
    let Some((min_row, min_col, max_row, max_col)) =
        clamp_region(grid, min_row, min_col, max_row, max_col)
    else {
        return 0;
    };

    let width = max_col - min_col;
    let total_size = (max_row - min_row) * width;
    if out_buf.len() < total_size {
        return 0;
    }

    let current = grid.current();
    for (row, out_line) in (min_row..max_row).zip(out_buf.chunks_exact_mut(width)) {
        let start = grid.index_of(row, min_col);
        out_line.copy_from_slice(&current[start..start + width]);
    }

    total_size
}

/// Write a rectangle of the current generation from a flat buffer.
///
/// Input values are normalized: 0 = dead, any non-zero = the alive sentinel.
///
/// # Returns
/// Number of cells read, or 0 if the region is empty or `in_buf` is too short.
pub fn import_region(
    grid: &mut Grid,
    in_buf: &[u32],
    min_row: i64,
    min_col: i64,
    max_row: i64,
    max_col: i64,
) -> usize {
    let Some((min_row, min_col, max_row, max_col)) =
        clamp_region(grid, min_row, min_col, max_row, max_col)
    else {
        return 0;
    };

    let width = max_col - min_col;
    let total_size = (max_row - min_row) * width;
    if in_buf.len() < total_size {
        return 0;
    }

    let dim = grid.dim();
    let current = grid.current_mut();
    for (row, in_line) in (min_row..max_row).zip(in_buf.chunks_exact(width)) {
        let start = row * dim + min_col;
        for (slot, &value) in current[start..start + width].iter_mut().zip(in_line) {
            *slot = encode(is_alive(value));
        }
    }

    total_size
}
