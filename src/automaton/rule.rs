//! Conway B3/S23 transition rule.
//!
//! - Birth: a dead cell with exactly 3 live neighbors becomes alive
//! - Survival: a live cell with 2 or 3 live neighbors stays alive
//! - Moore neighborhood (8 neighbors), no wrap: cells off the grid don't exist

/// Stored value of a live cell written by the rule (yellow, RGBA).
pub const ALIVE: u32 = 0xFFFF_00FF;

/// Stored value of a dead cell.
pub const DEAD: u32 = 0;

/// Any non-zero value counts as alive, whoever wrote it.
#[inline]
pub fn is_alive(value: u32) -> bool {
    value != 0
}

/// Stored representation of a logical state.
#[inline]
pub fn encode(alive: bool) -> u32 {
    if alive {
        ALIVE
    } else {
        DEAD
    }
}

/// Next logical state of a cell.
#[inline]
pub fn next_state(is_alive_now: bool, live_neighbors: u8) -> bool {
    matches!((is_alive_now, live_neighbors), (true, 2) | (_, 3))
}

/// Count live neighbors of `(row, col)` in a row-major `dim x dim` buffer.
pub fn count_live_neighbors(current: &[u32], dim: usize, row: usize, col: usize) -> u8 {
    let row_lo = row.saturating_sub(1);
    let row_hi = (row + 1).min(dim - 1);
    let col_lo = col.saturating_sub(1);
    let col_hi = (col + 1).min(dim - 1);

    let mut count = 0;
    for r in row_lo..=row_hi {
        let line = &current[r * dim..(r + 1) * dim];
        for c in col_lo..=col_hi {
            // Skip the center cell
            if r == row && c == col {
                continue;
            }
            if is_alive(line[c]) {
                count += 1;
            }
        }
    }

    count
}
