//! Tile evaluation.
//!
//! Core invariant: a tile reads only the immutable `current` buffer (neighbor
//! reads may cross into other tiles) and writes only its own region of
//! `next`. Disjoint tiles never alias, so any number of them can run at once.

use crate::automaton::rule::{count_live_neighbors, encode, is_alive, next_state};

/// Axis-aligned rectangle of cells, inclusive bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl Tile {
    /// The tile covering a whole `dim x dim` grid. `None` for `dim == 0`.
    pub fn full(dim: usize) -> Option<Self> {
        let last = dim.checked_sub(1)?;
        Some(Tile {
            row_start: 0,
            row_end: last,
            col_start: 0,
            col_end: last,
        })
    }

    /// Number of rows covered.
    #[inline]
    pub fn height(&self) -> usize {
        self.row_end - self.row_start + 1
    }

    /// Number of columns covered.
    #[inline]
    pub fn width(&self) -> usize {
        self.col_end - self.col_start + 1
    }

    /// Number of cells in the tile.
    #[inline]
    pub fn cells(&self) -> usize {
        self.height() * self.width()
    }

    /// Whether `(row, col)` lies inside the tile.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.row_start..=self.row_end).contains(&row)
            && (self.col_start..=self.col_end).contains(&col)
    }
}

/// A tile together with exclusive access to its region of `next`.
///
/// `rows[i]` is the slice of `next` for grid row `tile.row_start + i`,
/// columns `tile.col_start..=tile.col_end`.
pub struct TileView<'a> {
    pub tile: Tile,
    pub rows: Vec<&'a mut [u32]>,
}

impl TileView<'_> {
    /// Apply the rule to every cell of the tile. Returns whether any cell flipped.
    pub fn evaluate(&mut self, current: &[u32], dim: usize) -> bool {
        evaluate_tile(&self.tile, current, dim, &mut self.rows)
    }
}

/// Compute the next state of every cell in `tile`.
///
/// `current` is the full row-major generation-N buffer; `next_rows` holds one
/// slice per tile row, each exactly `tile.width()` long. Returns true if any
/// cell's alive status differs between `current` and what was written.
pub fn evaluate_tile(
    tile: &Tile,
    current: &[u32],
    dim: usize,
    next_rows: &mut [&mut [u32]],
) -> bool {
    debug_assert_eq!(next_rows.len(), tile.height());
    tracing::trace!(
        row_start = tile.row_start,
        row_end = tile.row_end,
        col_start = tile.col_start,
        col_end = tile.col_end,
        "evaluating tile"
    );

    let mut changed = false;

    for (i, line) in next_rows.iter_mut().enumerate() {
        debug_assert_eq!(line.len(), tile.width());
        let row = tile.row_start + i;

        for (j, slot) in line.iter_mut().enumerate() {
            let col = tile.col_start + j;
            let alive_now = is_alive(current[row * dim + col]);
            let neighbors = count_live_neighbors(current, dim, row, col);
            let alive_next = next_state(alive_now, neighbors);

            *slot = encode(alive_next);
            changed |= alive_now != alive_next;
        }
    }

    changed
}
