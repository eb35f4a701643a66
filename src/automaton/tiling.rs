//! Grid partitioning and parallel tile dispatch.
//!
//! A generation is computed by splitting `next` into disjoint tile regions,
//! evaluating every tile against the shared read-only `current`, and joining
//! before the driver swaps buffers. Tile order never affects the result.

use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;

use crate::automaton::grid::Grid;
use crate::automaton::tile::{evaluate_tile, Tile, TileView};
use crate::config::Partition;
use crate::error::EngineError;

/// Inclusive `(start, end)` bounds of one band of rows or columns.
type Band = (usize, usize);

/// A fixed decomposition of a `dim x dim` grid into tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileLayout {
    dim: usize,
    row_bands: Vec<Band>,
    col_bands: Vec<Band>,
}

/// Cut `[0, dim)` into `count` bands of `dim / count`, the last one absorbing
/// the remainder.
fn bands(dim: usize, count: usize) -> Vec<Band> {
    let size = dim / count;
    (0..count)
        .map(|i| {
            let start = i * size;
            let end = if i + 1 == count {
                dim - 1
            } else {
                start + size - 1
            };
            (start, end)
        })
        .collect()
}

/// Factor `n` as `rows x cols` with `rows` the largest divisor not above `sqrt(n)`.
fn block_shape(n: usize) -> (usize, usize) {
    let mut rows = 1;
    let mut d = 1;
    while d * d <= n {
        if n % d == 0 {
            rows = d;
        }
        d += 1;
    }
    (rows, n / rows)
}

impl TileLayout {
    /// Build a layout of (at most) `tile_count` tiles.
    ///
    /// Band counts are clamped to `dim` so that every tile holds at least one
    /// cell; the actual count is available through [`TileLayout::len`].
    pub fn new(dim: usize, tile_count: usize, partition: Partition) -> Result<Self, EngineError> {
        if dim == 0 {
            return Err(EngineError::InvalidDimension { dim: 0 });
        }
        if tile_count == 0 {
            return Err(EngineError::InvalidTileCount);
        }

        let (rows, cols) = match partition {
            Partition::Rows => (tile_count, 1),
            Partition::Columns => (1, tile_count),
            Partition::Blocks => block_shape(tile_count),
        };

        Ok(TileLayout {
            dim,
            row_bands: bands(dim, rows.min(dim)),
            col_bands: bands(dim, cols.min(dim)),
        })
    }

    /// Side length of the grid this layout was built for.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of tiles in the layout.
    #[inline]
    pub fn len(&self) -> usize {
        self.row_bands.len() * self.col_bands.len()
    }

    /// Always false for a layout built by [`TileLayout::new`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tile grid shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.row_bands.len(), self.col_bands.len())
    }

    /// All tiles, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.row_bands.iter().flat_map(move |&(row_start, row_end)| {
            self.col_bands
                .iter()
                .map(move |&(col_start, col_end)| Tile {
                    row_start,
                    row_end,
                    col_start,
                    col_end,
                })
        })
    }

    /// Partition `next` into one exclusive view per tile, row-major.
    pub fn split<'a>(&self, next: &'a mut [u32]) -> Vec<TileView<'a>> {
        debug_assert_eq!(next.len(), self.dim * self.dim);

        let cols = self.col_bands.len();
        let mut views: Vec<TileView<'a>> = self
            .tiles()
            .map(|tile| TileView {
                tile,
                rows: Vec::with_capacity(tile.height()),
            })
            .collect();

        let mut band_row = 0;
        for (row, line) in next.chunks_exact_mut(self.dim).enumerate() {
            if row > self.row_bands[band_row].1 {
                band_row += 1;
            }

            let mut rest = line;
            for (band_col, &(start, end)) in self.col_bands.iter().enumerate() {
                let (segment, tail) = std::mem::take(&mut rest).split_at_mut(end - start + 1);
                views[band_row * cols + band_col].rows.push(segment);
                rest = tail;
            }
        }

        views
    }
}

/// Computes one generation from `current` into `next`.
///
/// Implementations must either write every cell of `next` or return an
/// error; the driver never swaps after an error. Alternative engines (an
/// accelerator, a distributed grid) plug in here.
pub trait GenerationBackend: Send {
    /// Compute generation N+1 into the grid's `next` buffer.
    /// Returns whether any cell changed alive status.
    fn step_generation(&self, grid: &mut Grid) -> Result<bool, EngineError>;

    /// Reject grids this backend cannot step. Called once when an engine is built.
    fn check(&self, _dim: usize) -> Result<(), EngineError> {
        Ok(())
    }

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

/// Whole grid as one tile, evaluated on the calling thread.
#[derive(Debug, Default)]
pub struct SequentialScheduler;

impl GenerationBackend for SequentialScheduler {
    fn step_generation(&self, grid: &mut Grid) -> Result<bool, EngineError> {
        let dim = grid.dim();
        let Some(tile) = Tile::full(dim) else {
            return Err(EngineError::InvalidDimension { dim: 0 });
        };
        let (current, next) = grid.buffers_mut();
        let mut rows: Vec<&mut [u32]> = next.chunks_exact_mut(dim).collect();
        Ok(evaluate_tile(&tile, current, dim, &mut rows))
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}

/// Tiles dispatched on a dedicated rayon pool.
pub struct TiledScheduler {
    layout: TileLayout,
    pool: rayon::ThreadPool,
}

impl TiledScheduler {
    /// Create a scheduler. `threads == None` lets rayon pick the pool size.
    pub fn new(layout: TileLayout, threads: Option<usize>) -> Result<Self, EngineError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads.unwrap_or(0))
            .thread_name(|i| format!("tile-worker-{i}"))
            .build()?;

        Ok(TiledScheduler { layout, pool })
    }

    /// The tile decomposition used for every generation.
    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    /// Number of worker threads in the pool.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `eval` on every view inside the pool and OR the change flags.
    ///
    /// `install()` returns only once every tile has finished: this is the
    /// generation barrier. A panicking tile surfaces as `TileScheduling`.
    fn dispatch<'a, F>(&self, views: Vec<TileView<'a>>, eval: F) -> Result<bool, EngineError>
    where
        F: Fn(&mut TileView<'a>) -> bool + Sync,
    {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.pool.install(|| {
                views
                    .into_par_iter()
                    .map(|mut view| eval(&mut view))
                    .reduce(|| false, |a, b| a | b)
            })
        }));

        outcome.map_err(|payload| EngineError::TileScheduling {
            reason: panic_message(payload.as_ref()),
        })
    }
}

impl GenerationBackend for TiledScheduler {
    fn step_generation(&self, grid: &mut Grid) -> Result<bool, EngineError> {
        self.check(grid.dim())?;

        let dim = grid.dim();
        let (current, next) = grid.buffers_mut();
        let views = self.layout.split(next);
        self.dispatch(views, |view| view.evaluate(current, dim))
    }

    fn check(&self, dim: usize) -> Result<(), EngineError> {
        if dim != self.layout.dim() {
            return Err(EngineError::DimensionMismatch {
                backend: self.layout.dim(),
                grid: dim,
            });
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "tiled"
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("tile worker panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("tile worker panicked: {s}")
    } else {
        "tile worker panicked".to_string()
    }
}
