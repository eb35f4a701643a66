//! Double-buffered grid storage and cell access helpers.

use crate::automaton::rule::is_alive;
use crate::error::EngineError;

/// Selects one of the two buffers of a [`Grid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Buffer {
    /// The readable generation.
    Current,
    /// The generation being written.
    Next,
}

/// A square pair of cell buffers.
///
/// `current` holds generation N and is only ever read while a generation is
/// computed; `next` receives generation N+1. Both have `dim * dim` cells,
/// stored row-major, and are never resized after construction.
#[derive(Clone, Debug)]
pub struct Grid {
    dim: usize,
    current: Vec<u32>, // 0 = dead, non-zero = alive
    next: Vec<u32>,
}

impl Grid {
    /// Allocate a zero-filled buffer pair of side `dim`.
    pub fn new(dim: usize) -> Result<Self, EngineError> {
        if dim == 0 {
            return Err(EngineError::InvalidDimension { dim: 0 });
        }

        let cells = dim
            .checked_mul(dim)
            .ok_or(EngineError::AllocationFailure {
                cells: dim as u128 * dim as u128,
            })?;

        Ok(Grid {
            dim,
            current: allocate(cells)?,
            next: allocate(cells)?,
        })
    }

    /// Side length of the grid.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Linear index for a `(row, col)` coordinate.
    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.dim + col
    }

    /// Check if coordinates are within grid bounds.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.dim && col < self.dim
    }

    /// Read a cell from either buffer.
    pub fn cell(&self, buffer: Buffer, row: usize, col: usize) -> Result<u32, EngineError> {
        let idx = self.checked_index(row, col)?;
        Ok(self.buffer(buffer)[idx])
    }

    /// Write a cell in either buffer.
    pub fn set(
        &mut self,
        buffer: Buffer,
        row: usize,
        col: usize,
        value: u32,
    ) -> Result<(), EngineError> {
        let idx = self.checked_index(row, col)?;
        match buffer {
            Buffer::Current => self.current[idx] = value,
            Buffer::Next => self.next[idx] = value,
        }
        Ok(())
    }

    /// Exchange the roles of `current` and `next`. No cell data is copied.
    #[inline]
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Read-only view of the current generation.
    #[inline]
    pub fn current(&self) -> &[u32] {
        &self.current
    }

    /// Read-only view of the buffer being written.
    #[inline]
    pub fn next(&self) -> &[u32] {
        &self.next
    }

    pub(crate) fn current_mut(&mut self) -> &mut [u32] {
        &mut self.current
    }

    /// Split borrow: `current` for reading, `next` for writing.
    #[inline]
    pub fn buffers_mut(&mut self) -> (&[u32], &mut [u32]) {
        (&self.current, &mut self.next)
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.current.iter().filter(|&&v| is_alive(v)).count()
    }

    /// Zero the current generation.
    pub fn clear(&mut self) {
        self.current.fill(0);
    }

    fn buffer(&self, buffer: Buffer) -> &[u32] {
        match buffer {
            Buffer::Current => &self.current,
            Buffer::Next => &self.next,
        }
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, EngineError> {
        if !self.in_bounds(row, col) {
            return Err(EngineError::OutOfRange {
                row,
                col,
                dim: self.dim,
            });
        }
        Ok(self.index_of(row, col))
    }
}

fn allocate(cells: usize) -> Result<Vec<u32>, EngineError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(cells)
        .map_err(|_| EngineError::AllocationFailure {
            cells: cells as u128,
        })?;
    buf.resize(cells, 0);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_grid() {
        let grid = Grid::new(8).unwrap();
        assert_eq!(grid.dim(), 8);
        assert_eq!(grid.current().len(), 64);
        assert_eq!(grid.next().len(), 64);
        assert!(grid.current().iter().all(|&c| c == 0));
        assert!(grid.next().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_zero_dim_rejected() {
        assert!(matches!(
            Grid::new(0),
            Err(EngineError::InvalidDimension { dim: 0 })
        ));
    }

    #[test]
    fn test_overflowing_dim_rejected() {
        assert!(matches!(
            Grid::new(usize::MAX),
            Err(EngineError::AllocationFailure { .. })
        ));
    }

    #[test]
    fn test_index_of() {
        let grid = Grid::new(4).unwrap();

        assert_eq!(grid.index_of(0, 0), 0);
        assert_eq!(grid.index_of(3, 3), 15);
        assert_eq!(grid.index_of(0, 1), 1);
        assert_eq!(grid.index_of(1, 0), 4);
    }

    #[test]
    fn test_in_bounds() {
        let grid = Grid::new(4).unwrap();

        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(3, 3));
        assert!(!grid.in_bounds(4, 0));
        assert!(!grid.in_bounds(0, 4));
    }

    #[test]
    fn test_set_get_both_buffers() {
        let mut grid = Grid::new(8).unwrap();

        grid.set(Buffer::Current, 2, 3, 7).unwrap();
        grid.set(Buffer::Next, 3, 2, 9).unwrap();

        assert_eq!(grid.cell(Buffer::Current, 2, 3).unwrap(), 7);
        assert_eq!(grid.cell(Buffer::Next, 3, 2).unwrap(), 9);
        assert_eq!(grid.cell(Buffer::Current, 3, 2).unwrap(), 0);
        assert_eq!(grid.cell(Buffer::Next, 2, 3).unwrap(), 0);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = Grid::new(4).unwrap();

        assert!(matches!(
            grid.cell(Buffer::Current, 4, 0),
            Err(EngineError::OutOfRange { row: 4, col: 0, dim: 4 })
        ));
        assert!(grid.set(Buffer::Next, 0, 4, 1).is_err());
        assert!(grid.current().iter().all(|&c| c == 0));
        assert!(grid.next().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_swap_exchanges_roles() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(Buffer::Current, 1, 1, 1).unwrap();
        grid.set(Buffer::Next, 2, 2, 2).unwrap();

        let current_ptr = grid.current().as_ptr();
        grid.swap();

        // Same allocation, new role
        assert_eq!(grid.next().as_ptr(), current_ptr);
        assert_eq!(grid.cell(Buffer::Current, 2, 2).unwrap(), 2);
        assert_eq!(grid.cell(Buffer::Next, 1, 1).unwrap(), 1);
    }

    #[test]
    fn test_population_and_clear() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(Buffer::Current, 0, 0, 1).unwrap();
        grid.set(Buffer::Current, 3, 3, 0xFFFF_00FF).unwrap();
        grid.set(Buffer::Next, 1, 1, 1).unwrap();

        assert_eq!(grid.population(), 2);

        grid.clear();
        assert_eq!(grid.population(), 0);
    }
}
