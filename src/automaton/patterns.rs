//! Initial configurations written into the current generation.

use std::str::FromStr;

use rand::{RngCore, SeedableRng};

use crate::automaton::grid::Grid;
use crate::automaton::rule::ALIVE;
use crate::error::EngineError;

/// Gosper glider gun, 11x38 including a one-cell margin.
const GLIDER_GUN: &str = "\
......................................
.........................O............
.......................O.O............
.............OO......OO............OO.
............O...O....OO............OO.
.OO........O.....O...OO...............
.OO........O...O.OO....O.O............
...........O.....O.......O............
............O...O.....................
.............OO.......................
......................................";

/// Named starting configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SeedPattern {
    /// 2x2 blocks tiled every 4 cells. Still life from the first generation.
    Stable,
    /// Four glider guns, one in each corner, mirrored to fire inward.
    #[default]
    Guns,
    /// Interior cells set to a random bit (raw 0 or 1).
    Random { seed: u64 },
    /// Seven-cell motif that blooms into a clown face.
    Clown,
    /// Seven-cell methuselah that vanishes after 130 generations.
    Diehard,
}

impl FromStr for SeedPattern {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stable" => Ok(SeedPattern::Stable),
            "guns" => Ok(SeedPattern::Guns),
            "random" => Ok(SeedPattern::Random { seed: 0 }),
            "clown" => Ok(SeedPattern::Clown),
            "diehard" => Ok(SeedPattern::Diehard),
            other => Err(EngineError::UnknownPattern(other.to_string())),
        }
    }
}

impl SeedPattern {
    /// Pattern for an optional name: `None` and unknown names give the default.
    pub fn resolve(name: Option<&str>) -> Self {
        match name.map(str::parse::<SeedPattern>) {
            None => SeedPattern::default(),
            Some(Ok(pattern)) => pattern,
            Some(Err(err)) => {
                tracing::warn!(%err, "falling back to default seed pattern");
                SeedPattern::default()
            }
        }
    }

    /// Write the pattern into the grid's current generation.
    ///
    /// Cells that would fall outside the grid are skipped.
    pub fn seed(&self, grid: &mut Grid) {
        let dim = grid.dim();
        match *self {
            SeedPattern::Stable => {
                for i in (1..dim.saturating_sub(2)).step_by(4) {
                    for j in (1..dim.saturating_sub(2)).step_by(4) {
                        for (dr, dc) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
                            place(grid, (i + dr) as i64, (j + dc) as i64, ALIVE);
                        }
                    }
                }
            }
            SeedPattern::Guns => {
                grid.clear();
                let far = dim as i64 - 1;
                gun(grid, 0, 0, false, false);
                gun(grid, 0, far, false, true);
                gun(grid, far, far, true, true);
                gun(grid, far, 0, true, false);
            }
            SeedPattern::Random { seed } => {
                let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
                for i in 1..dim.saturating_sub(1) {
                    for j in 1..dim.saturating_sub(1) {
                        place(grid, i as i64, j as i64, rng.next_u32() & 1);
                    }
                }
            }
            SeedPattern::Clown => {
                grid.clear();
                let mid = (dim / 2) as i64;
                for (r, c) in [
                    (0, -1),
                    (0, 0),
                    (0, 1),
                    (1, -1),
                    (1, 1),
                    (2, -1),
                    (2, 1),
                ] {
                    place(grid, mid + r, mid + c, ALIVE);
                }
            }
            SeedPattern::Diehard => {
                grid.clear();
                let mid = (dim / 2) as i64;
                for (r, c) in [
                    (0, -3),
                    (0, -2),
                    (1, -2),
                    (-1, 3),
                    (1, 2),
                    (1, 3),
                    (1, 4),
                ] {
                    place(grid, mid + r, mid + c, ALIVE);
                }
            }
        }
    }
}

/// Write one cell of the current generation, clipping at the grid edges.
fn place(grid: &mut Grid, row: i64, col: i64, value: u32) {
    if row < 0 || col < 0 || !grid.in_bounds(row as usize, col as usize) {
        return;
    }
    let idx = grid.index_of(row as usize, col as usize);
    grid.current_mut()[idx] = value;
}

/// Stamp a glider gun with its template origin at `(row, col)`, growing
/// upward/leftward when the corresponding axis is flipped.
fn gun(grid: &mut Grid, row: i64, col: i64, flip_rows: bool, flip_cols: bool) {
    for (i, line) in GLIDER_GUN.lines().enumerate() {
        for (j, ch) in line.chars().enumerate() {
            if ch != 'O' {
                continue;
            }
            let (i, j) = (i as i64, j as i64);
            let r = if flip_rows { row - i } else { row + i };
            let c = if flip_cols { col - j } else { col + j };
            place(grid, r, c, ALIVE);
        }
    }
}
