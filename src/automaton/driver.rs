//! Generation driver: bounded runs with optional early exit on stabilization.
//!
//! One generation is `step_generation` (barrier) followed by a buffer swap and
//! a counter increment. A failed generation is never swapped in: `next` may
//! hold a partial result, and the next successful generation overwrites it.

use crate::automaton::grid::{Buffer, Grid};
use crate::automaton::patterns::SeedPattern;
use crate::automaton::tiling::{GenerationBackend, SequentialScheduler, TileLayout, TiledScheduler};
use crate::config::{BackendKind, EngineConfig};
use crate::error::EngineError;

/// Lifecycle of the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Seeded, no run started yet.
    Idle,
    /// Inside `run`.
    Running,
    /// Last run hit a generation with no change.
    Stabilized,
    /// Last run used its whole generation budget.
    Exhausted,
    /// Last run aborted on a backend error.
    Failed,
}

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Stabilized,
    Exhausted,
}

/// Result of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Generations executed by this run, the stabilizing one included.
    pub generations: u64,
    pub outcome: RunOutcome,
}

/// Owns the grid, the backend, and the generation counter.
pub struct Engine {
    grid: Grid,
    backend: Box<dyn GenerationBackend>,
    generation: u64,
    state: RunState,
    stop_when_stable: bool,
}

impl Engine {
    /// Allocate the grid and build the configured backend.
    ///
    /// Fails before any generation runs on a bad dimension, a failed
    /// allocation, a zero tile count, or a pool that cannot be built.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let grid = Grid::new(config.dim)?;
        let backend: Box<dyn GenerationBackend> = match config.backend {
            BackendKind::Sequential => Box::new(SequentialScheduler),
            BackendKind::Tiled => {
                let layout = TileLayout::new(config.dim, config.tile_count, config.partition)?;
                let scheduler = TiledScheduler::new(layout, config.threads)?;
                tracing::info!(
                    dim = config.dim,
                    tiles = scheduler.layout().len(),
                    partition = ?config.partition,
                    threads = scheduler.threads(),
                    "built tiled scheduler"
                );
                Box::new(scheduler)
            }
        };

        let mut engine = Engine::with_backend(grid, backend)?;
        engine.stop_when_stable = config.stop_when_stable;
        Ok(engine)
    }

    /// Wrap an existing grid with any backend.
    ///
    /// Fails if the backend cannot step a grid of this size.
    pub fn with_backend(
        grid: Grid,
        backend: Box<dyn GenerationBackend>,
    ) -> Result<Self, EngineError> {
        backend.check(grid.dim())?;
        tracing::info!(dim = grid.dim(), backend = backend.name(), "engine ready");
        Ok(Engine {
            grid,
            backend,
            generation: 0,
            state: RunState::Idle,
            stop_when_stable: true,
        })
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.grid.dim()
    }

    /// Completed generations since construction.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn stop_when_stable(&self) -> bool {
        self.stop_when_stable
    }

    /// Choose whether `run` halts on the first unchanged generation.
    pub fn set_stop_when_stable(&mut self, stop: bool) {
        self.stop_when_stable = stop;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for seeding between generations.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Read-only view of the current generation.
    pub fn current(&self) -> &[u32] {
        self.grid.current()
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<u32, EngineError> {
        self.grid.cell(Buffer::Current, row, col)
    }

    /// Write a cell of the current generation.
    pub fn set_cell(&mut self, row: usize, col: usize, value: u32) -> Result<(), EngineError> {
        self.grid.set(Buffer::Current, row, col, value)
    }

    /// Write a seed pattern into the current generation.
    pub fn seed(&mut self, pattern: SeedPattern) {
        pattern.seed(&mut self.grid);
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Advance exactly one generation. Returns whether any cell changed.
    ///
    /// On error nothing is swapped and the engine enters [`RunState::Failed`].
    pub fn step(&mut self) -> Result<bool, EngineError> {
        let changed = match self.backend.step_generation(&mut self.grid) {
            Ok(changed) => changed,
            Err(err) => {
                self.state = RunState::Failed;
                return Err(err);
            }
        };
        self.grid.swap();
        self.generation += 1;
        tracing::debug!(generation = self.generation, changed, "generation complete");
        Ok(changed)
    }

    /// Run up to `max_generations` generations.
    ///
    /// With `stop_when_stable`, the first generation that changes nothing is
    /// completed and counted, then the run stops as `Stabilized`. Otherwise
    /// the full budget is always used. A backend error aborts the run with
    /// [`EngineError::RunAborted`] carrying the generations completed so far.
    pub fn run(&mut self, max_generations: u64) -> Result<RunSummary, EngineError> {
        self.state = RunState::Running;

        let mut executed = 0;
        let mut outcome = RunOutcome::Exhausted;

        while executed < max_generations {
            let changed = match self.step() {
                Ok(changed) => changed,
                Err(err) => {
                    self.state = RunState::Failed;
                    tracing::warn!(
                        completed = executed,
                        generation = self.generation,
                        %err,
                        "run aborted"
                    );
                    return Err(EngineError::RunAborted {
                        completed: executed,
                        source: Box::new(err),
                    });
                }
            };
            executed += 1;

            if !changed && self.stop_when_stable {
                outcome = RunOutcome::Stabilized;
                break;
            }
        }

        self.state = match outcome {
            RunOutcome::Stabilized => RunState::Stabilized,
            RunOutcome::Exhausted => RunState::Exhausted,
        };
        tracing::info!(generations = executed, outcome = ?outcome, "run finished");

        Ok(RunSummary {
            generations: executed,
            outcome,
        })
    }
}
