// --- File: simulation.rs ---
use crate::constants::{BUFFER_COUNT, DEFAULT_ALIVE_PROBABILITY};
use crate::error::{LifeError, Result};
use crate::grid::{Cell, Grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type SimRng = StdRng;

/// Two equally sized generation buffers and the index of the one currently visible.
///
/// `advance` always reads the active buffer and writes the inactive one before
/// flipping the index, so readers never observe a half-computed generation.
pub struct GridSimulation<R = SimRng> {
    buffers: [Grid; BUFFER_COUNT],
    active: usize,
    rng: R,
    alive_probability: f64,
    generation: u64,
}

impl GridSimulation<SimRng> {
    /// Two all-dead buffers with an entropy-seeded random source.
    pub fn new(num_rows: usize, num_cols: usize) -> Result<Self> {
        Self::with_rng(num_rows, num_cols, SimRng::from_entropy())
    }
}

impl<R: Rng> GridSimulation<R> {
    pub fn with_rng(num_rows: usize, num_cols: usize, rng: R) -> Result<Self> {
        let grid = Grid::new(num_rows, num_cols)?;
        Ok(Self {
            buffers: [grid.clone(), grid],
            active: 0,
            rng,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            generation: 0,
        })
    }

    /// Probability used by `reset` when reseeding buffer 0.
    pub fn with_alive_probability(mut self, alive_probability: f64) -> Result<Self> {
        self.alive_probability = validate_probability(alive_probability)?;
        Ok(self)
    }

    pub fn alive_probability(&self) -> f64 {
        self.alive_probability
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.buffers[0].rows()
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.buffers[0].cols()
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn inactive_index(&self) -> usize {
        (self.active + 1) % BUFFER_COUNT
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self, grid_index: usize) -> Result<&Grid> {
        self.buffers
            .get(grid_index)
            .ok_or(LifeError::InvalidBufferIndex(grid_index))
    }

    fn grid_mut(&mut self, grid_index: usize) -> Result<&mut Grid> {
        self.buffers
            .get_mut(grid_index)
            .ok_or(LifeError::InvalidBufferIndex(grid_index))
    }

    #[inline]
    pub fn active_grid(&self) -> &Grid {
        &self.buffers[self.active]
    }

    /// Sets each cell of the named buffer alive with probability `alive_probability`.
    pub fn randomize(&mut self, grid_index: usize, alive_probability: f64) -> Result<()> {
        let p = validate_probability(alive_probability)?;
        if grid_index >= BUFFER_COUNT {
            return Err(LifeError::InvalidBufferIndex(grid_index));
        }
        self.seed_buffer(grid_index, p);
        Ok(())
    }

    pub fn fill(&mut self, grid_index: usize, value: Cell) -> Result<()> {
        self.grid_mut(grid_index)?.fill(value);
        Ok(())
    }

    /// Makes buffer 0 active and reseeds it. Buffer 1 is left untouched.
    pub fn reset(&mut self) {
        self.active = 0;
        self.generation = 0;
        self.seed_buffer(0, self.alive_probability);
        log::debug!(
            "Reset {}x{} grid, {} cells alive",
            self.num_rows(),
            self.num_cols(),
            self.buffers[0].live_count()
        );
    }

    /// State of `(row, col)` in the active buffer. Coordinates are not wrapped.
    pub fn cell_state(&self, row: usize, col: usize) -> Result<Cell> {
        self.active_grid().get(row, col)
    }

    /// Writes a cell of the active buffer.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let active = self.active;
        self.buffers[active].set(row, col, cell)
    }

    /// Live neighbours of `(row, col)` in the named buffer, wrapping toroidally.
    pub fn neighbor_count(&self, row: usize, col: usize, grid_index: usize) -> Result<u8> {
        self.grid(grid_index)?.neighbor_count(row, col)
    }

    /// Successor state of `(row, col)` computed from the named buffer.
    pub fn next_state(&self, row: usize, col: usize, grid_index: usize) -> Result<Cell> {
        self.grid(grid_index)?.next_state(row, col)
    }

    pub fn population(&self) -> usize {
        self.active_grid().live_count()
    }

    /// Computes one synchronous generation into the inactive buffer, then flips.
    pub fn advance(&mut self) {
        let (snapshot, scratch) = self.split_buffers();
        scratch.write_next_generation(snapshot);
        self.active = self.inactive_index();
        self.generation += 1;
        log::trace!(
            "Generation {}: {} cells alive",
            self.generation,
            self.population()
        );
    }

    // `grid_index` and `p` are already validated
    fn seed_buffer(&mut self, grid_index: usize, p: f64) {
        let rng = &mut self.rng;
        self.buffers[grid_index].fill_with(|| Cell::from(rng.gen_bool(p)));
    }

    // (active, inactive)
    fn split_buffers(&mut self) -> (&Grid, &mut Grid) {
        let [first, second] = &mut self.buffers;
        if self.active == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        }
    }
}

fn validate_probability(p: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(LifeError::InvalidProbability(p))
    }
}

// --- End of File: simulation.rs ---
