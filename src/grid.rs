// --- File: grid.rs ---
use crate::error::{LifeError, Result};
use rayon::prelude::*;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

// (row, col) deltas of the Moore neighbourhood, self excluded
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size toroidal board stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead grid. Both dimensions must be non-zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(LifeError::InvalidDimensions { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; len],
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(LifeError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Bounds-checked read. Coordinates are never wrapped here.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.check_bounds(row, col)?;
        Ok(self.cells[self.index(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        self.check_bounds(row, col)?;
        let index = self.index(row, col);
        self.cells[index] = cell;
        Ok(())
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Overwrites every cell with the value produced by `f`, visiting cells row by row.
    pub fn fill_with<F: FnMut() -> Cell>(&mut self, mut f: F) {
        for cell in &mut self.cells {
            *cell = f();
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates `(row, col)` of every live cell, in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(index, _)| (index / cols, index % cols))
    }

    /// Live cells among the 8 Moore neighbours of `(row, col)`, wrapping at every edge.
    /// The coordinates themselves must be in range; only the neighbours wrap.
    ///
    /// On boards narrower than three cells a wrapped neighbour may be the same cell
    /// (or the cell itself); each of the eight positions is still counted once.
    pub fn neighbor_count(&self, row: usize, col: usize) -> Result<u8> {
        self.check_bounds(row, col)?;
        Ok(self.count_neighbors(row, col))
    }

    /// State of `(row, col)` in the generation after this one (B3/S23).
    pub fn next_state(&self, row: usize, col: usize) -> Result<Cell> {
        self.check_bounds(row, col)?;
        Ok(self.successor(row, col))
    }

    // Callers guarantee row < rows and col < cols
    fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut total = 0;
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let r = wrap(row, dr, self.rows);
            let c = wrap(col, dc, self.cols);
            if self.cells[self.index(r, c)].is_alive() {
                total += 1;
            }
        }
        total
    }

    fn successor(&self, row: usize, col: usize) -> Cell {
        let current = self.cells[self.index(row, col)];
        match (current, self.count_neighbors(row, col)) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
            (Cell::Dead, 3) => Cell::Alive,                     // Birth
            _ => Cell::Dead,
        }
    }

    /// Writes the successor of `previous` into `self`. Rows are computed in parallel;
    /// every row reads only `previous`, so no cell sees an already updated neighbour.
    pub(crate) fn write_next_generation(&mut self, previous: &Grid) {
        debug_assert_eq!((self.rows, self.cols), (previous.rows, previous.cols));
        let cols = self.cols;
        self.cells
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, cell) in out.iter_mut().enumerate() {
                    *cell = previous.successor(row, col);
                }
            });
    }
}

#[inline]
fn wrap(value: usize, delta: isize, len: usize) -> usize {
    match delta {
        -1 => (value + len - 1) % len,
        1 => (value + 1) % len,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        for &(r, c) in alive {
            grid.set(r, c, Cell::Alive).unwrap();
        }
        grid
    }

    /// 3x3 snapshot embedded in a 5x5 board so that wrapping cannot add neighbours.
    fn center_with_neighbors(center: Cell, neighbors: usize) -> Grid {
        let ring = [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)];
        let mut grid = grid_with(5, 5, &ring[..neighbors]);
        grid.set(2, 2, center).unwrap();
        grid
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 4),
            Err(LifeError::InvalidDimensions { rows: 0, cols: 4 })
        );
        assert!(Grid::new(4, 0).is_err());
    }

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(3, 7).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 7);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn get_and_set_reject_out_of_range() {
        let mut grid = Grid::new(2, 3).unwrap();
        assert_eq!(
            grid.get(2, 0),
            Err(LifeError::IndexOutOfBounds { row: 2, col: 0, rows: 2, cols: 3 })
        );
        assert!(grid.set(0, 3, Cell::Alive).is_err());
        grid.set(1, 2, Cell::Alive).unwrap();
        assert_eq!(grid.get(1, 2), Ok(Cell::Alive));
    }

    #[test]
    fn fill_sets_every_cell() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.fill(Cell::Alive);
        assert_eq!(grid.live_count(), 16);
        grid.fill(Cell::Dead);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn live_cells_reports_coordinates() {
        let grid = grid_with(4, 5, &[(0, 4), (3, 1), (2, 2)]);
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(0, 4), (2, 2), (3, 1)]);
    }

    #[test]
    fn corner_sees_opposite_corner_as_diagonal_neighbor() {
        let grid = grid_with(6, 8, &[(5, 7)]);
        assert_eq!(grid.neighbor_count(0, 0), Ok(1));
        // and the relation is symmetric
        let grid = grid_with(6, 8, &[(0, 0)]);
        assert_eq!(grid.neighbor_count(5, 7), Ok(1));
    }

    #[test]
    fn wraps_along_single_edges() {
        let grid = grid_with(5, 5, &[(0, 4), (4, 0), (1, 4)]);
        // (0,0) neighbours: (4,4),(4,0),(4,1),(0,4),(0,1),(1,4),(1,0),(1,1)
        assert_eq!(grid.neighbor_count(0, 0), Ok(3));
    }

    #[test]
    fn neighbor_count_excludes_self() {
        let grid = grid_with(5, 5, &[(2, 2)]);
        assert_eq!(grid.neighbor_count(2, 2), Ok(0));
        let mut full = Grid::new(5, 5).unwrap();
        full.fill(Cell::Alive);
        assert_eq!(full.neighbor_count(2, 2), Ok(8));
    }

    #[test]
    fn neighbor_count_rejects_out_of_range_instead_of_wrapping() {
        // col 10 on a 10-column board must not read row 1, col 0
        let grid = grid_with(4, 10, &[(1, 0), (0, 1), (1, 1)]);
        assert_eq!(
            grid.neighbor_count(0, 10),
            Err(LifeError::IndexOutOfBounds { row: 0, col: 10, rows: 4, cols: 10 })
        );
        assert!(grid.neighbor_count(0, 12).is_err());
        assert!(grid.neighbor_count(4, 0).is_err());
    }

    #[test]
    fn next_state_rejects_out_of_range() {
        let grid = grid_with(10, 10, &[(4, 3), (4, 4), (4, 5)]);
        assert_eq!(
            grid.next_state(10, 0),
            Err(LifeError::IndexOutOfBounds { row: 10, col: 0, rows: 10, cols: 10 })
        );
        assert!(grid.next_state(3, 10).is_err());
        assert_eq!(grid.next_state(3, 4), Ok(Cell::Alive));
    }

    #[test]
    fn narrow_boards_count_wrapped_positions_independently() {
        // A lone live cell on a 1x1 board is all eight of its own neighbours
        let single = grid_with(1, 1, &[(0, 0)]);
        assert_eq!(single.neighbor_count(0, 0), Ok(8));
        assert_eq!(single.next_state(0, 0), Ok(Cell::Dead));

        // On two rows, up and down are the same row and both count
        let two_rows = grid_with(2, 5, &[(1, 2)]);
        assert_eq!(two_rows.neighbor_count(0, 2), Ok(2));
        assert_eq!(two_rows.neighbor_count(0, 1), Ok(2));

        // A 1x3 row: left/right neighbours each appear three times (up, level, down)
        let strip = grid_with(1, 3, &[(0, 0), (0, 2)]);
        assert_eq!(strip.neighbor_count(0, 1), Ok(6));
        // and the cell itself is seen twice, through up and down
        assert_eq!(strip.neighbor_count(0, 0), Ok(5));
    }

    #[test]
    fn live_cell_survives_only_with_two_or_three() {
        for n in 0..=8 {
            let expected = if n == 2 || n == 3 { Cell::Alive } else { Cell::Dead };
            let grid = center_with_neighbors(Cell::Alive, n);
            assert_eq!(grid.neighbor_count(2, 2), Ok(n as u8));
            assert_eq!(grid.next_state(2, 2), Ok(expected), "{n} neighbours");
        }
    }

    #[test]
    fn dead_cell_is_born_only_with_three() {
        for n in 0..=8 {
            let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
            let grid = center_with_neighbors(Cell::Dead, n);
            assert_eq!(grid.next_state(2, 2), Ok(expected), "{n} neighbours");
        }
    }

    #[test]
    fn next_generation_reads_only_the_snapshot() {
        let previous = grid_with(10, 10, &[(4, 3), (4, 4), (4, 5)]);
        let mut next = Grid::new(10, 10).unwrap();
        next.fill(Cell::Alive); // stale scratch content must be overwritten
        next.write_next_generation(&previous);
        let live: Vec<_> = next.live_cells().collect();
        assert_eq!(live, vec![(3, 4), (4, 4), (5, 4)]);
    }
}
// --- End of File: grid.rs ---
