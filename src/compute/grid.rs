//! Grid storage for Game of Life simulations.
//!
//! A [`GridStore`] holds two equally-shaped grids: `current`, the
//! authoritative generation, and `next`, the scratch buffer the stepper
//! writes into. Cells are stored row-major in flat arrays.

use std::fmt;

use serde::{Deserialize, Serialize};

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl CellState {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// The opposite state.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// Selects one of the two buffers held by a [`GridStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridId {
    /// The authoritative generation.
    Current,
    /// The generation being computed.
    Next,
}

/// Grid construction and access errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid dimensions must be positive with a representable cell count, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Fixed-size two-dimensional array of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cells: [row * cols + col].
    cells: Vec<CellState>,
}

impl Grid {
    fn dead(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CellState::Dead; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Convert (row, col) to flat index.
    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_idx(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.idx(row, col))
    }

    /// Get the state at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<CellState, GridError> {
        let idx = self.checked_idx(row, col)?;
        Ok(self.cells[idx])
    }

    /// Set the state at (row, col).
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), GridError> {
        let idx = self.checked_idx(row, col)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Unchecked read for callers iterating within bounds.
    ///
    /// Panics if the flat index falls outside the grid.
    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> CellState {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[self.idx(row, col)]
    }

    #[inline]
    pub(crate) fn put(&mut self, row: usize, col: usize, state: CellState) {
        debug_assert!(row < self.rows && col < self.cols);
        let idx = self.idx(row, col);
        self.cells[idx] = state;
    }

    fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// True when no cell is alive.
    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|c| c.is_alive())
    }
}

impl fmt::Display for Grid {
    /// One text line per row: `#` for live cells, `.` for dead ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                let glyph = if cell.is_alive() { '#' } else { '.' };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Owner of the current and next generation buffers.
#[derive(Debug, Clone)]
pub struct GridStore {
    current: Grid,
    next: Grid,
}

impl GridStore {
    /// Allocate two `rows x cols` grids with every cell dead.
    ///
    /// Rejects zero dimensions and dimensions whose cell count overflows `usize`.
    pub fn create(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(GridError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            current: Grid::dead(rows, cols),
            next: Grid::dead(rows, cols),
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.current.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.current.cols
    }

    /// Borrow one of the two buffers.
    pub fn grid(&self, grid_id: GridId) -> &Grid {
        match grid_id {
            GridId::Current => &self.current,
            GridId::Next => &self.next,
        }
    }

    fn grid_mut(&mut self, grid_id: GridId) -> &mut Grid {
        match grid_id {
            GridId::Current => &mut self.current,
            GridId::Next => &mut self.next,
        }
    }

    /// The authoritative generation.
    #[inline]
    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn get(&self, grid_id: GridId, row: usize, col: usize) -> Result<CellState, GridError> {
        self.grid(grid_id).get(row, col)
    }

    pub fn set(
        &mut self,
        grid_id: GridId,
        row: usize,
        col: usize,
        state: CellState,
    ) -> Result<(), GridError> {
        self.grid_mut(grid_id).set(row, col, state)
    }

    /// Flip a cell of the current generation and return its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<CellState, GridError> {
        let state = self.current.get(row, col)?.toggled();
        self.current.set(row, col, state)?;
        Ok(state)
    }

    /// Kill every cell in both buffers.
    pub fn reset_all(&mut self) {
        self.current.clear();
        self.next.clear();
    }

    /// Promote `next` to `current`, then clear `next`.
    pub fn commit_and_reset(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.clear();
    }

    /// Number of live cells in the current generation.
    pub fn live_count(&self) -> usize {
        self.current.live_count()
    }

    /// Read current, write next. Used by the stepper for the duration of a step.
    pub(crate) fn buffers_mut(&mut self) -> (&Grid, &mut Grid) {
        (&self.current, &mut self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_all_dead() {
        let store = GridStore::create(3, 4).unwrap();
        assert_eq!(store.rows(), 3);
        assert_eq!(store.cols(), 4);
        for id in [GridId::Current, GridId::Next] {
            for r in 0..3 {
                for c in 0..4 {
                    assert_eq!(store.get(id, r, c).unwrap(), CellState::Dead);
                }
            }
        }
    }

    #[test]
    fn test_create_rejects_zero_dimensions() {
        assert_eq!(
            GridStore::create(0, 5).unwrap_err(),
            GridError::InvalidDimension { rows: 0, cols: 5 }
        );
        assert!(GridStore::create(5, 0).is_err());
    }

    #[test]
    fn test_create_rejects_overflowing_dimensions() {
        assert_eq!(
            GridStore::create(usize::MAX, 2).unwrap_err(),
            GridError::InvalidDimension {
                rows: usize::MAX,
                cols: 2
            }
        );
    }

    #[test]
    fn test_one_past_the_end_is_out_of_bounds() {
        let mut store = GridStore::create(4, 6).unwrap();
        let err = store.get(GridId::Current, 4, 0).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                row: 4,
                col: 0,
                rows: 4,
                cols: 6
            }
        );
        assert!(store.get(GridId::Next, 0, 6).is_err());
        assert!(store.set(GridId::Current, 0, 6, CellState::Alive).is_err());
        assert!(store.set(GridId::Next, 4, 0, CellState::Alive).is_err());
        assert!(store.toggle(4, 6).is_err());
    }

    #[test]
    fn test_set_and_get_are_per_buffer() {
        let mut store = GridStore::create(2, 2).unwrap();
        store.set(GridId::Next, 1, 0, CellState::Alive).unwrap();
        assert_eq!(store.get(GridId::Next, 1, 0).unwrap(), CellState::Alive);
        assert_eq!(store.get(GridId::Current, 1, 0).unwrap(), CellState::Dead);
    }

    #[test]
    fn test_reset_all_clears_both_buffers() {
        let mut store = GridStore::create(3, 3).unwrap();
        store.set(GridId::Current, 0, 0, CellState::Alive).unwrap();
        store.set(GridId::Next, 2, 2, CellState::Alive).unwrap();

        store.reset_all();

        for id in [GridId::Current, GridId::Next] {
            assert!(store.grid(id).is_extinct());
        }
    }

    #[test]
    fn test_commit_and_reset() {
        let mut store = GridStore::create(3, 3).unwrap();
        store.set(GridId::Current, 0, 0, CellState::Alive).unwrap();
        store.set(GridId::Next, 1, 2, CellState::Alive).unwrap();

        store.commit_and_reset();

        let live: Vec<_> = store.current().live_cells().collect();
        assert_eq!(live, vec![(1, 2)]);
        assert!(store.grid(GridId::Next).is_extinct());
    }

    #[test]
    fn test_toggle_flips_current() {
        let mut store = GridStore::create(2, 2).unwrap();
        assert_eq!(store.toggle(1, 1).unwrap(), CellState::Alive);
        assert_eq!(store.live_count(), 1);
        assert_eq!(store.toggle(1, 1).unwrap(), CellState::Dead);
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn test_display() {
        let mut store = GridStore::create(2, 3).unwrap();
        store.set(GridId::Current, 0, 1, CellState::Alive).unwrap();
        store.set(GridId::Current, 1, 2, CellState::Alive).unwrap();
        assert_eq!(store.current().to_string(), ".#.\n..#\n");
    }
}
