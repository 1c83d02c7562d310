//! Stepper - Advances a grid by one Game of Life generation.
//!
//! Every cell reads from the settled `current` buffer and writes only to
//! `next`; the store then promotes `next`. Edges do not wrap.

use super::{CellState, Grid, GridStore};

/// Offsets of the eight surrounding cells.
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

/// Count live cells adjacent to (row, col), ignoring positions off the grid.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if r < grid.rows() && c < grid.cols() && grid.cell(r, c).is_alive() {
            count += 1;
        }
    }
    count
}

/// Transition rule: survival on 2 or 3, birth on exactly 3.
#[inline]
pub fn next_state(cell: CellState, neighbors: u8) -> CellState {
    match (cell, neighbors) {
        (CellState::Alive, 2 | 3) => CellState::Alive, // Stasis
        (CellState::Alive, _) => CellState::Dead,      // Under-population / overcrowding
        (CellState::Dead, 3) => CellState::Alive,      // Reproduction
        (CellState::Dead, _) => CellState::Dead,
    }
}

/// Stateless generation driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stepper;

impl Stepper {
    pub fn new() -> Self {
        Self
    }

    /// Perform one generation step.
    pub fn step(&self, store: &mut GridStore) {
        {
            let (current, next) = store.buffers_mut();
            for row in 0..current.rows() {
                for col in 0..current.cols() {
                    let neighbors = live_neighbors(current, row, col);
                    next.put(row, col, next_state(current.cell(row, col), neighbors));
                }
            }
        }
        store.commit_and_reset();
    }

    /// Run the given number of generations.
    pub fn run(&self, store: &mut GridStore, generations: u64) {
        for _ in 0..generations {
            self.step(store);
        }
    }
}
