//! Seed types for initializing Game of Life simulations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::compute::{CellState, GridError, GridId, GridStore};

/// Initial pattern written into the current generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

/// Predefined patterns for initialization.
///
/// Anchored patterns place their bounding box's top-left corner at
/// (`row`, `col`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Blank board.
    #[default]
    Empty,
    /// Period-2 oscillator, horizontal phase (1x3).
    Blinker { row: usize, col: usize },
    /// 2x2 still life.
    Block { row: usize, col: usize },
    /// South-east travelling glider (3x3).
    Glider { row: usize, col: usize },
    /// Explicit list of live (row, col) cells.
    Cells { cells: Vec<(usize, usize)> },
    /// Each cell alive with probability `density`.
    Random {
        /// Probability in [0, 1].
        density: f64,
        /// RNG seed.
        seed: u64,
    },
}

const BLINKER: &[(usize, usize)] = &[(0, 0), (0, 1), (0, 2)];
const BLOCK: &[(usize, usize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];
const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

impl Seed {
    pub fn new(pattern: Pattern) -> Self {
        Self { pattern }
    }

    /// Mark the pattern's cells alive in the current generation.
    ///
    /// Existing live cells are kept. Cells falling outside the grid are
    /// reported, not clipped.
    pub fn apply(&self, store: &mut GridStore) -> Result<(), GridError> {
        match &self.pattern {
            Pattern::Empty => Ok(()),
            Pattern::Blinker { row, col } => place(store, BLINKER, *row, *col),
            Pattern::Block { row, col } => place(store, BLOCK, *row, *col),
            Pattern::Glider { row, col } => place(store, GLIDER, *row, *col),
            Pattern::Cells { cells } => place(store, cells, 0, 0),
            Pattern::Random { density, seed } => {
                let density = if density.is_nan() {
                    0.0
                } else {
                    density.clamp(0.0, 1.0)
                };
                let mut rng = StdRng::seed_from_u64(*seed);
                let cols = store.cols();
                let cells: Vec<_> = (0..store.rows() * cols)
                    .filter(|_| rng.gen_bool(density))
                    .map(|i| (i / cols, i % cols))
                    .collect();
                place(store, &cells, 0, 0)
            }
        }
    }
}

/// Write `cells` offset by (row, col), or nothing if any lands off the grid.
fn place(
    store: &mut GridStore,
    cells: &[(usize, usize)],
    row: usize,
    col: usize,
) -> Result<(), GridError> {
    let (rows, cols) = (store.rows(), store.cols());
    let targets = cells
        .iter()
        .map(|&(dr, dc)| match (row.checked_add(dr), col.checked_add(dc)) {
            (Some(r), Some(c)) if r < rows && c < cols => Ok((r, c)),
            _ => Err(GridError::OutOfBounds {
                row: row.saturating_add(dr),
                col: col.saturating_add(dc),
                rows,
                cols,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (r, c) in targets {
        store.set(GridId::Current, r, c, CellState::Alive)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::Stepper;

    fn seeded(rows: usize, cols: usize, pattern: Pattern) -> GridStore {
        let mut store = GridStore::create(rows, cols).unwrap();
        Seed::new(pattern).apply(&mut store).unwrap();
        store
    }

    #[test]
    fn test_default_is_empty() {
        let store = seeded(4, 4, Seed::default().pattern);
        assert!(store.current().is_extinct());
    }

    #[test]
    fn test_blinker_anchor() {
        let store = seeded(5, 5, Pattern::Blinker { row: 2, col: 1 });
        let live: Vec<_> = store.current().live_cells().collect();
        assert_eq!(live, vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_glider_cell_count() {
        let store = seeded(6, 6, Pattern::Glider { row: 0, col: 0 });
        assert_eq!(store.live_count(), 5);
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let mut store = seeded(8, 8, Pattern::Glider { row: 0, col: 0 });
        let start: Vec<_> = store.current().live_cells().collect();

        Stepper::new().run(&mut store, 4);

        let shifted: Vec<_> = start.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
        let live: Vec<_> = store.current().live_cells().collect();
        assert_eq!(live, shifted);
    }

    #[test]
    fn test_pattern_off_grid_is_error() {
        let mut store = GridStore::create(4, 4).unwrap();
        let seed = Seed::new(Pattern::Block { row: 3, col: 0 });
        assert!(matches!(
            seed.apply(&mut store),
            Err(GridError::OutOfBounds { row: 4, .. })
        ));
        // Rejected patterns leave the board untouched.
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn test_anchor_overflow_is_error() {
        let mut store = GridStore::create(4, 4).unwrap();
        let seed = Seed::new(Pattern::Blinker {
            row: 0,
            col: usize::MAX,
        });
        assert!(matches!(
            seed.apply(&mut store),
            Err(GridError::OutOfBounds { col: usize::MAX, .. })
        ));
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn test_random_is_reproducible() {
        let pattern = Pattern::Random {
            density: 0.4,
            seed: 7,
        };
        let a = seeded(16, 16, pattern.clone());
        let b = seeded(16, 16, pattern);
        assert_eq!(a.current(), b.current());
        assert!(a.live_count() > 0);
        assert!(a.live_count() < 256);
    }

    #[test]
    fn test_random_density_extremes() {
        let full = seeded(8, 8, Pattern::Random { density: 1.0, seed: 1 });
        assert_eq!(full.live_count(), 64);
        let none = seeded(8, 8, Pattern::Random { density: 0.0, seed: 1 });
        assert_eq!(none.live_count(), 0);
    }

    #[test]
    fn test_seed_json() {
        let seed: Seed =
            serde_json::from_str(r#"{"pattern": {"type": "Cells", "cells": [[0, 1], [2, 2]]}}"#)
                .unwrap();
        let store = seeded(3, 3, seed.pattern);
        let live: Vec<_> = store.current().live_cells().collect();
        assert_eq!(live, vec![(0, 1), (2, 2)]);
    }
}
