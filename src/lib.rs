//! Conway's Game of Life on a bounded grid.
//!
//! Each generation is computed from a settled snapshot of the previous one:
//! the stepper reads only the `current` buffer, writes only the `next`
//! buffer, then promotes `next`. Cells on the edge have fewer neighbors;
//! nothing wraps around.
//!
//! # Architecture
//!
//! - `compute`: Grid storage and the generation stepper
//! - `schema`: Configuration and seeding types
//! - `control`: Run/pause/clear state driven by an external tick
//!
//! # Example
//!
//! ```rust
//! use conway_life::{
//!     compute::{GridStore, Stepper},
//!     schema::{Pattern, Seed},
//! };
//!
//! let mut store = GridStore::create(5, 5).unwrap();
//! Seed::new(Pattern::Blinker { row: 2, col: 1 })
//!     .apply(&mut store)
//!     .unwrap();
//!
//! Stepper::new().step(&mut store);
//!
//! let live: Vec<_> = store.current().live_cells().collect();
//! assert_eq!(live, vec![(1, 2), (2, 2), (3, 2)]);
//! ```

pub mod compute;
pub mod control;
pub mod schema;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use compute::{CellState, GridError, GridId, GridStore, Stepper};
pub use control::{PlayState, Simulation, SimulationError, SimulationStats};
pub use schema::{Pattern, Seed, SimulationConfig};
