//! Control module - Interactive run/pause/clear state around the grid.

mod simulation;

pub use simulation::*;
