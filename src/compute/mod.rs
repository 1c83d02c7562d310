//! Compute module - Grid storage and generation stepping.

mod grid;
mod stepper;

pub use grid::*;
pub use stepper::*;
