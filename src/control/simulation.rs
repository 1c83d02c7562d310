//! Play/pause/clear controller driven by an external tick.

use serde::{Deserialize, Serialize};

use crate::compute::{CellState, GridError, GridStore, Stepper};
use crate::schema::{ConfigError, Seed, SimulationConfig};

/// Errors raised while building or seeding a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Whether ticks advance the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayState {
    /// Never started, or cleared since.
    #[default]
    Idle,
    Running,
    /// Stopped by the user; resumes where it left off.
    Paused,
}

/// Simulation statistics for monitoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub generation: u64,
    pub live_cells: usize,
    pub rows: usize,
    pub cols: usize,
    pub state: PlayState,
}

/// A grid, its stepper, and the run/pause state around them.
///
/// All mutation goes through `&mut self`, so a toggle or clear can never
/// land in the middle of a step.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    store: GridStore,
    stepper: Stepper,
    state: PlayState,
    generation: u64,
}

impl Simulation {
    /// Create an idle simulation with a blank board.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let store = GridStore::create(config.rows, config.cols)?;
        log::info!("Created {}x{} simulation", config.rows, config.cols);

        Ok(Self {
            config,
            store,
            stepper: Stepper::new(),
            state: PlayState::Idle,
            generation: 0,
        })
    }

    /// Create an idle simulation and apply an initial pattern.
    pub fn with_seed(config: SimulationConfig, seed: &Seed) -> Result<Self, SimulationError> {
        let mut sim = Self::new(config)?;
        seed.apply(&mut sim.store)?;
        log::debug!("Seeded {} live cells", sim.store.live_count());
        Ok(sim)
    }

    /// Flip a cell of the current generation.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<CellState, GridError> {
        let state = self.store.toggle(row, col)?;
        log::trace!("Toggled ({row}, {col}) -> {state:?}");
        Ok(state)
    }

    /// Start, pause, or continue. Returns the new state.
    pub fn start_pause(&mut self) -> PlayState {
        self.state = match self.state {
            PlayState::Idle | PlayState::Paused => PlayState::Running,
            PlayState::Running => PlayState::Paused,
        };
        log::debug!("Play state -> {:?}", self.state);
        self.state
    }

    /// Stop and kill every cell.
    pub fn clear(&mut self) {
        self.state = PlayState::Idle;
        self.store.reset_all();
        self.generation = 0;
        log::info!("Cleared simulation");
    }

    /// Advance one generation if running. Returns whether a step ran.
    pub fn tick(&mut self) -> bool {
        if self.state != PlayState::Running {
            return false;
        }
        self.stepper.step(&mut self.store);
        self.generation += 1;
        log::debug!(
            "Generation {}: {} live",
            self.generation,
            self.store.live_count()
        );
        true
    }

    #[inline]
    pub fn state(&self) -> PlayState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Grid storage, for rendering.
    #[inline]
    pub fn store(&self) -> &GridStore {
        &self.store
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            generation: self.generation,
            live_cells: self.store.live_count(),
            rows: self.store.rows(),
            cols: self.store.cols(),
            state: self.state,
        }
    }
}
