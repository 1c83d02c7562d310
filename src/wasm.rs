//! WebAssembly bindings for the Game of Life.
//!
//! The page owns the timer and the DOM: it calls `tick` on each timeout,
//! `toggle` on cell clicks, and redraws from `cells`.

use wasm_bindgen::prelude::*;

use crate::{
    compute::CellState,
    control::{PlayState, Simulation},
    schema::{Seed, SimulationConfig},
};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WebAssembly wrapper around [`Simulation`].
#[wasm_bindgen]
pub struct WasmSimulation {
    inner: Simulation,
}

#[wasm_bindgen]
impl WasmSimulation {
    /// Create a simulation from JSON configuration and seed.
    ///
    /// An empty `seed_json` starts with a blank board.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, seed_json: &str) -> Result<WasmSimulation, JsValue> {
        let config = SimulationConfig::from_json_str(config_json).map_err(js_error)?;

        let seed: Seed = if seed_json.trim().is_empty() {
            Seed::default()
        } else {
            serde_json::from_str(seed_json)
                .map_err(|e| JsValue::from_str(&format!("Invalid seed JSON: {e}")))?
        };

        let inner = Simulation::with_seed(config, &seed).map_err(js_error)?;
        Ok(WasmSimulation { inner })
    }

    /// Flip a cell. Returns true if it is now alive.
    ///
    /// Negative coordinates from JS wrap to huge values and are rejected as
    /// out of bounds.
    #[wasm_bindgen]
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, JsValue> {
        self.inner
            .toggle(row, col)
            .map(CellState::is_alive)
            .map_err(js_error)
    }

    /// Start, pause or continue. Returns the label for the next action.
    #[wasm_bindgen(js_name = startPause)]
    pub fn start_pause(&mut self) -> String {
        match self.inner.start_pause() {
            PlayState::Running => "pause",
            PlayState::Paused => "continue",
            PlayState::Idle => "start",
        }
        .to_string()
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Advance one generation if running.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        self.inner.tick()
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    /// Current generation, row-major, 1 = alive.
    #[wasm_bindgen]
    pub fn cells(&self) -> Vec<u8> {
        self.inner
            .store()
            .current()
            .cells()
            .iter()
            .map(|&c| c as u8)
            .collect()
    }

    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.stats())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    #[wasm_bindgen]
    pub fn rows(&self) -> usize {
        self.inner.store().rows()
    }

    #[wasm_bindgen]
    pub fn cols(&self) -> usize {
        self.inner.store().cols()
    }
}
