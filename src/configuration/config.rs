//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – window size and tick rate
//! - [`ParametersConfig`] – the gravity knob and numeric floors
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The shipped earth/moon scenario:
//!
//! ```yaml
//! engine:
//!   width: 1000.0           # window width, pixels
//!   height: 660.0           # window height, pixels
//!   tick_rate: 60.0         # fixed physics ticks per second
//!
//! parameters:
//!   gravity_multiplier: 10000.0   # startup/restart value of the knob
//!   multiplier_step: 100.0        # per-tick delta while an arrow key is held
//!   min_distance: 1.0e-6          # pairwise distance floor
//!
//! bodies:
//!   - name: earth
//!     x: [ 500.0, 330.0 ]   # center, screen coordinates (y grows downward)
//!     radius: 66.0
//!     density: 5.51
//!     color: [ 0.0, 0.753, 0.639 ]
//!     anchor: true          # reference frame: moved, never pulled
//!   - name: moon
//!     x: [ 500.0, 480.0 ]
//!     v: [ 10.0, 0.0 ]      # pixels per tick
//!     radius: 17.0
//!     density: 3.34
//!     color: [ 0.663, 0.663, 0.663 ]
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation; the config structs stay a thin serde-facing layer.

use serde::Deserialize;

use crate::simulation::params::{
    DEFAULT_GRAVITY_MULTIPLIER, DEFAULT_MIN_DISTANCE, DEFAULT_MULTIPLIER_STEP,
};

/// Window and tick-rate settings.
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub width: f32,     // window width in pixels
    pub height: f32,    // window height in pixels
    pub tick_rate: f64, // physics ticks per second
}

/// The gravity knob and numeric parameters.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_multiplier")]
    pub gravity_multiplier: f64, // startup/restart knob value
    #[serde(default = "default_multiplier_step")]
    pub multiplier_step: f64, // held-key per-tick delta
    #[serde(default = "default_min_distance")]
    pub min_distance: f64, // distance floor for coincident centers
}

fn default_multiplier() -> f64 {
    DEFAULT_GRAVITY_MULTIPLIER
}

fn default_multiplier_step() -> f64 {
    DEFAULT_MULTIPLIER_STEP
}

fn default_min_distance() -> f64 {
    DEFAULT_MIN_DISTANCE
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub x: [f64; 2], // initial center, screen coordinates
    #[serde(default)]
    pub v: [f64; 2], // initial velocity in pixels per tick, default stationary
    pub radius: f64,
    pub density: f64,
    pub color: [f32; 3], // linear rgb render attribute
    #[serde(default)]
    pub anchor: bool, // anchors are position-integrated but never pulled
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // window and tick-rate settings
    pub parameters: ParametersConfig, // gravity knob and numeric parameters
    pub bodies: Vec<BodyConfig>,      // initial state of the system
}
