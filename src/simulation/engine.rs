//! Driver core: control commands, the gravity knob, and the tick gate.
//!
//! The `Engine` owns the registry, the shared context, and the force law.
//! The visualization layer translates raw key events into [`Command`]s and
//! held-key state, then calls [`Engine::tick`] once per fixed-rate tick.

use log::debug;

use crate::simulation::forces::PlanetaryGravity;
use crate::simulation::integrator::euler_step;
use crate::simulation::params::SimContext;
use crate::simulation::states::Registry;

/// Discrete, edge-triggered control events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggle the time freeze.
    PauseToggle,
    /// Advance exactly one tick, even while paused.
    SingleStep,
}

/// The simulation driver state.
pub struct Engine {
    pub registry: Registry,
    pub ctx: SimContext,
    pub gravity: PlanetaryGravity,
    step_once: bool,
}

impl Engine {
    pub fn new(registry: Registry, ctx: SimContext, gravity: PlanetaryGravity) -> Self {
        Self {
            registry,
            ctx,
            gravity,
            step_once: false,
        }
    }

    /// Apply an edge-triggered control event.
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::PauseToggle => {
                self.ctx.paused = !self.ctx.paused;
                debug!("pause toggled: paused = {}", self.ctx.paused);
            }
            Command::SingleStep => {
                self.step_once = true;
            }
        }
    }

    /// Held-key multiplier adjustment, applied once per tick while held.
    /// Unclamped: the knob may go negative, which turns gravity repulsive.
    pub fn nudge_multiplier(&mut self, delta: f64) {
        self.ctx.gravity_multiplier += delta;
    }

    /// Run one tick. Steps the physics when running, or when a single step
    /// was explicitly requested while paused. Returns whether it stepped.
    pub fn tick(&mut self) -> bool {
        let run = !self.ctx.paused || self.step_once;
        self.step_once = false;
        if run {
            euler_step(&mut self.registry, &self.gravity, &self.ctx);
        }
        run
    }
}
