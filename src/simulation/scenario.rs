//! Build fully-initialized runtime scenarios from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the tick and visualization systems:
//! - the driver [`Engine`] (registry, context, gravity law)
//! - window/tick settings
//! - the retained config, so a restart can rebuild the initial bodies
//!
//! The scenario is inserted into Bevy as a `Resource` and read by the
//! input, physics, and drawing systems.

use bevy::prelude::Resource;
use log::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::PlanetaryGravity;
use crate::simulation::params::SimContext;
use crate::simulation::states::{Body, BodyError, NVec2, Registry};

/// Bevy resource holding the running simulation.
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    config: ScenarioConfig, // retained so reset() can rebuild the start state
}

impl Scenario {
    /// Validate the config and build the runtime bundle.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, BodyError> {
        let registry = spawn_bodies(&cfg.bodies)?;
        info!(
            "scenario built: {} bodies, multiplier {}",
            registry.len(),
            cfg.parameters.gravity_multiplier
        );

        let ctx = SimContext::new(cfg.parameters.gravity_multiplier);
        let gravity = PlanetaryGravity {
            min_distance: cfg.parameters.min_distance,
        };

        Ok(Self {
            engine: Engine::new(registry, ctx, gravity),
            config: cfg,
        })
    }

    /// Restart: clear the registry, rebuild the initial bodies, and restore
    /// the context defaults. Bodies from the prior run never leak into the
    /// new one.
    pub fn reset(&mut self) -> Result<(), BodyError> {
        self.engine.registry.clear();
        let registry = spawn_bodies(&self.config.bodies)?;
        self.engine.registry = registry;
        self.engine
            .ctx
            .reset(self.config.parameters.gravity_multiplier);
        info!("simulation restarted");
        Ok(())
    }

    /// Per-tick multiplier delta while an arrow key is held.
    pub fn multiplier_step(&self) -> f64 {
        self.config.parameters.multiplier_step
    }

    /// Window size in pixels.
    pub fn window_size(&self) -> (f32, f32) {
        (self.config.engine.width, self.config.engine.height)
    }

    /// Fixed physics ticks per second.
    pub fn tick_rate(&self) -> f64 {
        self.config.engine.tick_rate
    }
}

/// Map `BodyConfig`s into runtime bodies inside a fresh registry.
///
/// The driver owns the registry and inserts explicitly; bodies never
/// register themselves.
fn spawn_bodies(configs: &[BodyConfig]) -> Result<Registry, BodyError> {
    let mut registry = Registry::new();
    for bc in configs {
        let mut body = Body::new(
            bc.name.clone(),
            NVec2::new(bc.x[0], bc.x[1]),
            bc.radius,
            bc.density,
            bc.color,
            NVec2::new(bc.v[0], bc.v[1]),
        )?;
        if bc.anchor {
            body = body.anchored();
        }
        registry.add(body);
    }
    Ok(registry)
}
