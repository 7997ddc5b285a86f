//! Core state types for the gravity toy.
//!
//! Defines the simulated `Body` and the `Registry` that owns all live
//! bodies. The registry is the substrate gravity queries run over: a body
//! never holds references to its peers, it asks the registry for a fresh
//! snapshot of everyone else.

use nalgebra::Vector2;
use thiserror::Error;

use crate::simulation::params::{FORCE_EPSILON, RADIUS_SCALE};

pub type NVec2 = Vector2<f64>;

/// Errors raised when constructing simulation state.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("invalid parameters for body {name:?}: radius {radius} and density {density} must both be positive")]
    InvalidBodyParameters {
        name: String,
        radius: f64,
        density: f64,
    },
}

/// Mass of a uniform-density sphere of the given radius.
///
/// The radius is scaled by [`RADIUS_SCALE`] before cubing, turning a
/// screen-sized radius into a planetary-scale volume. This is an intentional
/// unit exaggeration, not a formula to correct.
pub fn sphere_mass(radius: f64, density: f64) -> f64 {
    let volume = (4.0 / 3.0) * std::f64::consts::PI * (radius * RADIUS_SCALE).powi(3);
    volume * density
}

/// A simulated mass point rendered as a filled circle.
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub x: NVec2, // center of mass, screen coordinates (y grows downward)
    pub v: NVec2, // velocity in pixels per tick
    pub radius: f64,
    pub density: f64,
    pub mass: f64, // derived once at construction, immutable thereafter
    pub color: [f32; 3],
    pub anchor: bool, // anchors integrate position but are never pulled
}

impl Body {
    /// Build a body, deriving its mass from radius and density.
    ///
    /// Rejects non-positive radius or density.
    pub fn new(
        name: impl Into<String>,
        center: NVec2,
        radius: f64,
        density: f64,
        color: [f32; 3],
        velocity: NVec2,
    ) -> Result<Self, BodyError> {
        let name = name.into();
        if radius <= 0.0 || density <= 0.0 {
            return Err(BodyError::InvalidBodyParameters {
                name,
                radius,
                density,
            });
        }
        Ok(Self {
            name,
            x: center,
            v: velocity,
            radius,
            density,
            mass: sphere_mass(radius, density),
            color,
            anchor: false,
        })
    }

    /// Mark this body as the simulation's fixed reference frame.
    pub fn anchored(mut self) -> Self {
        self.anchor = true;
        self
    }

    /// Center of mass.
    pub fn center(&self) -> NVec2 {
        self.x
    }

    /// Top-left corner of the bounding box: `center - (radius, radius)`.
    pub fn top_left(&self) -> NVec2 {
        NVec2::new(self.x.x - self.radius, self.x.y - self.radius)
    }

    /// Apply a polar velocity impulse.
    ///
    /// `angle` is mathematical (counter-clockwise-positive, 0 along +x), but
    /// positions live in screen space where y grows downward, so the y
    /// component is subtracted. Magnitudes below [`FORCE_EPSILON`] are
    /// dropped entirely.
    pub fn apply_force(&mut self, magnitude: f64, angle: f64) {
        if magnitude.abs() < FORCE_EPSILON {
            return;
        }
        self.v.x += magnitude * angle.cos();
        self.v.y -= magnitude * angle.sin();
    }

    /// One explicit Euler step: `x += v`, one velocity unit per tick.
    ///
    /// Velocity is pixels-per-tick, not per-second, so simulation speed is
    /// tick-rate-coupled.
    pub fn advance(&mut self) {
        self.x += self.v;
    }
}

/// Read-only snapshot of a peer body, enough to compute its pull.
#[derive(Debug, Clone, Copy)]
pub struct Peer {
    pub center: NVec2,
    pub mass: f64,
}

/// The live set of bodies queried during force accumulation.
///
/// Owned by the driver; bodies are inserted explicitly and the whole
/// collection is cleared and rebuilt on simulation reset.
#[derive(Debug, Default)]
pub struct Registry {
    bodies: Vec<Body>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a body. Insertion order does not affect the physics (the
    /// all-pairs sum is order-independent).
    pub fn add(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Drop every body. Used on simulation reset.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    /// Fresh snapshot of every body except the indexed one.
    ///
    /// A registry holding a single body yields an empty snapshot, so gravity
    /// over it applies zero force rather than erroring.
    pub fn peers_of(&self, index: usize) -> Vec<Peer> {
        self.bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, b)| Peer {
                center: b.center(),
                mass: b.mass,
            })
            .collect()
    }
}
