//! Numerical parameters and the shared simulation context.
//!
//! `SimContext` is the one knob every gravity evaluation reads: the
//! user-adjustable gravity multiplier plus the paused flag. It is passed by
//! reference into physics calls instead of living in a global, so there is
//! no hidden shared state.

/// Default gravity multiplier on startup and after a restart.
pub const DEFAULT_GRAVITY_MULTIPLIER: f64 = 10_000.0;

/// Per-tick multiplier adjustment while an arrow key is held.
pub const DEFAULT_MULTIPLIER_STEP: f64 = 100.0;

/// Radius scale folded into the mass formula. Exaggerates a screen-sized
/// radius into a planetary-scale volume so the inverse-square pull is
/// visible at pixel distances.
pub const RADIUS_SCALE: f64 = 1.0e7;

/// Impulses below this magnitude are ignored entirely.
pub const FORCE_EPSILON: f64 = 1.0e-8;

/// Floor for the pairwise distance so coincident centers never divide by
/// zero.
pub const DEFAULT_MIN_DISTANCE: f64 = 1.0e-6;

/// The multiplier is shown to the user divided by this, as a small float.
pub const MULTIPLIER_DISPLAY_DIVISOR: f64 = 10_000.0;

/// Shared per-tick simulation state.
#[derive(Debug, Clone)]
pub struct SimContext {
    pub gravity_multiplier: f64, // integer-valued scalar, adjusted in steps
    pub paused: bool,
}

impl SimContext {
    pub fn new(gravity_multiplier: f64) -> Self {
        Self {
            gravity_multiplier,
            paused: false,
        }
    }

    /// Restore startup state. Called on simulation restart.
    pub fn reset(&mut self, gravity_multiplier: f64) {
        self.gravity_multiplier = gravity_multiplier;
        self.paused = false;
    }

    /// Human-scaled multiplier for the HUD.
    pub fn display_multiplier(&self) -> f64 {
        self.gravity_multiplier / MULTIPLIER_DISPLAY_DIVISOR
    }
}

impl Default for SimContext {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY_MULTIPLIER)
    }
}
