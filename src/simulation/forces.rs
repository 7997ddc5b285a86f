//! Force contributors for the gravity toy.
//!
//! Defines the [`Attraction`] trait and the single law shipped with the
//! simulation: a modified inverse-square gravity whose strength is scaled
//! by the user-adjustable multiplier in [`SimContext`].

use crate::simulation::params::SimContext;
use crate::simulation::states::{Body, Peer};

/// A force law that pulls one body toward a snapshot of its peers.
///
/// Implementations mutate the body's velocity directly: forces here are
/// per-tick velocity impulses, not accelerations integrated over a time
/// step.
pub trait Attraction {
    fn pull(&self, ctx: &SimContext, body: &mut Body, peers: &[Peer]);
}

/// Modified Newtonian gravity.
///
/// For each peer the impulse magnitude is
/// `multiplier * peer_mass / body_mass / distance^2`, applied along the
/// line between the two centers. Masses are planetary-scale (see
/// `sphere_mass`), so the multiplier plays the role of the gravitational
/// constant. Distance is the difference of the two centers; see DESIGN.md
/// for the history of this formula.
pub struct PlanetaryGravity {
    /// Distance floor. Two coincident centers contribute a large but
    /// finite impulse instead of dividing by zero.
    pub min_distance: f64,
}

impl Attraction for PlanetaryGravity {
    fn pull(&self, ctx: &SimContext, body: &mut Body, peers: &[Peer]) {
        let here = body.center();

        for peer in peers {
            // Displacement from this body to the peer, screen coordinates.
            let dx = peer.center.x - here.x;
            let dy = peer.center.y - here.y;

            let distance = (dx * dx + dy * dy).sqrt().max(self.min_distance);

            // Dividing by this body's own mass folds F = G m1 m2 / r^2 and
            // a = F / m1 into a single per-tick velocity delta.
            let force = ctx.gravity_multiplier * peer.mass / body.mass / (distance * distance);

            // Negated dy keeps the angle mathematical (counter-clockwise
            // positive) even though screen y grows downward.
            let angle = (-dy).atan2(dx);

            body.apply_force(force, angle);
        }
    }
}
