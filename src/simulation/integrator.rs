//! One explicit Euler tick over the whole registry.
//!
//! Gravity impulses are accumulated first for every non-anchor body from a
//! pre-step snapshot of its peers, then every body advances by one step.
//! Using the snapshot keeps the all-pairs sum order-independent: no body
//! sees a peer that has already moved this tick.

use crate::simulation::forces::Attraction;
use crate::simulation::params::SimContext;
use crate::simulation::states::Registry;

/// Advance the registry by one tick.
///
/// Anchor bodies skip the gravity phase entirely (their velocity is never
/// perturbed) but still integrate position, so an anchor given an initial
/// velocity drifts at constant speed as the reference frame.
pub fn euler_step(registry: &mut Registry, gravity: &dyn Attraction, ctx: &SimContext) {
    let n = registry.len();
    if n == 0 {
        return;
    }

    // Impulse phase: each non-anchor body is pulled by a snapshot of all
    // its peers taken before anyone moves.
    for i in 0..n {
        if registry.bodies()[i].anchor {
            continue;
        }
        let peers = registry.peers_of(i);
        if let Some(body) = registry.get_mut(i) {
            gravity.pull(ctx, body, &peers);
        }
    }

    // Drift phase: x += v for everyone, anchors included.
    for body in registry.bodies_mut() {
        body.advance();
    }
}
