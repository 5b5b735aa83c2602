//! Runtime simulation parameters.
//!
//! `SimParams` holds the engine's global configuration:
//! - gravity / bordered / random-direction flags,
//! - squared minimum-displacement floor and gravitational constant `g`,
//! - bounce damping, nudge delta and boundary inset,
//! - bounding-box dimensions and the rng seed for starting velocities.

use crate::configuration::config::ConfigPatch;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimParams {
    pub gravity: bool, // all force computation short-circuits to zero when false
    pub bordered: bool, // hard boundary bounce + eviction of escaped particles
    pub random_direction: bool, // new particles get a random starting velocity
    pub min_displacement: f64, // squared-distance floor, > 0
    pub damping_factor: f64, // restitution multiplier on bounce, (0, 1]
    pub delta: f64, // inward nudge on bounce, prevents boundary sticking
    pub boundary_inset: f64, // margin from container edges
    pub dimensions: Dimensions,
    pub max_start_speed: f64, // range of random starting velocity components
    pub g: f64, // gravitational constant, unitless
    pub seed: u64, // deterministic seed for random starting velocities
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: true,
            bordered: false,
            random_direction: false,
            min_displacement: 50.0 * 50.0,
            damping_factor: 1.0,
            delta: 2.0,
            boundary_inset: 5.0,
            dimensions: Dimensions {
                height: 0.0,
                width: 0.0,
            },
            max_start_speed: 3.0,
            g: 1.0,
            seed: 42,
        }
    }
}

/// Merge a sparse patch into existing parameters.
///
/// Every patch field is optional; `None` leaves the current value
/// unchanged. Pure, so the merge semantics stay testable on their own.
/// Note `disable_gravity` is inverted into the `gravity` flag, matching
/// the key the persistence collaborator stores.
pub fn merge_patch(params: &SimParams, patch: &ConfigPatch) -> SimParams {
    SimParams {
        bordered: patch.enable_border.unwrap_or(params.bordered),
        gravity: patch.disable_gravity.map_or(params.gravity, |d| !d),
        random_direction: patch.random_direction.unwrap_or(params.random_direction),
        min_displacement: patch.min_displacement.unwrap_or(params.min_displacement),
        damping_factor: patch.damping_factor.unwrap_or(params.damping_factor),
        delta: patch.delta.unwrap_or(params.delta),
        ..params.clone()
    }
}
