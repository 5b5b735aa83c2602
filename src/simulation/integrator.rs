//! Fixed-step time integration for a single particle.
//!
//! One discrete Newtonian update per tick with a unit time step:
//! semi-implicit Euler (velocity first, then position from the *new*
//! velocity) plus the bounding-box bounce response.

use crate::simulation::states::Particle;

/// Fixed unit time step. Force doubles as acceleration; any mass
/// normalization is baked into the force functions.
pub const DT: f64 = 1.0;

/// Per-tick inputs to [`euler_step`], copied out of the engine config.
#[derive(Debug, Clone, Copy)]
pub struct StepInput {
    pub bordered: bool,
    pub height: f64,
    pub width: f64,
    pub damping_factor: f64,
    pub delta: f64,
    pub inset: f64,
}

/// Advance one particle by a single step from its resultant force.
///
/// Ordering is a hard contract: the velocity update happens before the
/// position update, and the position moves by the updated velocity.
/// The bounce (when bordered) runs on the intermediate velocity, so a
/// boundary crossing is reflected in the same tick it occurs.
pub fn euler_step(particle: &mut Particle, input: &StepInput) {
    particle.velocity += particle.resultant_force * DT;

    if input.bordered {
        bounce(
            particle,
            input.height,
            input.width,
            input.damping_factor,
            input.delta,
            input.inset,
        );
    }

    particle.position += particle.velocity * DT;
}

/// Reflect the particle's velocity off any boundary it has crossed.
///
/// Each of the four walls is checked independently (a corner hit
/// reflects both axes in the same call), offset inward by the border
/// inset and the particle's own radius. The reflected component points
/// back toward the interior and is scaled by `damping_factor`; the
/// position is nudged `delta` inward on the same axis to stop the
/// particle sticking at the wall.
pub fn bounce(
    particle: &mut Particle,
    height: f64,
    width: f64,
    damping_factor: f64,
    delta: f64,
    inset: f64,
) {
    let r = particle.radius;

    // right wall
    if particle.position.x + r > width - inset {
        particle.velocity.x = -damping_factor * particle.velocity.x.abs();
        particle.position.x -= delta;
    }
    // left wall
    if particle.position.x - r < inset {
        particle.velocity.x = damping_factor * particle.velocity.x.abs();
        particle.position.x += delta;
    }
    // top wall
    if particle.position.y + r > height - inset {
        particle.velocity.y = -damping_factor * particle.velocity.y.abs();
        particle.position.y -= delta;
    }
    // bottom wall
    if particle.position.y - r < inset {
        particle.velocity.y = damping_factor * particle.velocity.y.abs();
        particle.position.y += delta;
    }
}
