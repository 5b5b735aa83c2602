//! Interaction strategies for the gravity toy.
//!
//! Two interchangeable force-computation policies, selected by
//! configuration:
//! - pairwise Newtonian-style gravity between in-bounds particles,
//! - a uniform directional field (simulated device tilt).
//!
//! Both are pure functions of `(particle, context) -> Vec2`; the engine
//! assigns the result to the particle's resultant force once per tick,
//! before any particle moves.

use serde::{Deserialize, Serialize};

use crate::simulation::params::Dimensions;
use crate::simulation::states::{Particle, Vec2, VectorExt};

/// Full-field multiplier when the particle is inside the bounds.
const FIELD_CONTAINED: f64 = 0.5;
/// Weak restoring multiplier pulling an escaped particle back.
/// Empirically tuned alongside [`FIELD_CONTAINED`], not derived.
const FIELD_ESCAPED: f64 = 0.02;

/// Read-only snapshot of the engine state a force function may consult.
/// Borrowed for the duration of one force pass, so all forces for a tick
/// see the same pre-tick positions.
pub struct ForceContext<'a> {
    pub particles: &'a [Particle],
    pub gravity: bool,
    pub dimensions: Dimensions,
    pub min_displacement: f64, // squared floor, guards the near-zero separation singularity
    pub boundary_inset: f64,
    pub g: f64,
    pub field_vector: Vec2, // direction + magnitude of the uniform field
}

/// Which interaction strategy the engine runs.
/// `interaction: "pairwise"` or `interaction: "field"` in scenario YAML.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    #[serde(rename = "pairwise")] // pairwise gravity between all in-bounds particles
    PairwiseGravity,

    #[serde(rename = "field")] // uniform directional field, e.g. device tilt
    DirectionalField,
}

impl InteractionMode {
    /// Compute the resultant force for one particle.
    pub fn resultant_force(&self, particle: &Particle, ctx: &ForceContext) -> Vec2 {
        match self {
            InteractionMode::PairwiseGravity => pairwise_gravity(particle, ctx),
            InteractionMode::DirectionalField => directional_field(particle, ctx),
        }
    }
}

/// Pairwise gravitational force on `particle` from every other particle.
///
/// A pair contributes only when the ids differ and both particles are
/// within bounds; escaped particles are excluded entirely, which keeps
/// forces from blowing up on runaways. For each qualifying pair the
/// squared separation is floored to `min_displacement` before the unit
/// vector is taken, so close encounters never produce singular forces.
///
/// Each particle sums its own contributions independently against the
/// others' current mass and position; Newton's third law is deliberately
/// not enforced.
pub fn pairwise_gravity(particle: &Particle, ctx: &ForceContext) -> Vec2 {
    let mut resultant = Vec2::zeros();

    if !ctx.gravity {
        return resultant;
    }

    let Dimensions { height, width } = ctx.dimensions;
    let inset = ctx.boundary_inset;

    if !particle.is_within_bounds(height, width, inset) {
        return resultant;
    }

    for other in ctx.particles {
        if other.id == particle.id {
            continue;
        }
        if !other.is_within_bounds(height, width, inset) {
            continue;
        }

        let displacement = particle.displacement_to(other);
        let distance2 = displacement.norm_squared().max(ctx.min_displacement);

        // F = g * m_other / d^2, directed along the displacement
        resultant += displacement.unit() * (ctx.g * other.mass() / distance2);
    }

    resultant
}

/// Uniform directional field force on `particle`.
///
/// In-bounds particles feel the full field; escaped particles feel a
/// much weaker pull back toward the box. This soft containment is a
/// deliberate behavior distinct from the hard bounce.
pub fn directional_field(particle: &Particle, ctx: &ForceContext) -> Vec2 {
    if !ctx.gravity {
        return Vec2::zeros();
    }

    let Dimensions { height, width } = ctx.dimensions;

    if !particle.is_within_bounds(height, width, ctx.boundary_inset) {
        return ctx.field_vector * FIELD_ESCAPED;
    }

    ctx.field_vector * FIELD_CONTAINED
}
