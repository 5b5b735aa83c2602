//! The simulation engine.
//!
//! `Gravity` owns the particle collection and the global configuration
//! and drives one discrete time step across all particles per `tick`:
//! force pass first (pure reads of pre-tick state), then integration,
//! then eviction of out-of-bounds particles in bordered mode.
//!
//! Tick scheduling is the caller's concern; the engine only guarantees
//! that one `tick` performs exactly one synchronous update.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{ConfigPatch, ConfigSnapshot, ParticleConfig};
use crate::simulation::forces::{ForceContext, InteractionMode};
use crate::simulation::integrator::{euler_step, StepInput};
use crate::simulation::params::{merge_patch, Dimensions, SimParams};
use crate::simulation::states::{Particle, RunState, Vec2, DEFAULT_COLOR, DEFAULT_RADIUS};

pub struct Gravity {
    particles: Vec<Particle>, // insertion-ordered; order irrelevant to physics
    params: SimParams,
    mode: InteractionMode,
    field_vector: Vec2, // consumed only by the directional-field strategy
    state: RunState,
    next_id: u64, // monotonic; restarted only by reset
    rng: StdRng,
}

impl Gravity {
    pub fn new(params: SimParams, mode: InteractionMode) -> Self {
        let rng = StdRng::seed_from_u64(params.seed);
        Self {
            particles: Vec::new(),
            params,
            mode,
            field_vector: Vec2::new(0.0, -1.0),
            state: RunState::Paused,
            next_id: 1,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn field_vector(&self) -> Vec2 {
        self.field_vector
    }

    pub fn dimensions(&self) -> Dimensions {
        self.params.dimensions
    }

    // ==================================================================
    // Run-state controls
    // ==================================================================

    pub fn start(&mut self) {
        if self.state != RunState::Running {
            info!("engine started");
        }
        self.state = RunState::Running;
    }

    /// Idempotent; a paused engine ignores `tick`.
    pub fn pause(&mut self) {
        self.state = RunState::Paused;
    }

    /// Clear all particles and return to a running empty engine.
    /// The id allocator restarts, so a reset engine assigns ids
    /// deterministically from 1 again.
    pub fn reset(&mut self) {
        info!("engine reset, dropping {} particles", self.particles.len());
        self.particles.clear();
        self.next_id = 1;
        self.state = RunState::Running;
    }

    // ==================================================================
    // Population
    // ==================================================================

    /// Append a new particle at `position`.
    ///
    /// The starting velocity is random (seeded rng) when the
    /// random-direction flag is on, otherwise the configured velocity or
    /// zero. Adding the first particle auto-starts a paused engine;
    /// population drives run state by design.
    pub fn add_particle(&mut self, position: Vec2, config: &ParticleConfig) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let velocity = if self.params.random_direction {
            self.random_velocity()
        } else {
            config
                .velocity
                .map_or_else(Vec2::zeros, |[x, y]| Vec2::new(x, y))
        };

        let particle = Particle::new(
            id,
            position,
            velocity,
            config.radius.unwrap_or(DEFAULT_RADIUS),
            config
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        );

        debug!("added particle {id} at ({:.1}, {:.1})", position.x, position.y);
        self.particles.push(particle);

        if self.particles.len() == 1 {
            self.start();
        }

        id
    }

    /// Remove a particle by id. Unknown ids are a no-op.
    pub fn remove_particle_by_id(&mut self, id: u64) {
        if let Some(index) = self.particles.iter().position(|p| p.id == id) {
            self.particles.remove(index);
            debug!("removed particle {id}");
        }
    }

    /// Evict every particle outside the bounds. Ids are collected first
    /// and removed after, so the collection is never mutated mid-scan.
    pub fn remove_outer_particles(&mut self) {
        let Dimensions { height, width } = self.params.dimensions;
        let inset = self.params.boundary_inset;

        let outer: Vec<u64> = self
            .particles
            .iter()
            .filter(|p| !p.is_within_bounds(height, width, inset))
            .map(|p| p.id)
            .collect();

        for id in outer {
            self.remove_particle_by_id(id);
        }
    }

    // ==================================================================
    // Stepping
    // ==================================================================

    /// One discrete time step across all current particles.
    /// No-op while paused.
    pub fn tick(&mut self) {
        if self.state == RunState::Paused {
            return;
        }

        // Force pass: every force for this tick is computed from
        // pre-tick positions before any particle moves.
        let mode = self.mode;
        let ctx = ForceContext {
            particles: &self.particles,
            gravity: self.params.gravity,
            dimensions: self.params.dimensions,
            min_displacement: self.params.min_displacement,
            boundary_inset: self.params.boundary_inset,
            g: self.params.g,
            field_vector: self.field_vector,
        };
        let forces: Vec<Vec2> = self
            .particles
            .iter()
            .map(|p| mode.resultant_force(p, &ctx))
            .collect();

        let Dimensions { height, width } = self.params.dimensions;
        let input = StepInput {
            bordered: self.params.bordered,
            height,
            width,
            damping_factor: self.params.damping_factor,
            delta: self.params.delta,
            inset: self.params.boundary_inset,
        };

        for (particle, force) in self.particles.iter_mut().zip(forces) {
            particle.resultant_force = force;
            euler_step(particle, &input);
        }

        if self.params.bordered {
            self.remove_outer_particles();
        }
    }

    // ==================================================================
    // Configuration surface
    // ==================================================================

    pub fn set_dimensions(&mut self, dimensions: Option<Dimensions>) {
        self.params.dimensions = dimensions.unwrap_or(Dimensions {
            height: 0.0,
            width: 0.0,
        });
    }

    /// Enabling the border triggers an immediate sweep for particles
    /// that are already out of bounds.
    pub fn set_bordered(&mut self, bordered: bool) {
        self.params.bordered = bordered;
        if bordered {
            self.remove_outer_particles();
        }
    }

    pub fn toggle_border(&mut self) {
        self.set_bordered(!self.params.bordered);
    }

    pub fn set_gravity(&mut self, gravity: bool) {
        self.params.gravity = gravity;
    }

    pub fn toggle_gravity(&mut self) {
        self.params.gravity = !self.params.gravity;
    }

    pub fn toggle_random_direction(&mut self) {
        self.params.random_direction = !self.params.random_direction;
    }

    /// Takes a linear distance from the caller and stores the squared
    /// floor, which is what the force pass compares against.
    pub fn set_min_displacement(&mut self, distance: f64) {
        self.params.min_displacement = distance * distance;
    }

    pub fn set_interaction_mode(&mut self, mode: InteractionMode) {
        self.mode = mode;
    }

    pub fn set_field_vector(&mut self, field_vector: Vec2) {
        self.field_vector = field_vector;
    }

    /// Derive the field vector from device-orientation angles.
    ///
    /// `beta` is rotation around the x axis in degrees (front-to-back
    /// tilt, -180..180); `gamma` around the y axis (left-to-right tilt,
    /// -90..90). The core only consumes the resulting vector; how the
    /// angles are sensed is the caller's concern.
    pub fn set_tilt(&mut self, beta: f64, gamma: f64) {
        let fy = beta.to_radians().sin();
        let fx = gamma.to_radians().sin() * (1.0 - fy);
        self.field_vector = Vec2::new(fx, -fy);
    }

    /// Apply a sparse configuration update; unset fields keep their
    /// current values. The write half of the persistence collaborator's
    /// surface.
    pub fn apply_patch(&mut self, patch: &ConfigPatch) {
        let was_bordered = self.params.bordered;
        self.params = merge_patch(&self.params, patch);

        if let Some(mode) = patch.interaction {
            self.mode = mode;
        }
        if !was_bordered && self.params.bordered {
            self.remove_outer_particles();
        }
    }

    /// Flat snapshot of the current configuration, the read half of the
    /// persistence collaborator's surface.
    pub fn config(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            enable_border: self.params.bordered,
            disable_gravity: !self.params.gravity,
            random_direction: self.params.random_direction,
            min_displacement: self.params.min_displacement,
            damping_factor: self.params.damping_factor,
            delta: self.params.delta,
            interaction: self.mode,
        }
    }

    fn random_velocity(&mut self) -> Vec2 {
        let speed = self.params.max_start_speed;
        Vec2::new(
            (self.rng.gen::<f64>() - 0.5) * speed,
            (self.rng.gen::<f64>() - 0.5) * speed,
        )
    }
}
