//! Configuration types for loading simulation scenarios from YAML and for
//! the persistence collaborator's partial-update surface.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]    – interaction mode and initial field vector
//! - [`ParamsConfig`]    – global flags and numerical parameters
//! - [`ParticleSetup`]   – initial state for each particle
//! - [`ScenarioConfig`]  – top-level wrapper used to load a scenario
//!
//! Every field is optional; unspecified fields fall back to the engine
//! defaults rather than erroring.
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! engine:
//!   interaction: pairwise   # or "field"
//!
//! parameters:
//!   height: 600.0
//!   width: 800.0
//!   bordered: true
//!   min_displacement: 2500.0   # squared-distance floor
//!   damping_factor: 0.9
//!   seed: 42
//!
//! particles:
//!   - position: [200.0, 300.0]
//!     velocity: [0.0, 1.5]
//!     radius: 5.0
//!   - position: [600.0, 300.0]
//!     velocity: [0.0, -1.5]
//!     radius: 8.0
//!     color: "#0dcfff"
//! ```

use serde::{Deserialize, Serialize};

use crate::simulation::forces::InteractionMode;

/// Engine-level scenario configuration.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub interaction: Option<InteractionMode>, // defaults to pairwise gravity
    pub field_vector: Option<[f64; 2]>, // initial uniform field, field mode only
}

/// Global flags and numerical parameters for a scenario.
/// Mirrors `SimParams`; every field optional.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ParamsConfig {
    pub gravity: Option<bool>,
    pub bordered: Option<bool>,
    pub random_direction: Option<bool>,
    pub min_displacement: Option<f64>, // squared-distance floor
    pub damping_factor: Option<f64>,
    pub delta: Option<f64>,
    pub boundary_inset: Option<f64>,
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub max_start_speed: Option<f64>,
    pub g: Option<f64>,
    pub seed: Option<u64>,
}

/// Cosmetic and kinematic options for a newly placed particle.
/// Also what the input collaborator hands to `add_particle`.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ParticleConfig {
    pub velocity: Option<[f64; 2]>, // ignored when random_direction is on
    pub radius: Option<f64>,
    pub color: Option<String>,
}

/// Initial state for a single scenario particle.
#[derive(Deserialize, Debug)]
pub struct ParticleSetup {
    pub position: [f64; 2],
    #[serde(flatten)]
    pub config: ParticleConfig,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParamsConfig,
    pub particles: Vec<ParticleSetup>,
}

/// Sparse configuration update from the persistence collaborator.
///
/// `None` means "leave the current value unchanged"; applied through the
/// pure merge in `simulation::params`. Key names follow what the
/// collaborator stores, hence `disable_gravity` rather than `gravity`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ConfigPatch {
    pub enable_border: Option<bool>,
    pub disable_gravity: Option<bool>,
    pub random_direction: Option<bool>,
    pub min_displacement: Option<f64>, // already squared
    pub damping_factor: Option<f64>,
    pub delta: Option<f64>,
    pub interaction: Option<InteractionMode>,
}

/// Flat snapshot of the engine configuration, the read half of the
/// persistence collaborator's get/set surface.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ConfigSnapshot {
    pub enable_border: bool,
    pub disable_gravity: bool,
    pub random_direction: bool,
    pub min_displacement: f64,
    pub damping_factor: f64,
    pub delta: f64,
    pub interaction: InteractionMode,
}
