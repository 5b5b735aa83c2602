pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Particle, RunState, Vec2, VectorExt, DEFAULT_COLOR, DEFAULT_RADIUS};
pub use simulation::params::{merge_patch, Dimensions, SimParams};
pub use simulation::forces::{directional_field, pairwise_gravity, ForceContext, InteractionMode};
pub use simulation::integrator::{bounce, euler_step, StepInput, DT};
pub use simulation::engine::Gravity;
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    ConfigPatch, ConfigSnapshot, EngineConfig, ParamsConfig, ParticleConfig, ParticleSetup,
    ScenarioConfig,
};

pub use benchmark::benchmark::{bench_forces, bench_tick_curve};
