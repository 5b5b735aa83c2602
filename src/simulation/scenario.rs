//! Build a fully-initialized engine from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime
//! [`Gravity`] engine: parameters with defaults filled in, the selected
//! interaction mode, and the initial particles placed through the
//! normal `add_particle` path (so ids and auto-start behave exactly as
//! they do for interactive placement).

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Gravity;
use crate::simulation::forces::InteractionMode;
use crate::simulation::params::{Dimensions, SimParams};
use crate::simulation::states::Vec2;

pub struct Scenario {
    pub gravity: Gravity,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let defaults = SimParams::default();

        // Parameters: ParamsConfig -> SimParams, unset fields default
        let p_cfg = cfg.parameters;
        let params = SimParams {
            gravity: p_cfg.gravity.unwrap_or(defaults.gravity),
            bordered: p_cfg.bordered.unwrap_or(defaults.bordered),
            random_direction: p_cfg
                .random_direction
                .unwrap_or(defaults.random_direction),
            min_displacement: p_cfg
                .min_displacement
                .unwrap_or(defaults.min_displacement),
            damping_factor: p_cfg.damping_factor.unwrap_or(defaults.damping_factor),
            delta: p_cfg.delta.unwrap_or(defaults.delta),
            boundary_inset: p_cfg.boundary_inset.unwrap_or(defaults.boundary_inset),
            dimensions: Dimensions {
                height: p_cfg.height.unwrap_or(defaults.dimensions.height),
                width: p_cfg.width.unwrap_or(defaults.dimensions.width),
            },
            max_start_speed: p_cfg.max_start_speed.unwrap_or(defaults.max_start_speed),
            g: p_cfg.g.unwrap_or(defaults.g),
            seed: p_cfg.seed.unwrap_or(defaults.seed),
        };

        let mode = cfg
            .engine
            .interaction
            .unwrap_or(InteractionMode::PairwiseGravity);

        let mut gravity = Gravity::new(params, mode);

        if let Some([fx, fy]) = cfg.engine.field_vector {
            gravity.set_field_vector(Vec2::new(fx, fy));
        }

        for setup in &cfg.particles {
            let [x, y] = setup.position;
            gravity.add_particle(Vec2::new(x, y), &setup.config);
        }

        Self { gravity }
    }
}
