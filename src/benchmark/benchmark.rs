use std::time::Instant;

use crate::configuration::config::ParticleConfig;
use crate::simulation::engine::Gravity;
use crate::simulation::forces::InteractionMode;
use crate::simulation::params::{Dimensions, SimParams};
use crate::simulation::states::Vec2;

/// Build an engine with `n` particles scattered deterministically inside
/// a 1000x1000 box. No rand needed, runs are repeatable.
fn make_engine(n: usize, mode: InteractionMode) -> Gravity {
    let params = SimParams {
        dimensions: Dimensions {
            height: 1000.0,
            width: 1000.0,
        },
        ..SimParams::default()
    };

    let mut gravity = Gravity::new(params, mode);
    let spawn = ParticleConfig::default();

    for i in 0..n {
        let i_f = i as f64;
        let position = Vec2::new(
            500.0 + (i_f * 0.37).sin() * 400.0,
            500.0 + (i_f * 0.13).cos() * 400.0,
        );
        gravity.add_particle(position, &spawn);
    }

    gravity
}

/// Time a single tick of each interaction mode over a range of system
/// sizes. The pairwise pass is the O(n^2) part worth watching.
pub fn bench_forces() {
    let ns = [200, 400, 800, 1600, 3200];

    for n in ns {
        let mut pairwise = make_engine(n, InteractionMode::PairwiseGravity);
        let mut field = make_engine(n, InteractionMode::DirectionalField);

        // Warm up
        pairwise.tick();
        field.tick();

        let t0 = Instant::now();
        pairwise.tick();
        let dt_pairwise = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        field.tick();
        let dt_field = t1.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, pairwise = {:8.6} s, field = {:8.6} s",
            dt_pairwise, dt_field
        );
    }
}

/// Benchmark sustained ticking for a range of n.
/// Output is CSV, paste straight into a spreadsheet to graph.
pub fn bench_tick_curve() {
    println!("N,pairwise_ms");

    for n in (200..=6400).step_by(200) {
        // Small n: average over a few ticks to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let mut gravity = make_engine(n, InteractionMode::PairwiseGravity);
        gravity.tick(); // warm up

        let t0 = Instant::now();
        for _ in 0..steps {
            gravity.tick();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
