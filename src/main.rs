use gravbox::{RunState, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "orbit.yaml")]
    file_name: String,

    /// Number of ticks to run. Scheduling cadence is the driver's job,
    /// so headless runs just loop as fast as they can.
    #[arg(short = 'n', long, default_value_t = 1000)]
    ticks: u64,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let Scenario { mut gravity } = Scenario::build_scenario(scenario_cfg);

    info!(
        "running {} ticks with {} particles",
        args.ticks,
        gravity.particles().len()
    );

    for _ in 0..args.ticks {
        gravity.tick();
    }

    println!(
        "after {} ticks: {} particles, state {}",
        args.ticks,
        gravity.particles().len(),
        if gravity.state() == RunState::Running {
            "running"
        } else {
            "paused"
        }
    );
    for p in gravity.particles() {
        println!(
            "  particle {:3}  pos = ({:10.3}, {:10.3})  vel = ({:8.3}, {:8.3})",
            p.id, p.position.x, p.position.y, p.velocity.x, p.velocity.y
        );
    }

    Ok(())
}
