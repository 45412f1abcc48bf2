use gravsim::{ScenarioConfig, Scenario};
use gravsim::{run_2d, run_headless};

use bevy::app::AppExit;
use clap::Parser;
use anyhow::{bail, Context, Result};

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, as a path or a name under `scenarios/`
    #[arg(short, default_value = "sun_earth.yaml")]
    file_name: String,

    /// Run this many frames without a window, then print the final state
    #[arg(long)]
    headless: Option<u64>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    let exit = match args.headless {
        Some(steps) => run_headless(scenario, steps).0,
        None => run_2d(scenario),
    };

    if let AppExit::Error(code) = exit {
        bail!("simulation stopped with exit code {code}");
    }
    Ok(())
}
