use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use shooter_app::autopilot::{self, Autopilot};
use shooter_app::AppError;
use shooter_core::constants::TICK_RATE;
use shooter_sim::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "shooter")]
#[command(about = "Run a headless arcade shooter session under the autopilot")]
struct Args {
    /// JSON config file (missing fields take their defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Session length in seconds of simulated time
    #[arg(long, default_value_t = 120)]
    secs: u64,

    /// Distance at which the autopilot backs away from enemies
    #[arg(long, default_value_t = 20.0)]
    flee_radius: f32,
}

fn load_config(args: &Args) -> Result<SimConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
                path: path.clone(),
                source,
            })?;
            SimConfig::from_json(&json)?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn run(args: Args) -> Result<(), AppError> {
    let config = load_config(&args)?;
    log::info!("starting session with seed {}", config.seed);

    let max_ticks = args.secs.saturating_mul(u64::from(TICK_RATE));
    let report = autopilot::run_session(config, Autopilot::new(args.flee_radius), max_ticks)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
