mod app;
mod config;
mod input;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use config::{load_settings, project_paths, Settings};
use solarium::{Preset, Simulation};
use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug, Clone)]
#[command(name = "solarium")]
#[command(about = "Terminal solar-system tour with animated orbits and a flying camera", long_about = None)]
pub(crate) struct Args {
    /// Scale preset: classic or compact
    #[arg(long)]
    pub(crate) preset: Option<Preset>,

    /// FPS cap (5..=120)
    #[arg(long)]
    pub(crate) fps: Option<u32>,

    /// Simulated days per real second. Negative runs time backwards.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) speed: Option<f64>,

    /// Seed for belt, cloud and star placement
    #[arg(long)]
    pub(crate) seed: Option<u64>,

    /// Start with the clock stopped
    #[arg(long, default_value_t = false)]
    pub(crate) paused: bool,

    /// Fly to this body or region at start-up (e.g. earth, kuiperBelt)
    #[arg(long)]
    pub(crate) select: Option<String>,

    /// Do not write settings back on exit
    #[arg(long, default_value_t = false)]
    pub(crate) no_save: bool,

    /// Log file (defaults to the data directory)
    #[arg(long)]
    pub(crate) log_file: Option<PathBuf>,
}

fn init_tracing(path: &Path, settings: &Settings) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let level = log_directives(&settings.log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter)
        .init();
    if level != settings.log_level {
        warn!(log_level = %settings.log_level, "unusable log level in settings, using info");
    }
    Ok(())
}

/// The saved filter directives, or `info` when they do not parse.
fn log_directives(level: &str) -> &str {
    if EnvFilter::try_new(level).is_ok() {
        level
    } else {
        "info"
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let paths = project_paths()?;
    let mut settings = load_settings(&paths.settings_path);
    settings.apply_args(&args);

    let log_path = args.log_file.clone().unwrap_or_else(|| paths.log_path.clone());
    init_tracing(&log_path, &settings)?;
    info!(preset = %settings.preset, fps = settings.fps_cap, speed = settings.speed, "starting");

    let sim = Simulation::new(settings.preset, settings.seed).context("body table failed validation")?;
    app::run(sim, settings, &paths, &args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_log_level_falls_back_to_info() {
        assert_eq!(log_directives("debug"), "debug");
        assert_eq!(log_directives("solarium=trace,warn"), "solarium=trace,warn");
        assert_eq!(log_directives("solarium=loud"), "info");
    }
}
