use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use hud_focus_core::{build_intervals, BeatmapEvent, FocusConfig, PlaybackTracker};
use tracing_subscriber::EnvFilter;

fn main() -> hud_focus_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Intervals {
            chart,
            config,
            song_length,
        } => run_intervals(&chart, config.as_deref(), song_length),
        Commands::Simulate {
            chart,
            config,
            song_length,
            tick_rate,
        } => run_simulate(&chart, config.as_deref(), song_length, tick_rate),
    }
}

fn run_intervals(
    chart: &Path,
    config: Option<&Path>,
    song_length: f32,
) -> hud_focus_core::Result<()> {
    tracing::info!(?chart, song_length, "computing safe intervals");

    let events = load_chart(chart)?;
    let config = load_config(config)?;
    let intervals = build_intervals(&events, song_length, &config);

    for interval in &intervals {
        println!("{:.3} - {:.3}", interval.start, interval.end);
    }
    Ok(())
}

fn run_simulate(
    chart: &Path,
    config: Option<&Path>,
    song_length: f32,
    tick_rate: f32,
) -> hud_focus_core::Result<()> {
    tracing::info!(?chart, song_length, tick_rate, "simulating playback");

    let events = load_chart(chart)?;
    let config = load_config(config)?;
    let intervals = build_intervals(&events, song_length, &config);

    for interval in &intervals {
        tracing::debug!(start = interval.start, end = interval.end, "safe interval");
    }

    let mut tracker = PlaybackTracker::new();
    let step = 1.0 / tick_rate.max(1.0);
    let mut time = 0.0_f32;
    let mut changes = 0_u32;

    while time <= song_length {
        if let Some(visible) = tracker.tick(time, false, &intervals, config.unhide_when_paused) {
            changes += 1;
            tracing::info!(time, visible, "visibility changed");
        }
        time += step;
    }

    tracing::info!(changes, "simulation finished");
    Ok(())
}

fn load_chart(path: &Path) -> hud_focus_core::Result<Vec<BeatmapEvent>> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn load_config(path: Option<&Path>) -> hud_focus_core::Result<FocusConfig> {
    match path {
        Some(path) => FocusConfig::load(path),
        None => Ok(FocusConfig::default()),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "HUD visibility controller toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute and print the safe intervals for a chart.
    Intervals {
        /// Path to the chart file (JSON array of events).
        #[arg(short = 'm', long)]
        chart: PathBuf,
        /// Optional configuration file to load instead of the defaults.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Song length in seconds.
        #[arg(short, long)]
        song_length: f32,
    },
    /// Step a simulated clock through the song and log visibility changes.
    Simulate {
        /// Path to the chart file (JSON array of events).
        #[arg(short = 'm', long)]
        chart: PathBuf,
        /// Optional configuration file to load instead of the defaults.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Song length in seconds.
        #[arg(short, long)]
        song_length: f32,
        /// Simulated ticks per second.
        #[arg(short, long, default_value_t = 90.0)]
        tick_rate: f32,
    },
}
