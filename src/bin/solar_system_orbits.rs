//! Animate the planets, or chart the annual Earth–Mars launch windows.
//!
//! Without a subcommand the animation window opens. `windows` runs the yearly
//! closest-approach scan and writes `launch_windows.png` and `travel_times.png`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use solar_system_orbits::animation::{AnimatorState, StarField, render_gif};
use solar_system_orbits::charts::{
    DISTANCE_CHART_FILE, TRAVEL_TIME_CHART_FILE, fonts_available, render_distance_chart,
    render_travel_time_chart,
};
use solar_system_orbits::config::{Settings, load_settings};
use solar_system_orbits::ephemeris::{EphemerisProvider, Epoch};
use solar_system_orbits::export::{export_csv, export_json};
use solar_system_orbits::logging;
use solar_system_orbits::provider::{self, EphemerisKind};
use solar_system_orbits::transfer::{WindowRequest, launch_windows};
use tracing::info;

const DEFAULT_GIF_FRAMES: usize = 120;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Animate planetary orbits or chart annual Earth→Mars launch windows"
)]
struct Cli {
    /// Settings file (TOML if it ends in .toml, YAML otherwise)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Ephemeris backend
    #[arg(long, global = true, value_enum, default_value_t = EphemerisKind::Analytic)]
    ephemeris: EphemerisKind,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find each year's closest approach and chart distances and transfer times
    Windows(WindowsArgs),
    /// Animate the planets (default when no subcommand is given)
    Animate(AnimateArgs),
}

#[derive(Args, Debug)]
struct WindowsArgs {
    #[arg(long)]
    start_year: Option<i32>,
    #[arg(long)]
    end_year: Option<i32>,
    /// Directory receiving launch_windows.png and travel_times.png
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Also write the table as CSV (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Also write the table as JSON (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct AnimateArgs {
    /// Render a fixed number of frames to an animated GIF instead of opening a window
    #[arg(long)]
    gif: Option<PathBuf>,
    #[arg(long, default_value_t = DEFAULT_GIF_FRAMES)]
    frames: usize,
    /// Start date (YYYY-MM-DD); defaults to now
    #[arg(long)]
    start: Option<NaiveDate>,
    /// Seed for the background stars
    #[arg(long)]
    seed: Option<u64>,
}

impl Default for AnimateArgs {
    fn default() -> Self {
        Self {
            gif: None,
            frames: DEFAULT_GIF_FRAMES,
            start: None,
            seed: None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => load_settings(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let provider = provider::open(cli.ephemeris)
        .with_context(|| format!("failed to open the {} ephemeris", cli.ephemeris))?;
    info!(ephemeris = provider.name(), "ephemeris ready");

    match cli.command {
        Some(Command::Windows(args)) => run_windows(&settings, provider.as_ref(), &args),
        Some(Command::Animate(args)) => run_animation(&settings, provider.as_ref(), &args),
        None => run_animation(&settings, provider.as_ref(), &AnimateArgs::default()),
    }
}

fn run_windows(
    settings: &Settings,
    provider: &dyn EphemerisProvider,
    args: &WindowsArgs,
) -> anyhow::Result<()> {
    let mut request = WindowRequest::from(&settings.windows);
    if let Some(start_year) = args.start_year {
        request.start_year = start_year;
    }
    if let Some(end_year) = args.end_year {
        request.end_year = end_year;
    }

    let mut windows = Vec::new();
    for window in launch_windows(provider, &request)? {
        let window = window?;
        println!(
            "{}: closest approach on {} at {:.3} AU",
            window.approach.year,
            window.approach.date.format("%Y-%m-%d"),
            window.approach.distance_au
        );
        windows.push(window);
    }

    notify_missing_fonts("charts");
    let distance_chart = args.output_dir.join(DISTANCE_CHART_FILE);
    render_distance_chart(&distance_chart, &windows)?;
    println!("Saved distance chart to {}", distance_chart.display());

    let time_chart = args.output_dir.join(TRAVEL_TIME_CHART_FILE);
    render_travel_time_chart(&time_chart, &windows)?;
    println!("Saved transfer time chart to {}", time_chart.display());

    if let Some(path) = &args.csv {
        export_csv(path, &windows).with_context(|| format!("failed to write {}", path.display()))?;
        report_export("CSV", path);
    }
    if let Some(path) = &args.json {
        export_json(path, &windows)
            .with_context(|| format!("failed to write {}", path.display()))?;
        report_export("JSON", path);
    }
    Ok(())
}

fn notify_missing_fonts(what: &str) {
    if !fonts_available() {
        eprintln!("warning: no usable system font found; {what} are written without text labels");
    }
}

fn report_export(kind: &str, path: &Path) {
    // Keep stdout clean when the table itself went there.
    if path != Path::new("-") {
        println!("Saved {kind} table to {}", path.display());
    }
}

fn run_animation(
    settings: &Settings,
    provider: &dyn EphemerisProvider,
    args: &AnimateArgs,
) -> anyhow::Result<()> {
    let animation = &settings.animation;
    let start = match args.start {
        Some(date) => Epoch::from_naive_date(date),
        None => Epoch::now()?,
    };
    let stars = StarField::seeded(
        animation.star_count,
        animation.axis_limit_au,
        args.seed.or(animation.star_seed),
    );
    let mut state = AnimatorState::new(start, &settings.bodies, animation);

    if let Some(path) = &args.gif {
        notify_missing_fonts("animation frames");
        let delay_ms = u32::try_from(animation.interval_ms).unwrap_or(u32::MAX);
        render_gif(path, provider, &mut state, &stars, args.frames, delay_ms)?;
        println!("Saved animation to {}", path.display());
        return Ok(());
    }
    show_window(provider, &mut state, &stars, animation.interval_ms)
}

#[cfg(feature = "window")]
fn show_window(
    provider: &dyn EphemerisProvider,
    state: &mut AnimatorState,
    stars: &StarField,
    interval_ms: u64,
) -> anyhow::Result<()> {
    solar_system_orbits::animation::run_window(provider, state, stars, interval_ms)?;
    Ok(())
}

#[cfg(not(feature = "window"))]
fn show_window(
    _provider: &dyn EphemerisProvider,
    _state: &mut AnimatorState,
    _stars: &StarField,
    _interval_ms: u64,
) -> anyhow::Result<()> {
    anyhow::bail!("this build has no window support; use `animate --gif <path>`")
}
