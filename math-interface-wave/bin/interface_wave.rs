//! Interface wave frame generator
//!
//! Derives the transmitted/reflected wave field once, samples a sequence of
//! animation frames on a fixed position grid and writes them as JSON for an
//! external plotting or animation front end.
//!
//! Usage:
//!   cargo run --release --bin interface-wave -- --output frames.json
//!   cargo run --release --bin interface-wave -- --config wave.json --frames 500
//!   cargo run --release --bin interface-wave -- --help

use anyhow::Context;
use clap::Parser;
use math_audio_interface_wave::parallel::is_parallel_available;
use math_audio_interface_wave::{
    AnimationConfig, FrameSampler, FrameSet, WaveSolver, create_output_json, save_frames_json,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "interface-wave")]
#[command(about = "Sample the wave field at a material interface into JSON frames", long_about = None)]
struct Args {
    /// Path to JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output JSON file path
    #[arg(short, long, default_value = "frames.json")]
    output: PathBuf,

    /// Override wavenumber in medium 1 (x < 0)
    #[arg(long)]
    k1: Option<f64>,

    /// Override wavenumber in medium 2 (x >= 0)
    #[arg(long)]
    k2: Option<f64>,

    /// Override angular frequency
    #[arg(long)]
    omega: Option<f64>,

    /// Override number of frames
    #[arg(short, long)]
    frames: Option<usize>,

    /// Print the summary JSON to stdout
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AnimationConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => {
            log::info!("No configuration file specified, using defaults");
            AnimationConfig::default()
        }
    };

    if let Some(k1) = args.k1 {
        config.params.k1 = k1;
    }
    if let Some(k2) = args.k2 {
        config.params.k2 = k2;
    }
    if let Some(omega) = args.omega {
        config.params.omega = omega;
    }
    if let Some(frames) = args.frames {
        config.num_frames = frames;
    }

    let solver = WaveSolver::new()?;
    let coefficients = solver.coefficients(config.params.k1, config.params.k2);
    log::info!(
        "k1={} k2={} omega={}: B={:.6} C={:.6}",
        config.params.k1,
        config.params.k2,
        config.params.omega,
        coefficients.transmission,
        coefficients.reflection
    );

    let sampler = FrameSampler::new(&solver, config)?;
    log::info!(
        "Sampling {} frames on {} positions (parallel: {})",
        sampler.config().num_frames,
        sampler.grid().len(),
        is_parallel_available()
    );
    let frames = sampler.sample_all();
    let frame_set = FrameSet::new(&sampler, coefficients, frames);

    save_frames_json(&args.output, &frame_set)
        .with_context(|| format!("writing frames to {}", args.output.display()))?;

    if args.verbose {
        println!(
            "{}",
            serde_json::to_string_pretty(&create_output_json(&frame_set))?
        );
    }

    Ok(())
}
