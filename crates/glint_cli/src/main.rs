//! Glint command line renderer.
//!
//! Renders the built-in demo scene (or a JSON scene file) to a PPM or
//! PNG image, optionally looping frames through the adaptive quality
//! controller.

mod demo;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use glint_core::{Projection, Rgb, Scene};
use glint_renderer::{render, AdaptiveQuality, RenderConfig, SkyGradient, BYTES_PER_PIXEL};

/// Log levels accepted on the command line.
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments.
#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "A recursive ray tracer")]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value = "640")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "480")]
    height: u32,

    /// Number of parallel render bands
    #[arg(short = 'j', long, default_value = "8")]
    workers: usize,

    /// Maximum reflection bounces per ray
    #[arg(short, long, default_value = "10")]
    bounces: u32,

    /// Use tangent-based perspective projection instead of angular
    #[arg(long)]
    perspective: bool,

    /// Replace the flat background with a sky gradient
    #[arg(long)]
    sky: bool,

    /// Attenuate light contributions by inverse-square distance
    #[arg(long)]
    falloff: bool,

    /// Load the scene from a JSON file instead of the built-in demo
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Render this many frames, adapting bounce depth to the frame budget
    #[arg(long, default_value = "1")]
    frames: u32,

    /// Per-frame time budget in milliseconds for adaptive quality
    #[arg(long, default_value = "33")]
    frame_budget_ms: u64,

    /// Output file path (.ppm or .png)
    #[arg(short, long, default_value = "output.ppm")]
    output: PathBuf,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.clone().into())
        .init();

    let mut scene = match &args.scene {
        Some(path) => load_scene(path)?,
        None => demo::scene(),
    };
    scene.validate().context("invalid scene")?;
    scene.preprocess();
    log::info!(
        "scene: {} primitives, {} lights",
        scene.primitives.len(),
        scene.lights.len()
    );

    let projection = if args.perspective {
        Projection::Perspective
    } else {
        Projection::Angular
    };
    let camera = demo::camera(args.width, args.height).with_projection(projection);

    let mut config = RenderConfig {
        bounce_limit: args.bounces,
        workers: args.workers,
        sky: args.sky.then_some(SkyGradient {
            horizon: Rgb::new(190, 215, 235),
            zenith: Rgb::new(40, 90, 180),
        }),
        inverse_square_falloff: args.falloff,
    };

    let mut framebuffer =
        vec![0u8; args.width as usize * args.height as usize * BYTES_PER_PIXEL];

    if args.frames > 1 {
        let budget = Duration::from_millis(args.frame_budget_ms);
        let mut quality = AdaptiveQuality::new(1, 1, args.bounces.max(1), budget);

        for frame in 0..args.frames {
            config.bounce_limit = quality.depth();
            let start = Instant::now();
            render(
                &mut framebuffer,
                args.width,
                args.height,
                &scene,
                &camera,
                &config,
            );
            let elapsed = start.elapsed();
            log::info!(
                "frame {frame}: {elapsed:?} at bounce depth {}",
                config.bounce_limit
            );
            quality.observe(elapsed);
        }
    } else {
        let start = Instant::now();
        render(
            &mut framebuffer,
            args.width,
            args.height,
            &scene,
            &camera,
            &config,
        );
        log::info!("rendered in {:?}", start.elapsed());
    }

    output::save(&args.output, &framebuffer, args.width, args.height)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    log::info!("saved {}", args.output.display());

    Ok(())
}

/// Load a scene from a JSON file.
fn load_scene(path: &Path) -> Result<Scene> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let scene = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(scene)
}
