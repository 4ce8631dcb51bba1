use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use kenburns::{
    EngineConfig, KenBurnsEngine, RandomTransitionGenerator, Rect, ScaleMode, Size, TimestampMs,
};

/// Print the render commands a Ken Burns engine produces, one JSON object per line.
#[derive(Parser, Debug)]
#[command(name = "trace_frames")]
struct Args {
    /// Viewport width.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Viewport height.
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Image intrinsic width.
    #[arg(long, default_value_t = 4000.0)]
    image_width: f64,

    /// Image intrinsic height.
    #[arg(long, default_value_t = 3000.0)]
    image_height: f64,

    /// Number of frames to trace.
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Seed for the random generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Scale mode name (CENTER_CROP or FIT_CENTER).
    #[arg(long)]
    scale_mode: Option<String>,

    /// Engine config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            EngineConfig::from_json_str(&s)?
        }
        None => EngineConfig::default(),
    };
    let generator = RandomTransitionGenerator::seeded(config.generator.clone(), args.seed)?;
    let mut engine = KenBurnsEngine::with_generator(config, generator)?;
    if let Some(name) = &args.scale_mode {
        engine.set_scale_mode(name.parse::<ScaleMode>()?);
    }

    engine.on_viewport_resized(args.width, args.height);
    engine.on_image_changed(
        Size::new(args.image_width, args.image_height),
        Rect::new(0.0, 0.0, args.image_width, args.image_height),
    )?;

    let mut now = TimestampMs(0);
    for frame in 0..args.frames {
        let Some(cmd) = engine.advance_frame(now)? else {
            break;
        };
        let line = serde_json::json!({ "frame": frame, "t_ms": now.0, "command": cmd });
        println!("{line}");
        match cmd.schedule {
            kenburns::FrameSchedule::After { delay_ms } => now = now.shifted(delay_ms),
            kenburns::FrameSchedule::Idle => break,
        }
    }
    Ok(())
}
