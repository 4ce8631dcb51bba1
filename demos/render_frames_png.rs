use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use kenburns::{
    EngineConfig, KenBurnsEngine, Point, RandomTransitionGenerator, Rect, Size, TimestampMs,
};

/// Render a Ken Burns pass over a picture into numbered PNG frames.
#[derive(Parser, Debug)]
#[command(name = "render_frames_png")]
struct Args {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Output frame width.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Output frame height.
    #[arg(long, default_value_t = 360)]
    height: u32,

    /// Number of frames to write.
    #[arg(long, default_value_t = 90)]
    frames: u32,

    /// Time step between written frames.
    #[arg(long, default_value_t = 33)]
    step_ms: u64,

    /// Seed for the random generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let src = image::open(&args.in_path)
        .with_context(|| format!("open {}", args.in_path.display()))?
        .to_rgba8();
    let (iw, ih) = (f64::from(src.width()), f64::from(src.height()));
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create {}", args.out.display()))?;

    let config = EngineConfig::default();
    let generator = RandomTransitionGenerator::seeded(config.generator.clone(), args.seed)?;
    let mut engine = KenBurnsEngine::with_generator(config, generator)?;
    engine.on_viewport_resized(f64::from(args.width), f64::from(args.height));
    engine.on_image_changed(Size::new(iw, ih), Rect::new(0.0, 0.0, iw, ih))?;

    let max_x = src.width().saturating_sub(1);
    let max_y = src.height().saturating_sub(1);
    for frame in 0..args.frames {
        let now = TimestampMs(u64::from(frame) * args.step_ms);
        let Some(cmd) = engine.advance_frame(now)? else {
            anyhow::bail!("engine has nothing to render");
        };
        // Pull each output pixel back into the source image (nearest neighbour).
        let inv = cmd.transform.inverse();
        let out = image::RgbaImage::from_fn(args.width, args.height, |x, y| {
            let p = inv * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let sx = (p.x.floor().max(0.0) as u32).min(max_x);
            let sy = (p.y.floor().max(0.0) as u32).min(max_y);
            *src.get_pixel(sx, sy)
        });
        let path = args.out.join(format!("frame_{frame:05}.png"));
        out.save(&path)
            .with_context(|| format!("write {}", path.display()))?;
    }
    println!("wrote {} frames to {}", args.frames, args.out.display());
    Ok(())
}
