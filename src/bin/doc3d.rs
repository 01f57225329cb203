use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "doc3d", version, about = "Render the 3D-Doc demo screen offline")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render the first frames as a numbered PNG sequence.
    Frames(FramesArgs),
    /// Render an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Directory holding the demo images (and optionally `music.mp3`).
    #[arg(long)]
    assets: PathBuf,

    /// Demo settings JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start directly on the main screen.
    #[arg(long, default_value_t = false)]
    skip_intro: bool,

    /// Drive the animation from the wall clock instead of the frame index.
    #[arg(long, default_value_t = false)]
    wall_clock: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Number of frames to render from the start.
    #[arg(long)]
    count: u64,

    /// Output directory for `frame_NNNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Video length in seconds.
    #[arg(long)]
    seconds: f64,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Leave the soundtrack out even when `music.mp3` is present.
    #[arg(long, default_value_t = false)]
    no_audio: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_engine(common: &CommonArgs) -> anyhow::Result<doc3d::Engine> {
    let mut cfg = match &common.config {
        Some(path) => doc3d::DemoConfig::from_path(path)?,
        None => doc3d::DemoConfig::default(),
    };
    if common.skip_intro {
        cfg.skip_intro = true;
    }
    if common.wall_clock {
        cfg.clock = doc3d::ClockMode::WallClock;
    }

    let source = doc3d::DirAssetSource::new(&common.assets);
    let assets = doc3d::DemoAssets::load(&source)
        .with_context(|| format!("load assets from '{}'", common.assets.display()))?;
    Ok(doc3d::Engine::new(cfg, assets)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut engine = load_engine(&args.common)?;
    let frame = doc3d::render_frame(&mut engine, doc3d::FrameIndex(args.frame))?;
    doc3d::write_png(&args.out, &frame, [0, 0, 0, 255])
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let mut engine = load_engine(&args.common)?;
    let range = doc3d::FrameRange::new(doc3d::FrameIndex(0), doc3d::FrameIndex(args.count))?;
    let mut sink = doc3d::PngSequenceSink::new(&args.out_dir);
    let stats = doc3d::render_range(&mut engine, range, &mut sink, None)?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames_rendered,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    if !args.seconds.is_finite() || args.seconds <= 0.0 {
        anyhow::bail!("--seconds must be a positive number");
    }
    let mut engine = load_engine(&args.common)?;

    let frames = engine.config().fps.secs_to_frames_floor(args.seconds).max(1);
    let range = doc3d::FrameRange::new(doc3d::FrameIndex(0), doc3d::FrameIndex(frames))?;
    let audio = if args.no_audio {
        None
    } else {
        engine
            .assets()
            .music
            .clone()
            .map(|path| doc3d::AudioInputConfig { path, looped: true })
    };

    let stats = doc3d::render_to_mp4(&mut engine, &args.out, range, audio)?;
    tracing::info!(?stats, "render finished");

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
