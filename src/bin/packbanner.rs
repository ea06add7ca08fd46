use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "packbanner", version, about = "Render the circle-packing banner animation")]
struct Cli {
    /// Log at DEBUG level.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence.
    Frames(FramesArgs),
    /// Render an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct BannerArgs {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// JSON config overriding the built-in banner constants.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON control script; defaults to a single `play` at 0 ms.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Output frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Backend to use.
    #[arg(long, value_enum, default_value_t = BackendChoice::Cpu)]
    backend: BackendChoice,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    banner: BannerArgs,

    /// Timestamp to render, in milliseconds.
    #[arg(long, default_value_t = 0.0)]
    at_ms: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    banner: BannerArgs,

    /// Length to render in milliseconds; defaults to when the script settles.
    #[arg(long)]
    duration_ms: Option<f64>,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// File name prefix for each frame.
    #[arg(long, default_value = "frame_")]
    prefix: String,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    banner: BannerArgs,

    /// Length to render in milliseconds; defaults to when the script settles.
    #[arg(long)]
    duration_ms: Option<f64>,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendChoice {
    Cpu,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn make_backend(choice: BackendChoice) -> Box<dyn packbanner::RenderBackend> {
    let kind = match choice {
        BackendChoice::Cpu => packbanner::BackendKind::Cpu,
    };
    packbanner::create_backend(kind)
}

fn open_session(args: &BannerArgs) -> anyhow::Result<packbanner::RenderSession> {
    let config = match &args.config {
        Some(path) => packbanner::BannerConfig::from_path(path)?,
        None => packbanner::BannerConfig::default(),
    };
    let script = match &args.script {
        Some(path) => packbanner::Script::from_path(path)?,
        None => packbanner::Script::autoplay(),
    };
    let fps = packbanner::Fps::new(args.fps, 1)?;
    let banner = packbanner::BannerAnimation::mount(config, args.width)
        .context("mount banner")?;
    Ok(packbanner::RenderSession::new(banner, script, fps))
}

fn frame_range(
    session: &packbanner::RenderSession,
    duration_ms: Option<f64>,
) -> anyhow::Result<packbanner::FrameRange> {
    let duration_ms = duration_ms.unwrap_or_else(|| session.settle_ms());
    if !duration_ms.is_finite() || duration_ms < 0.0 {
        anyhow::bail!("duration must be finite and >= 0 (got {duration_ms})");
    }
    // Include the frame on which the last transition lands.
    let end = session.fps().ms_to_frames_ceil(duration_ms) + 1;
    Ok(packbanner::FrameRange::new(
        packbanner::FrameIndex(0),
        packbanner::FrameIndex(end),
    )?)
}

fn background(session: &packbanner::RenderSession) -> [u8; 3] {
    let [r, g, b, _] = session.banner().config().palette.background.to_array();
    [r, g, b]
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    if !args.at_ms.is_finite() || args.at_ms < 0.0 {
        anyhow::bail!("--at-ms must be finite and >= 0 (got {})", args.at_ms);
    }
    let mut session = open_session(&args.banner)?;
    let mut backend = make_backend(args.banner.backend);

    session.advance_to(args.at_ms)?;
    let frame = session.banner().render(backend.as_mut())?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    packbanner::write_png(&args.out, &frame, background(&session), &mut Vec::new())
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let mut session = open_session(&args.banner)?;
    let range = frame_range(&session, args.duration_ms)?;
    let mut backend = make_backend(args.banner.backend);
    let mut sink =
        packbanner::PngSequenceSink::new(&args.out_dir, args.prefix, background(&session));

    let stats = session.render_range(range, backend.as_mut(), &mut sink)?;
    eprintln!("wrote {} frames to {}", stats.frames, args.out_dir.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut session = open_session(&args.banner)?;
    let range = frame_range(&session, args.duration_ms)?;
    let mut backend = make_backend(args.banner.backend);

    let mut opts = packbanner::FfmpegSinkOpts::new(&args.out);
    opts.bg = background(&session);
    let mut sink = packbanner::FfmpegSink::new(opts);

    session.render_range(range, backend.as_mut(), &mut sink)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
