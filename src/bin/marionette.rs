use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use marionette::{
    Animator, ChannelSet, CpuCanvas, Puppet, PuppetConfig, RecordingCanvas,
};

#[derive(Parser, Debug)]
#[command(name = "marionette", version)]
struct Cli {
    /// Log pose and rebuild details to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single posed frame as a PNG.
    Frame(FrameArgs),
    /// Render the animator's approach from one channel map to another as a PNG sequence.
    Tween(TweenArgs),
    /// Print every declared channel with its default value as JSON.
    Channels,
}

#[derive(Args, Debug)]
struct Surface {
    /// Output width in pixels.
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Puppet configuration JSON (colours, reference size, proportions).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    surface: Surface,

    /// Channel map JSON; missing channels take their defaults.
    #[arg(long)]
    channels: Option<PathBuf>,

    /// Horizontal offset of the draw box.
    #[arg(long, default_value_t = 0.0)]
    x: f64,

    /// Vertical offset of the draw box.
    #[arg(long, default_value_t = 0.0)]
    y: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Also write the recorded draw commands as JSON.
    #[arg(long)]
    dump_ops: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TweenArgs {
    #[command(flatten)]
    surface: Surface,

    /// Starting channel map JSON; the defaults when omitted.
    #[arg(long)]
    from: Option<PathBuf>,

    /// Target channel map JSON.
    #[arg(long)]
    to: PathBuf,

    /// Number of frames to render.
    #[arg(long, default_value_t = 12)]
    frames: u32,

    /// Directory receiving `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Tween(args) => cmd_tween(args),
        Command::Channels => cmd_channels(),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut puppet = load_puppet(&args.surface)?;
    let channels = args.channels.as_deref().map(read_channels).transpose()?;

    if let Some(path) = &args.dump_ops {
        let mut rec = RecordingCanvas::new();
        puppet.draw(
            &mut rec,
            f64::from(args.surface.width),
            f64::from(args.surface.height),
            args.x,
            args.y,
            channels.as_ref(),
        )?;
        create_parent(path)?;
        std::fs::write(path, rec.to_json_pretty()?)
            .with_context(|| format!("write draw commands '{}'", path.display()))?;
        eprintln!("wrote {} ({} commands)", path.display(), rec.commands().len());
    }

    let mut canvas = CpuCanvas::new(
        args.surface.width,
        args.surface.height,
        puppet.config().background,
    )?;
    puppet.draw(
        &mut canvas,
        f64::from(args.surface.width),
        f64::from(args.surface.height),
        args.x,
        args.y,
        channels.as_ref(),
    )?;
    write_png(canvas, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_tween(args: TweenArgs) -> anyhow::Result<()> {
    if args.frames == 0 {
        anyhow::bail!("--frames must be at least 1");
    }
    let mut puppet = load_puppet(&args.surface)?;
    let start = match &args.from {
        Some(path) => read_channels(path)?.with_defaults(),
        None => ChannelSet::defaults(),
    };
    let target = read_channels(&args.to)?;

    let animator = puppet.set_animator(Animator::new(start));
    animator.set_target(&target);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let (w, h) = (args.surface.width, args.surface.height);
    for i in 0..args.frames {
        puppet.animator().tween();
        tracing::debug!(frame = i, error = puppet.animator().max_error(), "tween step");

        let mut canvas = CpuCanvas::new(w, h, puppet.config().background)?;
        puppet.draw(&mut canvas, f64::from(w), f64::from(h), 0.0, 0.0, None)?;
        write_png(canvas, &args.out_dir.join(format!("frame_{i:04}.png")))?;
    }

    eprintln!(
        "wrote {} frames to {}",
        args.frames,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_channels() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&ChannelSet::defaults())?);
    Ok(())
}

fn load_puppet(surface: &Surface) -> anyhow::Result<Puppet> {
    let config = match &surface.config {
        Some(path) => PuppetConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => PuppetConfig::default(),
    };
    Ok(Puppet::new(config)?)
}

fn read_channels(path: &Path) -> anyhow::Result<ChannelSet> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read channels '{}'", path.display()))?;
    ChannelSet::from_json_str(&text)
        .with_context(|| format!("parse channels '{}'", path.display()))
}

fn create_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn write_png(canvas: CpuCanvas, out: &Path) -> anyhow::Result<()> {
    let mut frame = canvas.finish();
    frame.unpremultiply();
    create_parent(out)?;
    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))
}
