use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "flowlines", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame of the artwork as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Deterministic seed for guide-line placement.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Elapsed time in seconds fed to the noise field's time axis.
    #[arg(long, default_value_t = 0.0)]
    elapsed: f64,

    /// Parameter-table JSON (a saved control-panel preset). Defaults to the
    /// built-in panel values.
    #[arg(long)]
    params: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let params = match &args.params {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("open preset '{}'", path.display()))?;
            serde_json::from_reader(BufReader::new(f)).with_context(|| "parse preset JSON")?
        }
        None => flowlines::ParameterSet::panel_defaults(),
    };

    let sketch = flowlines::Sketch::seed(flowlines::RegionLayout::banner(), params, args.seed);
    let pixels = sketch.render(args.elapsed)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &pixels.data,
        pixels.width,
        pixels.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
