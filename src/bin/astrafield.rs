use std::{fs, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use astrafield::{
    PLACEHOLDER_RGB, Raster, RenderParams, decode_photo, presets, render, validate_params,
};

#[derive(Parser, Debug)]
#[command(name = "astrafield", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a cover image as a PNG.
    Render(RenderArgs),
    /// Print the preset catalog as JSON.
    Presets,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Render parameters JSON; missing fields take their defaults.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Start from a named preset instead of a params file.
    #[arg(long, conflicts_with = "params")]
    preset: Option<String>,

    /// Base photo (center-cropped to square); omit for the solid placeholder.
    #[arg(long)]
    photo: Option<PathBuf>,

    /// Seed override for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Presets => cmd_presets(),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut params = load_params(&args)?;
    if let Some(seed) = args.seed {
        params.seed = Some(seed);
    }
    validate_params(&params)?;

    let base = match &args.photo {
        Some(path) => {
            let bytes =
                fs::read(path).with_context(|| format!("read photo '{}'", path.display()))?;
            decode_photo(&bytes, params.size)?
        }
        None => Raster::solid(params.size, PLACEHOLDER_RGB),
    };

    let png = render(&base, &params)?;

    if let Some(parent) = args.out.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    fs::write(&args.out, png).with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn load_params(args: &RenderArgs) -> anyhow::Result<RenderParams> {
    if let Some(name) = &args.preset {
        return presets()
            .get(name.as_str())
            .cloned()
            .with_context(|| format!("unknown preset '{name}'"));
    }
    if let Some(path) = &args.params {
        let text =
            fs::read_to_string(path).with_context(|| format!("read params '{}'", path.display()))?;
        return serde_json::from_str(&text).with_context(|| "parse params JSON");
    }
    Ok(RenderParams::default())
}

fn cmd_presets() -> anyhow::Result<()> {
    let catalog = presets();
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}
