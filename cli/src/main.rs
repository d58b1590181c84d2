//! obj-slicer - load an OBJ mesh and hand it to a renderer.
//!
//! Usage:
//!   obj-slicer model.obj              Describe the mesh on stdout
//!   obj-slicer model.obj --strict     Fail if the file does not exist
//!   RUST_LOG=debug obj-slicer model.obj

use anyhow::{Context, Result};
use clap::Parser;
use obj_slicer::config::LoadOptions;
use obj_slicer::mesh::{load_obj_with, LoadReporter, LogReporter, SilentReporter};
use obj_slicer::render::{render_mesh, Representation, RenderStyle, SummaryRenderer};
use std::io;
use std::path::PathBuf;

/// Load an OBJ mesh and describe it
#[derive(Parser, Debug)]
#[command(name = "obj-slicer")]
#[command(version, about, long_about = None)]
struct Args {
    /// OBJ file to load
    path: PathBuf,

    /// Fail instead of loading an empty mesh when the file is missing
    #[arg(long)]
    strict: bool,

    /// Suppress load progress notices
    #[arg(short, long)]
    quiet: bool,

    /// Surface representation handed to the renderer
    #[arg(long, value_enum, default_value = "mesh")]
    representation: RepresentationArg,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum RepresentationArg {
    Surface,
    Wireframe,
    Mesh,
    Points,
}

impl From<RepresentationArg> for Representation {
    fn from(arg: RepresentationArg) -> Self {
        match arg {
            RepresentationArg::Surface => Representation::Surface,
            RepresentationArg::Wireframe => Representation::Wireframe,
            RepresentationArg::Mesh => Representation::Mesh,
            RepresentationArg::Points => Representation::Points,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let options = if args.strict {
        LoadOptions::strict()
    } else {
        LoadOptions::default()
    };

    let reporter: &dyn LoadReporter = if args.quiet {
        &SilentReporter
    } else {
        &LogReporter
    };
    let mesh = load_obj_with(&args.path, &options, reporter)
        .with_context(|| format!("failed to load {}", args.path.display()))?;

    let style = RenderStyle::default().representation(args.representation.into());
    let mut renderer = SummaryRenderer::new(io::stdout().lock());
    render_mesh(&mesh, &mut renderer, &style).context("failed to render mesh")?;

    Ok(())
}
