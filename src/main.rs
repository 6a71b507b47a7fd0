use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Env;
use voxbrick_grid::Axis;

mod commands;
mod config;
mod picture;

use commands::OutputArgs;
use config::AppConfig;

/// Turn voxel grids and pictures into LDraw brick models
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    cmd: Command,

    /// TOML file with units, part tables, palette and defaults
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Merge a voxel grid file into 1xN bricks
    Pack {
        /// Grid file (`.toml`)
        input: PathBuf,

        #[clap(flatten)]
        out: OutputSettings,

        /// Axis to merge along (`x` or `z`)
        #[clap(long)]
        axis: Option<Axis>,

        /// Emit one 1x1 brick per filled cell
        #[clap(long)]
        unmerged: bool,
    },

    /// Flat mosaic of 1x1 plates from an image
    Mosaic {
        input: PathBuf,

        #[clap(flatten)]
        out: OutputSettings,

        #[clap(flatten)]
        picture: PictureSettings,
    },

    /// Stacked-plate relief from an image; brighter pixels stand taller
    Relief {
        input: PathBuf,

        #[clap(flatten)]
        out: OutputSettings,

        #[clap(flatten)]
        picture: PictureSettings,

        /// Tallest column, in plates above the base layer
        #[clap(long, default_value_t = 10)]
        max_height: usize,
    },

    /// Print part count and a top-down sketch of a model file
    Preview { input: PathBuf },
}

#[derive(Parser)]
struct OutputSettings {
    /// Name of a `.ldr` file to write
    #[clap(short, long, default_value = "output.ldr")]
    output: PathBuf,

    /// Build rows on the rayon thread pool
    #[clap(long)]
    parallel: bool,
}

#[derive(Parser)]
struct PictureSettings {
    /// Model width in studs
    #[clap(short, long, default_value_t = 32)]
    width: u32,

    /// Merge horizontal runs into 1xN plates
    #[clap(long)]
    merge: bool,
}

impl From<OutputSettings> for OutputArgs {
    fn from(s: OutputSettings) -> Self {
        OutputArgs {
            output: s.output,
            parallel: s.parallel,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let cfg = AppConfig::load(args.config.as_deref())?;

    match args.cmd {
        Command::Pack {
            input,
            out,
            axis,
            unmerged,
        } => commands::pack(&cfg, &input, &out.into(), axis, unmerged),
        Command::Mosaic {
            input,
            out,
            picture,
        } => commands::mosaic(&cfg, &input, &out.into(), picture.width, picture.merge),
        Command::Relief {
            input,
            out,
            picture,
            max_height,
        } => commands::relief(
            &cfg,
            &input,
            &out.into(),
            picture.width,
            max_height,
            picture.merge,
        ),
        Command::Preview { input } => commands::preview(&cfg, &input),
    }
}
