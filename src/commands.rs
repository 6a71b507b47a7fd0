use std::error::Error;
use std::path::{Path, PathBuf};

use voxbrick_grid::{Axis, HeightField, OccupancyGrid};
use voxbrick_ldraw::{TopDownView, load_grid, read_ldr, write_model};
use voxbrick_merge::{BuildOptions, BuildStats, Centering, PlacementBuild, build_placements};
use voxbrick_parts::PartCatalog;

use crate::config::AppConfig;
use crate::picture;

/// Flags shared by every subcommand that writes a model.
#[derive(Clone, Debug)]
pub struct OutputArgs {
    pub output: PathBuf,
    pub parallel: bool,
}

pub fn pack(
    cfg: &AppConfig,
    input: &Path,
    out: &OutputArgs,
    axis: Option<Axis>,
    unmerged: bool,
) -> Result<(), Box<dyn Error>> {
    let grid = load_grid(input, cfg.default_color)?;
    let (nx, ny, nz) = grid.dims();
    log::info!("loaded {}x{}x{} grid, {} filled cells", nx, ny, nz, grid.filled_count());

    let catalog = cfg.parts.brick_catalog()?;
    let catalog = if unmerged {
        PartCatalog::unmerged(catalog.unit().part.clone())
    } else {
        catalog
    };
    let opts = BuildOptions {
        merge_axis: axis.unwrap_or(cfg.merge_axis),
        units: cfg.parts.brick_units()?,
        centering: cfg.centering,
        default_color: cfg.default_color,
        parallel: out.parallel || cfg.parallel,
    };
    let title = format!("Optimized Voxel Model from {}", input.display());
    emit(&grid, &catalog, &opts, &title, &out.output)
}

pub fn mosaic(
    cfg: &AppConfig,
    input: &Path,
    out: &OutputArgs,
    width: u32,
    merge: bool,
) -> Result<(), Box<dyn Error>> {
    let img = picture::resize_to_studs(&picture::load_rgb(input)?, width)?;
    let field = picture::mosaic_field(&img, &cfg.parts.palette()?)?;
    let title = format!("Mosaic from {}", input.display());
    emit_field(cfg, &field, out, merge, &title)
}

pub fn relief(
    cfg: &AppConfig,
    input: &Path,
    out: &OutputArgs,
    width: u32,
    max_height: usize,
    merge: bool,
) -> Result<(), Box<dyn Error>> {
    let img = picture::resize_to_studs(&picture::load_rgb(input)?, width)?;
    let field = picture::relief_field(
        &img,
        &cfg.parts.palette()?,
        max_height,
        cfg.background_threshold,
    )?;
    let title = format!("Relief from {}", input.display());
    emit_field(cfg, &field, out, merge, &title)
}

pub fn preview(cfg: &AppConfig, input: &Path) -> Result<(), Box<dyn Error>> {
    let parts = read_ldr(input)?;
    println!("{}: {} parts", input.display(), parts.len());
    let edge = cfg.parts.brick_units()?.edge();
    match TopDownView::from_points(parts.iter().map(|p| p.position), edge) {
        Some(view) => {
            if view.scale > 1.0 {
                println!("(scaled 1:{:.2})", view.scale);
            }
            print!("{}", view);
        }
        None => println!("(empty model)"),
    }
    Ok(())
}

/// Height fields are laid out in plates from the model origin, merged along X.
fn emit_field(
    cfg: &AppConfig,
    field: &HeightField,
    out: &OutputArgs,
    merge: bool,
    title: &str,
) -> Result<(), Box<dyn Error>> {
    let grid = field.to_grid()?;
    let plates = cfg.parts.plate_catalog()?;
    let catalog = if merge {
        plates
    } else {
        PartCatalog::unmerged(plates.unit().part.clone())
    };
    let opts = BuildOptions {
        merge_axis: Axis::X,
        units: cfg.parts.plate_units()?,
        centering: Centering::Origin,
        default_color: cfg.default_color,
        parallel: out.parallel || cfg.parallel,
    };
    emit(&grid, &catalog, &opts, title, &out.output)
}

fn emit(
    grid: &OccupancyGrid,
    catalog: &PartCatalog,
    opts: &BuildOptions,
    title: &str,
    output: &Path,
) -> Result<(), Box<dyn Error>> {
    let build = build_placements(grid, catalog, opts)?;
    if build.placements.is_empty() {
        log::warn!("grid has no filled cells; writing an empty model");
    }
    let written = write_model(output, title, &build.placements)?;
    print_summary(&build, catalog, written, output);
    Ok(())
}

fn print_summary(build: &PlacementBuild, catalog: &PartCatalog, written: usize, output: &Path) {
    let BuildStats {
        rows,
        runs,
        cells,
        by_length,
        elapsed_ms,
        ..
    } = &build.stats;
    println!(
        "{} cells in {} runs across {} rows -> {} parts ({} ms)",
        cells, runs, rows, written, elapsed_ms
    );
    for (len, n) in by_length.iter().rev() {
        let part = catalog.by_length(*len).map(|s| s.part.as_str()).unwrap_or("?");
        println!("  1x{:<2} {:<10} {}", len, part, n);
    }
    if let Some(b) = build.bounds() {
        let e = b.extents();
        println!("  extents {:.0} x {:.0} x {:.0}", e.x, e.y, e.z);
    }
    println!("wrote {}", output.display());
}
