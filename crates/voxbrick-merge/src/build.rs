use std::collections::BTreeMap;
use std::time::Instant;

use voxbrick_geom::Aabb;
use voxbrick_grid::{Axis, OccupancyGrid};
use voxbrick_parts::{ColorId, ConfigError, PartCatalog, Units};

use crate::Placement;
use crate::decompose::decompose;
use crate::mapper::{Centering, CenteringOffset, PlacementMapper};
use crate::runs::{GridMerger, Run};

#[derive(Clone, Debug)]
pub struct BuildOptions {
    pub merge_axis: Axis,
    pub units: Units,
    pub centering: Centering,
    /// Colour for runs from grids without a colour buffer.
    pub default_color: ColorId,
    pub parallel: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            merge_axis: Axis::X,
            units: Units::bricks(),
            centering: Centering::Extents,
            default_color: ColorId::RED,
            parallel: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct BuildStats {
    pub rows: usize,
    pub runs: usize,
    pub cells: usize,
    pub placements: usize,
    /// Placement count keyed by part length.
    pub by_length: BTreeMap<usize, usize>,
    pub elapsed_ms: u32,
}

impl BuildStats {
    fn absorb(&mut self, other: BuildStats) {
        self.rows += other.rows;
        self.runs += other.runs;
        self.cells += other.cells;
        self.placements += other.placements;
        for (len, n) in other.by_length {
            *self.by_length.entry(len).or_insert(0) += n;
        }
    }
}

pub struct PlacementBuild {
    pub placements: Vec<Placement>,
    pub stats: BuildStats,
}

impl PlacementBuild {
    /// Bounds of all placement origins.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.placements.iter().map(|p| p.position))
    }
}

/// Placements for one run, left to right along the merge axis.
pub fn place_run<'c>(
    run: Run,
    catalog: &'c PartCatalog,
    mapper: PlacementMapper,
    default_color: ColorId,
) -> impl Iterator<Item = Placement> + 'c {
    let color = run.color.unwrap_or(default_color);
    decompose(run.len, catalog).map(move |piece| mapper.place(&run, &piece, color))
}

/// Scan `grid`, decompose every run with `catalog`, and map each piece to an
/// absolute placement. Output is in row order whether or not rows are built
/// in parallel.
pub fn build_placements(
    grid: &OccupancyGrid,
    catalog: &PartCatalog,
    opts: &BuildOptions,
) -> Result<PlacementBuild, ConfigError> {
    let t0 = Instant::now();
    let center = CenteringOffset::for_grid(grid, opts.units, opts.centering);
    let mapper = PlacementMapper::new(opts.merge_axis, opts.units, center)?;
    let merger = GridMerger::new(grid, opts.merge_axis);

    let mut placements = Vec::new();
    let mut stats = BuildStats::default();
    if opts.parallel {
        build_rows_parallel(&merger, catalog, mapper, opts.default_color, &mut placements, &mut stats);
    } else {
        for fixed in merger.rows() {
            build_row(&merger, fixed, catalog, mapper, opts.default_color, &mut placements, &mut stats);
        }
    }
    stats.elapsed_ms = t0.elapsed().as_millis() as u32;
    log_build_perf(grid, opts.merge_axis, &stats);
    Ok(PlacementBuild { placements, stats })
}

fn build_row(
    merger: &GridMerger<'_>,
    fixed: [usize; 2],
    catalog: &PartCatalog,
    mapper: PlacementMapper,
    default_color: ColorId,
    out: &mut Vec<Placement>,
    stats: &mut BuildStats,
) {
    stats.rows += 1;
    for run in merger.row(fixed) {
        stats.runs += 1;
        stats.cells += run.len;
        let color = run.color.unwrap_or(default_color);
        for piece in decompose(run.len, catalog) {
            *stats.by_length.entry(piece.spec.length).or_insert(0) += 1;
            stats.placements += 1;
            out.push(mapper.place(&run, &piece, color));
        }
    }
}

#[cfg(feature = "parallel")]
fn build_rows_parallel(
    merger: &GridMerger<'_>,
    catalog: &PartCatalog,
    mapper: PlacementMapper,
    default_color: ColorId,
    out: &mut Vec<Placement>,
    stats: &mut BuildStats,
) {
    use rayon::prelude::*;

    let rows: Vec<[usize; 2]> = merger.rows().collect();
    let built: Vec<(Vec<Placement>, BuildStats)> = rows
        .par_iter()
        .map(|&fixed| {
            let mut row_out = Vec::new();
            let mut row_stats = BuildStats::default();
            build_row(merger, fixed, catalog, mapper, default_color, &mut row_out, &mut row_stats);
            (row_out, row_stats)
        })
        .collect();
    for (row_out, row_stats) in built {
        out.extend(row_out);
        stats.absorb(row_stats);
    }
}

#[cfg(not(feature = "parallel"))]
fn build_rows_parallel(
    merger: &GridMerger<'_>,
    catalog: &PartCatalog,
    mapper: PlacementMapper,
    default_color: ColorId,
    out: &mut Vec<Placement>,
    stats: &mut BuildStats,
) {
    log::warn!("built without the `parallel` feature; scanning rows sequentially");
    for fixed in merger.rows() {
        build_row(merger, fixed, catalog, mapper, default_color, out, stats);
    }
}

fn log_build_perf(grid: &OccupancyGrid, axis: Axis, stats: &BuildStats) {
    let (nx, ny, nz) = grid.dims();
    log::info!(
        target: "perf",
        "ms build={} rows={} runs={} cells={} placements={} axis={} dims={}x{}x{}",
        stats.elapsed_ms,
        stats.rows,
        stats.runs,
        stats.cells,
        stats.placements,
        axis,
        nx,
        ny,
        nz
    );
    log::debug!("placements by length: {:?}", stats.by_length);
}
