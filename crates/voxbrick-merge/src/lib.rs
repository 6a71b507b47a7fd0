//! Run merging, part-length selection, and placement mapping for voxel grids.
#![forbid(unsafe_code)]

mod build;
mod decompose;
mod mapper;
mod runs;

pub use build::{BuildOptions, BuildStats, PlacementBuild, build_placements, place_run};
pub use decompose::{Piece, Pieces, decompose};
pub use mapper::{Centering, CenteringOffset, PlacementMapper};
pub use runs::{GridMerger, Run, RowScan};

use voxbrick_geom::{Mat3, Vec3};
use voxbrick_parts::ColorId;

/// One emitted part instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub color: ColorId,
    pub position: Vec3,
    pub orientation: Mat3,
    pub part: String,
}
