use serde::Deserialize;
use voxbrick_geom::{Mat3, Vec3};
use voxbrick_grid::{Axis, OccupancyGrid};
use voxbrick_parts::{ColorId, ConfigError, Units};

use crate::Placement;
use crate::decompose::Piece;
use crate::runs::Run;

/// How emitted positions relate to the grid's footprint.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Centering {
    /// Shift so the footprint is centred on the origin in X and Z.
    #[default]
    Extents,
    /// Cell (0, _, 0) sits at the origin.
    Origin,
}

/// Per-grid offsets subtracted along X and Z.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CenteringOffset {
    pub x: f32,
    pub z: f32,
}

impl CenteringOffset {
    pub fn for_grid(grid: &OccupancyGrid, units: Units, centering: Centering) -> Self {
        match centering {
            Centering::Extents => {
                let (nx, _, nz) = grid.dims();
                Self {
                    x: nx as f32 * units.edge() / 2.0,
                    z: nz as f32 * units.edge() / 2.0,
                }
            }
            Centering::Origin => Self::default(),
        }
    }

    #[inline]
    fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Z => self.z,
            Axis::Y => 0.0,
        }
    }
}

/// Turns (run, piece) pairs into absolute part origins.
///
/// A 1x1 part's origin is its own centre; longer parts are centred over their
/// footprint, then shifted back half a cell onto the 1x1 convention. Height
/// grows towards negative Y.
#[derive(Copy, Clone, Debug)]
pub struct PlacementMapper {
    axis: Axis,
    units: Units,
    center: CenteringOffset,
}

impl PlacementMapper {
    /// Only in-plane axes can be merged; a part cannot span several layers.
    pub fn new(axis: Axis, units: Units, center: CenteringOffset) -> Result<Self, ConfigError> {
        if axis == Axis::Y {
            return Err(ConfigError::UnmappableAxis(axis.name()));
        }
        Ok(Self {
            axis,
            units,
            center,
        })
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn position(&self, run: &Run, piece: &Piece<'_>) -> Vec3 {
        debug_assert_eq!(run.axis, self.axis);
        let edge = self.units.edge();
        let along = (run.start + piece.offset) as f32 * edge
            + (piece.spec.length as f32 * edge / 2.0)
            - (edge / 2.0)
            - self.center.along(self.axis);
        let (x, y, z) = run.cell(piece.offset);
        // 0.0 - h keeps the base layer at +0 rather than -0.
        let height = 0.0 - y as f32 * self.units.height();
        match self.axis {
            Axis::Z => Vec3::new(self.cross(x, Axis::X), height, along),
            _ => Vec3::new(along, height, self.cross(z, Axis::Z)),
        }
    }

    #[inline]
    fn cross(&self, index: usize, axis: Axis) -> f32 {
        index as f32 * self.units.edge() - self.center.along(axis)
    }

    pub fn place(&self, run: &Run, piece: &Piece<'_>, color: ColorId) -> Placement {
        Placement {
            color,
            position: self.position(run, piece),
            orientation: Mat3::IDENTITY,
            part: piece.spec.part.clone(),
        }
    }
}
