//! Occupancy grids and height fields consumed by the brick merger.
#![forbid(unsafe_code)]

mod axis;
mod error;
mod height;

pub use axis::Axis;
pub use error::GridError;
pub use height::HeightField;

use voxbrick_parts::ColorId;

/// Dense boolean voxel grid, optionally paired with one colour per cell.
/// Index `(x, y, z)`; `y` is height. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyGrid {
    nx: usize,
    ny: usize,
    nz: usize,
    cells: Vec<bool>,
    colors: Option<Vec<ColorId>>,
}

impl OccupancyGrid {
    /// All-empty grid.
    pub fn empty(nx: usize, ny: usize, nz: usize) -> Result<Self, GridError> {
        let n = cell_count(nx, ny, nz)?;
        Ok(Self {
            nx,
            ny,
            nz,
            cells: vec![false; n],
            colors: None,
        })
    }

    /// Build from a linear buffer laid out as [`OccupancyGrid::idx`] expects.
    pub fn from_cells(nx: usize, ny: usize, nz: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        let expected = cell_count(nx, ny, nz)?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            nx,
            ny,
            nz,
            cells,
            colors: None,
        })
    }

    pub fn from_fn(
        nx: usize,
        ny: usize,
        nz: usize,
        mut filled: impl FnMut(usize, usize, usize) -> bool,
    ) -> Result<Self, GridError> {
        let n = cell_count(nx, ny, nz)?;
        let mut cells = vec![false; n];
        for y in 0..ny {
            for z in 0..nz {
                for x in 0..nx {
                    cells[(y * nz + z) * nx + x] = filled(x, y, z);
                }
            }
        }
        Ok(Self {
            nx,
            ny,
            nz,
            cells,
            colors: None,
        })
    }

    /// Attach a per-cell colour buffer (same layout as the cells).
    pub fn with_colors(mut self, colors: Vec<ColorId>) -> Result<Self, GridError> {
        if colors.len() != self.cells.len() {
            return Err(GridError::ColorCountMismatch {
                expected: self.cells.len(),
                actual: colors.len(),
            });
        }
        self.colors = Some(colors);
        Ok(self)
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.nz + z) * self.nx + x
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    #[inline]
    pub fn extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.nx,
            Axis::Y => self.ny,
            Axis::Z => self.nz,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> bool {
        self.cells[self.idx(x, y, z)]
    }

    /// Colour of a cell, if the grid carries colours.
    #[inline]
    pub fn color_at(&self, x: usize, y: usize, z: usize) -> Option<ColorId> {
        self.colors.as_ref().map(|c| c[self.idx(x, y, z)])
    }

    #[inline]
    pub fn has_colors(&self) -> bool {
        self.colors.is_some()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    #[inline]
    pub fn is_all_empty(&self) -> bool {
        !self.cells.iter().any(|c| *c)
    }

    /// Filled cell coordinates in storage order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let (nx, nz) = (self.nx, self.nz);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(move |(i, _)| (i % nx, i / (nx * nz), (i / nx) % nz))
    }
}

/// Number of cells in an `nx * ny * nz` grid. Fails on a zero extent or a
/// count that does not fit in `usize`.
pub fn cell_count(nx: usize, ny: usize, nz: usize) -> Result<usize, GridError> {
    for (axis, n) in [(Axis::X, nx), (Axis::Y, ny), (Axis::Z, nz)] {
        if n == 0 {
            return Err(GridError::ZeroExtent(axis));
        }
    }
    nx.checked_mul(ny)
        .and_then(|n| n.checked_mul(nz))
        .ok_or(GridError::TooLarge { nx, ny, nz })
}
