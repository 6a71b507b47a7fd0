use voxbrick_parts::ColorId;

use crate::error::GridError;
use crate::{OccupancyGrid, cell_count};

/// Per-column heights over an `x`/`z` plane, each column with one colour.
/// A height of zero leaves the column empty.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    width: usize,
    depth: usize,
    heights: Vec<usize>,
    colors: Vec<ColorId>,
}

impl HeightField {
    pub fn new(width: usize, depth: usize) -> Result<Self, GridError> {
        let n = cell_count(width, 1, depth)?;
        Ok(Self {
            width,
            depth,
            heights: vec![0; n],
            colors: vec![ColorId::default(); n],
        })
    }

    #[inline]
    fn idx(&self, x: usize, z: usize) -> usize {
        z * self.width + x
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn set(&mut self, x: usize, z: usize, height: usize, color: ColorId) {
        let i = self.idx(x, z);
        self.heights[i] = height;
        self.colors[i] = color;
    }

    #[inline]
    pub fn height(&self, x: usize, z: usize) -> usize {
        self.heights[self.idx(x, z)]
    }

    #[inline]
    pub fn color(&self, x: usize, z: usize) -> ColorId {
        self.colors[self.idx(x, z)]
    }

    pub fn max_height(&self) -> usize {
        self.heights.iter().copied().max().unwrap_or(0)
    }

    /// Fill every column from `y = 0` up to its height. The grid is at least
    /// one layer tall so an all-background field still yields a valid grid.
    pub fn to_grid(&self) -> Result<OccupancyGrid, GridError> {
        let ny = self.max_height().max(1);
        let grid = OccupancyGrid::from_fn(self.width, ny, self.depth, |x, y, z| {
            y < self.height(x, z)
        })?;
        let mut colors = vec![ColorId::default(); self.width * ny * self.depth];
        for y in 0..ny {
            for z in 0..self.depth {
                for x in 0..self.width {
                    colors[grid.idx(x, y, z)] = self.color(x, z);
                }
            }
        }
        grid.with_colors(colors)
    }
}
