//! Voxel grids described as stacked ASCII layers in TOML:
//!
//! ```toml
//! size = [3, 2, 2]      # nx, ny, nz
//! [legend]
//! b = 1                 # extra fill characters and their colours
//! [[layers]]            # y = 0 first
//! rows = ["###", "#b#"] # one string per z, one char per x
//! [[layers]]
//! rows = ["#..", "..."]
//! ```
//!
//! `.` and space are empty, `#` is filled with `color` (or the caller's
//! default). A grid carries colours only when `color` or a legend is given.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use voxbrick_grid::{OccupancyGrid, cell_count};
use voxbrick_parts::ColorId;

use crate::error::LdrawError;

#[derive(Clone, Debug, Deserialize)]
pub struct GridFile {
    pub size: [usize; 3],
    #[serde(default)]
    pub color: Option<ColorId>,
    #[serde(default)]
    pub legend: BTreeMap<String, ColorId>,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Layer {
    pub rows: Vec<String>,
}

impl GridFile {
    pub fn from_toml_str(s: &str) -> Result<Self, LdrawError> {
        Ok(toml::from_str(s)?)
    }

    fn legend_chars(&self) -> Result<BTreeMap<char, ColorId>, LdrawError> {
        let mut out = BTreeMap::new();
        for (key, color) in &self.legend {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c != '.' && c != ' ' => {
                    out.insert(c, *color);
                }
                _ => {
                    return Err(LdrawError::GridFile(format!(
                        "legend key '{}' must be one fill character",
                        key
                    )));
                }
            }
        }
        Ok(out)
    }

    /// Layer, row, and cell counts against `size`, before anything is allocated.
    fn check_shape(&self) -> Result<(), LdrawError> {
        let [nx, ny, nz] = self.size;
        if self.layers.len() != ny {
            return Err(LdrawError::GridFile(format!(
                "expected {} layers, found {}",
                ny,
                self.layers.len()
            )));
        }
        for (y, layer) in self.layers.iter().enumerate() {
            if layer.rows.len() != nz {
                return Err(LdrawError::GridFile(format!(
                    "layer {} has {} rows, expected {}",
                    y,
                    layer.rows.len(),
                    nz
                )));
            }
            for (z, row) in layer.rows.iter().enumerate() {
                let cells = row.chars().count();
                if cells != nx {
                    return Err(LdrawError::GridFile(format!(
                        "layer {} row {} has {} cells, expected {}",
                        y, z, cells, nx
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn into_grid(self, default_color: ColorId) -> Result<OccupancyGrid, LdrawError> {
        let [nx, ny, nz] = self.size;
        let n = cell_count(nx, ny, nz)?;
        self.check_shape()?;
        let legend = self.legend_chars()?;
        let fill = self.color.unwrap_or(default_color);
        let colored = self.color.is_some() || !legend.is_empty();

        let mut cells = vec![false; n];
        let mut colors = vec![fill; n];
        for (y, layer) in self.layers.iter().enumerate() {
            for (z, row) in layer.rows.iter().enumerate() {
                for (x, ch) in row.chars().enumerate() {
                    // OccupancyGrid::idx layout
                    let i = (y * nz + z) * nx + x;
                    match ch {
                        '.' | ' ' => {}
                        '#' => cells[i] = true,
                        other => match legend.get(&other) {
                            Some(c) => {
                                cells[i] = true;
                                colors[i] = *c;
                            }
                            None => {
                                return Err(LdrawError::GridFile(format!(
                                    "unknown cell character '{}' at layer {} row {}",
                                    other, y, z
                                )));
                            }
                        },
                    }
                }
            }
        }
        let mut grid = OccupancyGrid::from_cells(nx, ny, nz, cells)?;
        if colored {
            grid = grid.with_colors(colors)?;
        }
        log::debug!(
            "grid file: {}x{}x{} with {} filled cells",
            nx,
            ny,
            nz,
            grid.filled_count()
        );
        Ok(grid)
    }
}

/// Read and validate a grid file.
pub fn load_grid(path: impl AsRef<Path>, default_color: ColorId) -> Result<OccupancyGrid, LdrawError> {
    let s = fs::read_to_string(path)?;
    GridFile::from_toml_str(&s)?.into_grid(default_color)
}
