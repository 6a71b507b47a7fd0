use voxbrick_geom::Vec3;

/// Spans wider than this many cells are scaled down to about 80 columns.
const MAX_CELLS: usize = 100;
const SCALED_CELLS: f32 = 80.0;

/// Top-down occupancy sketch of a model, viewed along -Y.
#[derive(Clone, Debug, PartialEq)]
pub struct TopDownView {
    pub width: usize,
    pub height: usize,
    /// Model cells per character; 1 unless the model was too large.
    pub scale: f32,
    cells: Vec<bool>,
}

impl TopDownView {
    /// Project points onto the X/Z plane with `grid` target units per cell.
    /// Non-finite points are ignored. Returns `None` when no points remain.
    pub fn from_points<I>(points: I, grid: f32) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let pts: Vec<(f32, f32)> = points
            .into_iter()
            .filter(|p| p.x.is_finite() && p.z.is_finite())
            .map(|p| (p.x, p.z))
            .collect();
        if pts.is_empty() {
            return None;
        }
        let (mut min_x, mut max_x) = (f32::INFINITY, f32::NEG_INFINITY);
        let (mut min_z, mut max_z) = (f32::INFINITY, f32::NEG_INFINITY);
        for &(x, z) in &pts {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_z = min_z.min(z);
            max_z = max_z.max(z);
        }
        // Float-to-int casts saturate; spans past usize::MAX clamp there.
        let span_w = (((max_x - min_x) / grid) as usize).saturating_add(1);
        let span_h = (((max_z - min_z) / grid) as usize).saturating_add(1);
        let scale = if span_w > MAX_CELLS || span_h > MAX_CELLS {
            let s = span_w.max(span_h) as f32 / SCALED_CELLS;
            log::info!("model spans {}x{} cells; scaling preview by {:.2}", span_w, span_h, s);
            s
        } else {
            1.0
        };
        let width = (span_w as f32 / scale) as usize + 1;
        let height = (span_h as f32 / scale) as usize + 1;
        let mut cells = vec![false; width * height];
        for (x, z) in pts {
            let ix = ((x - min_x) / grid / scale) as usize;
            let iz = ((z - min_z) / grid / scale) as usize;
            if ix < width && iz < height {
                cells[iz * width + ix] = true;
            }
        }
        Some(Self {
            width,
            height,
            scale,
            cells,
        })
    }

    #[inline]
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        self.cells[row * self.width + col]
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// Rows of the sketch, trailing blanks trimmed.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| {
                let s: String = row.iter().map(|c| if *c { '█' } else { ' ' }).collect();
                s.trim_end().to_string()
            })
            .collect()
    }
}

impl std::fmt::Display for TopDownView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
