use voxbrick_grid::{Axis, OccupancyGrid};
use voxbrick_parts::ColorId;

/// Maximal span of filled cells along the merge axis within one row.
/// Cells of one run share a colour when the grid carries colours.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Run {
    pub axis: Axis,
    pub start: usize,
    pub len: usize,
    /// Indices along `axis.others()`, outer first.
    pub fixed: [usize; 2],
    pub color: Option<ColorId>,
}

impl Run {
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Grid coordinates of the cell `offset` steps into the run.
    #[inline]
    pub fn cell(&self, offset: usize) -> (usize, usize, usize) {
        self.axis.compose(self.start + offset, self.fixed)
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        (0..self.len).map(move |o| self.cell(o))
    }
}

/// Scans a grid row by row along one axis. Borrowing the grid read-only makes
/// every scan restartable and identical.
#[derive(Clone, Copy, Debug)]
pub struct GridMerger<'a> {
    grid: &'a OccupancyGrid,
    axis: Axis,
}

impl<'a> GridMerger<'a> {
    pub fn new(grid: &'a OccupancyGrid, axis: Axis) -> Self {
        Self { grid, axis }
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Row keys `[outer, inner]` in scan order.
    pub fn rows(&self) -> impl Iterator<Item = [usize; 2]> + use<'a> {
        let (outer, inner) = self.axis.others();
        let na = self.grid.extent(outer);
        let nb = self.grid.extent(inner);
        (0..na).flat_map(move |a| (0..nb).map(move |b| [a, b]))
    }

    /// Runs of one row, left to right.
    pub fn row(&self, fixed: [usize; 2]) -> RowScan<'a> {
        RowScan::new(self.grid, self.axis, fixed)
    }

    /// All runs: outer axis, then inner axis, then along the merge axis.
    pub fn runs(&self) -> impl Iterator<Item = Run> + use<'a> {
        let grid = self.grid;
        let axis = self.axis;
        self.rows().flat_map(move |fixed| RowScan::new(grid, axis, fixed))
    }
}

/// Lazy scan of a single row.
#[derive(Clone, Debug)]
pub struct RowScan<'a> {
    grid: &'a OccupancyGrid,
    axis: Axis,
    fixed: [usize; 2],
    pos: usize,
    open: Option<(usize, Option<ColorId>)>,
}

impl<'a> RowScan<'a> {
    fn new(grid: &'a OccupancyGrid, axis: Axis, fixed: [usize; 2]) -> Self {
        Self {
            grid,
            axis,
            fixed,
            pos: 0,
            open: None,
        }
    }

    /// `None` for an empty cell, otherwise the cell's colour (if any).
    #[inline]
    fn sample(&self, i: usize) -> Option<Option<ColorId>> {
        let (x, y, z) = self.axis.compose(i, self.fixed);
        if self.grid.get(x, y, z) {
            Some(self.grid.color_at(x, y, z))
        } else {
            None
        }
    }

    #[inline]
    fn close(&self, start: usize, end: usize, color: Option<ColorId>) -> Run {
        Run {
            axis: self.axis,
            start,
            len: end - start,
            fixed: self.fixed,
            color,
        }
    }
}

impl Iterator for RowScan<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let n = self.grid.extent(self.axis);
        while self.pos < n {
            let i = self.pos;
            self.pos += 1;
            match (self.open, self.sample(i)) {
                (None, Some(color)) => self.open = Some((i, color)),
                (Some((start, color)), None) => {
                    self.open = None;
                    return Some(self.close(start, i, color));
                }
                (Some((start, color)), Some(next)) if next != color => {
                    self.open = Some((i, next));
                    return Some(self.close(start, i, color));
                }
                _ => {}
            }
        }
        // Row boundary closes any open run.
        let (start, color) = self.open.take()?;
        Some(self.close(start, n, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_grid(bits: &str) -> OccupancyGrid {
        let cells: Vec<bool> = bits.chars().map(|c| c == '#').collect();
        OccupancyGrid::from_cells(cells.len(), 1, 1, cells).unwrap()
    }

    fn spans(grid: &OccupancyGrid) -> Vec<(usize, usize)> {
        GridMerger::new(grid, Axis::X)
            .runs()
            .map(|r| (r.start, r.len))
            .collect()
    }

    #[test]
    fn runs_split_on_gaps_and_close_at_boundary() {
        assert_eq!(spans(&row_grid("##.###..#")), vec![(0, 2), (3, 3), (8, 1)]);
        assert_eq!(spans(&row_grid(".#####")), vec![(1, 5)]);
        assert_eq!(spans(&row_grid("#")), vec![(0, 1)]);
    }

    #[test]
    fn empty_row_yields_nothing() {
        assert!(spans(&row_grid(".....")).is_empty());
    }

    #[test]
    fn start_index_zero_is_a_real_run() {
        let runs = spans(&row_grid("#...."));
        assert_eq!(runs, vec![(0, 1)]);
    }

    #[test]
    fn colour_changes_split_runs() {
        let grid = row_grid("#####")
            .with_colors(vec![
                ColorId(1),
                ColorId(1),
                ColorId(2),
                ColorId(2),
                ColorId(1),
            ])
            .unwrap();
        let runs: Vec<_> = GridMerger::new(&grid, Axis::X)
            .runs()
            .map(|r| (r.start, r.len, r.color))
            .collect();
        assert_eq!(
            runs,
            vec![
                (0, 2, Some(ColorId(1))),
                (2, 2, Some(ColorId(2))),
                (4, 1, Some(ColorId(1))),
            ]
        );
    }

    #[test]
    fn rescanning_is_identical() {
        let grid = OccupancyGrid::from_fn(5, 3, 4, |x, y, z| (x + y * 2 + z) % 3 != 0).unwrap();
        let merger = GridMerger::new(&grid, Axis::Z);
        let a: Vec<Run> = merger.runs().collect();
        let b: Vec<Run> = merger.runs().collect();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn run_cells_follow_axis() {
        let run = Run {
            axis: Axis::Y,
            start: 2,
            len: 3,
            fixed: [4, 1],
            color: None,
        };
        let cells: Vec<_> = run.cells().collect();
        assert_eq!(cells, vec![(4, 2, 1), (4, 3, 1), (4, 4, 1)]);
        assert_eq!(run.end(), 5);
    }
}
