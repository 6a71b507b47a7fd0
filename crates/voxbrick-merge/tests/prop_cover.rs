use std::collections::BTreeSet;

use proptest::prelude::*;
use voxbrick_grid::{Axis, OccupancyGrid};
use voxbrick_merge::{BuildOptions, Centering, GridMerger, build_placements, decompose};
use voxbrick_parts::{ColorId, PartCatalog};

fn arb_grid() -> impl Strategy<Value = OccupancyGrid> {
    (1usize..=7, 1usize..=5, 1usize..=7).prop_flat_map(|(nx, ny, nz)| {
        prop::collection::vec(any::<bool>(), nx * ny * nz)
            .prop_map(move |cells| OccupancyGrid::from_cells(nx, ny, nz, cells).unwrap())
    })
}

fn arb_axis() -> impl Strategy<Value = Axis> {
    prop::sample::select(Axis::ALL.to_vec())
}

proptest! {
    // Runs along any axis reconstruct exactly the filled cells
    #[test]
    fn runs_cover_filled_cells(grid in arb_grid(), axis in arb_axis()) {
        let mut covered = BTreeSet::new();
        for run in GridMerger::new(&grid, axis).runs() {
            prop_assert!(run.len >= 1);
            for cell in run.cells() {
                prop_assert!(covered.insert(cell), "cell {:?} covered twice", cell);
            }
        }
        let filled: BTreeSet<_> = grid.filled_cells().collect();
        prop_assert_eq!(covered, filled);
    }

    // Runs are maximal: the cells just outside each run are empty or out of bounds
    #[test]
    fn runs_are_maximal(grid in arb_grid(), axis in arb_axis()) {
        let n = grid.extent(axis);
        for run in GridMerger::new(&grid, axis).runs() {
            if run.start > 0 {
                let (x, y, z) = axis.compose(run.start - 1, run.fixed);
                prop_assert!(!grid.get(x, y, z));
            }
            if run.end() < n {
                let (x, y, z) = axis.compose(run.end(), run.fixed);
                prop_assert!(!grid.get(x, y, z));
            }
        }
    }

    // Greedy cover: contiguous, exact, each pick the largest that fits
    #[test]
    fn decomposition_is_greedy_cover(len in 1usize..200) {
        let cat = PartCatalog::bricks();
        let mut expect_offset = 0;
        for piece in decompose(len, &cat) {
            prop_assert_eq!(piece.offset, expect_offset);
            let remaining = len - piece.offset;
            prop_assert!(piece.spec.length <= remaining);
            prop_assert_eq!(piece.spec.length, remaining.min(4));
            expect_offset += piece.spec.length;
        }
        prop_assert_eq!(expect_offset, len);
    }

    // Parallel row building yields the same placements in the same order
    #[test]
    fn parallel_matches_sequential(grid in arb_grid(), z_axis in any::<bool>()) {
        let axis = if z_axis { Axis::Z } else { Axis::X };
        let seq = BuildOptions { merge_axis: axis, ..BuildOptions::default() };
        let par = BuildOptions { parallel: true, ..seq.clone() };
        let a = build_placements(&grid, &PartCatalog::bricks(), &seq).unwrap();
        let b = build_placements(&grid, &PartCatalog::bricks(), &par).unwrap();
        prop_assert_eq!(&a.placements, &b.placements);
        prop_assert_eq!(a.stats.cells, grid.filled_count());
        prop_assert_eq!(b.stats.by_length, a.stats.by_length);
    }

    // Unmerged catalog emits one part per filled cell
    #[test]
    fn unmerged_places_every_cell(grid in arb_grid()) {
        let opts = BuildOptions {
            centering: Centering::Origin,
            default_color: ColorId(71),
            ..BuildOptions::default()
        };
        let build = build_placements(&grid, &PartCatalog::unmerged("3005.dat"), &opts).unwrap();
        prop_assert_eq!(build.placements.len(), grid.filled_count());
        let mut got: Vec<(i64, i64, i64)> = build
            .placements
            .iter()
            .map(|p| (p.position.x as i64, p.position.y as i64, p.position.z as i64))
            .collect();
        got.sort();
        let mut want: Vec<(i64, i64, i64)> = grid
            .filled_cells()
            .map(|(x, y, z)| (x as i64 * 20, -(y as i64) * 24, z as i64 * 20))
            .collect();
        want.sort();
        prop_assert_eq!(got, want);
    }
}
