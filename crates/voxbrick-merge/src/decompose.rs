use voxbrick_parts::{PartCatalog, PartSpec};

/// One chosen part and where it starts within its run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Piece<'c> {
    pub spec: &'c PartSpec,
    pub offset: usize,
}

/// Greedy largest-fit cover of `[0, len)`, yielded left to right.
#[derive(Clone, Debug)]
pub struct Pieces<'c> {
    catalog: &'c PartCatalog,
    remaining: usize,
    offset: usize,
}

impl<'c> Iterator for Pieces<'c> {
    type Item = Piece<'c>;

    fn next(&mut self) -> Option<Piece<'c>> {
        if self.remaining == 0 {
            return None;
        }
        let spec = self.catalog.largest_fit(self.remaining);
        let piece = Piece {
            spec,
            offset: self.offset,
        };
        self.offset += spec.length;
        self.remaining -= spec.length;
        Some(piece)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower = self.remaining.div_ceil(self.catalog.longest());
        (lower, Some(self.remaining))
    }
}

/// Split a run of `len` cells into catalog parts, always taking the longest
/// part that still fits. Not piece-count optimal (5 becomes 4+1, not 3+2).
pub fn decompose(len: usize, catalog: &PartCatalog) -> Pieces<'_> {
    debug_assert!(len >= 1, "runs are never empty");
    Pieces {
        catalog,
        remaining: len,
        offset: 0,
    }
}
