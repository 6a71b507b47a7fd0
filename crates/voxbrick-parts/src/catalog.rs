use std::collections::HashSet;

use crate::error::ConfigError;

/// One allowed piece: its length in grid cells and the part file it stands for.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PartSpec {
    pub length: usize,
    pub part: String,
}

impl PartSpec {
    pub fn new(length: usize, part: impl Into<String>) -> Self {
        Self {
            length,
            part: part.into(),
        }
    }
}

/// Validated part table, ordered longest first. Always contains a length-1
/// entry, so every positive run length can be covered.
#[derive(Clone, Debug, PartialEq)]
pub struct PartCatalog {
    specs: Vec<PartSpec>,
}

impl PartCatalog {
    pub fn new(mut specs: Vec<PartSpec>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for s in &specs {
            if s.length == 0 {
                return Err(ConfigError::ZeroLengthPart(s.part.clone()));
            }
            if !seen.insert(s.length) {
                return Err(ConfigError::DuplicateLength(s.length));
            }
        }
        if !seen.contains(&1) {
            return Err(ConfigError::MissingUnitPart);
        }
        specs.sort_by(|a, b| b.length.cmp(&a.length));
        log::debug!(
            "part catalog: {}",
            specs
                .iter()
                .map(|s| format!("{}={}", s.length, s.part))
                .collect::<Vec<_>>()
                .join(" ")
        );
        Ok(Self { specs })
    }

    /// 1xN bricks: 1x4, 1x3, 1x2, 1x1.
    pub fn bricks() -> Self {
        Self {
            specs: vec![
                PartSpec::new(4, "3010.dat"),
                PartSpec::new(3, "3622.dat"),
                PartSpec::new(2, "3004.dat"),
                PartSpec::new(1, "3005.dat"),
            ],
        }
    }

    /// 1xN plates: 1x4, 1x3, 1x2, 1x1.
    pub fn plates() -> Self {
        Self {
            specs: vec![
                PartSpec::new(4, "3710.dat"),
                PartSpec::new(3, "3623.dat"),
                PartSpec::new(2, "3023.dat"),
                PartSpec::new(1, "3024.dat"),
            ],
        }
    }

    /// Catalog holding only a 1x1 part; every filled cell becomes its own piece.
    pub fn unmerged(part: impl Into<String>) -> Self {
        Self {
            specs: vec![PartSpec::new(1, part)],
        }
    }

    #[inline]
    pub fn specs(&self) -> &[PartSpec] {
        &self.specs
    }

    #[inline]
    pub fn longest(&self) -> usize {
        self.specs[0].length
    }

    /// The length-1 part.
    #[inline]
    pub fn unit(&self) -> &PartSpec {
        &self.specs[self.specs.len() - 1]
    }

    /// Largest part no longer than `remaining`; the unit part when nothing longer fits.
    #[inline]
    pub fn largest_fit(&self, remaining: usize) -> &PartSpec {
        self.specs
            .iter()
            .find(|s| s.length <= remaining)
            .unwrap_or_else(|| self.unit())
    }

    pub fn by_length(&self, length: usize) -> Option<&PartSpec> {
        self.specs.iter().find(|s| s.length == length)
    }
}
