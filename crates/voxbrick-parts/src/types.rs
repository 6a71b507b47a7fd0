use serde::Deserialize;

use crate::error::ConfigError;

/// LDraw colour code carried through to every placement.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct ColorId(pub u32);

impl ColorId {
    pub const BLACK: ColorId = ColorId(0);
    pub const RED: ColorId = ColorId(4);
    pub const WHITE: ColorId = ColorId(15);
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stud pitch in LDraw units.
pub const STUD_EDGE: f32 = 20.0;
/// Height of one brick in LDraw units.
pub const BRICK_HEIGHT: f32 = 24.0;
/// Height of one plate (a third of a brick).
pub const PLATE_HEIGHT: f32 = 8.0;

/// In-plane edge and per-layer height of one grid cell in target units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Units {
    edge: f32,
    height: f32,
}

impl Units {
    pub fn new(edge: f32, height: f32) -> Result<Self, ConfigError> {
        if !(edge.is_finite() && edge > 0.0) {
            return Err(ConfigError::InvalidUnitSize {
                name: "edge",
                value: edge,
            });
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(ConfigError::InvalidUnitSize {
                name: "height",
                value: height,
            });
        }
        Ok(Self { edge, height })
    }

    pub const fn bricks() -> Self {
        Self {
            edge: STUD_EDGE,
            height: BRICK_HEIGHT,
        }
    }

    pub const fn plates() -> Self {
        Self {
            edge: STUD_EDGE,
            height: PLATE_HEIGHT,
        }
    }

    #[inline]
    pub fn edge(&self) -> f32 {
        self.edge
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Default for Units {
    fn default() -> Self {
        Units::bricks()
    }
}
